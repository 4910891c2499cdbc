use crate::error::VapiError;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

pub fn error(msg: &str, line: usize, column: usize) -> VapiError {
    VapiError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}

/// `interface "wl_surface", request "attach", argument "buffer"`
pub fn location(interface: &str, member: Option<(&str, &str)>, arg: Option<&str>) -> String {
    let mut text = format!("interface {}", quote(interface));
    if let Some((kind, name)) = member {
        text.push_str(&format!(", {} {}", kind, quote(name)));
    }
    if let Some(arg) = arg {
        text.push_str(&format!(", argument {}", quote(arg)));
    }
    text
}
