//! Case conversions between the snake_case identifiers used by Wayland
//! protocol documents and the conventions Vala declarations expect.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `wl_surface` | [`to_pascal_case`] | `WlSurface` |
//! | `set_title` | [`to_camel_case`] | `setTitle` |
//! | `wl_output` | [`to_screaming_snake_case`] | `WL_OUTPUT` |

/// Upper-cases the first character of `word` and keeps the rest as is.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Converts snake_case to PascalCase.
///
/// Empty segments produced by leading, trailing or doubled underscores
/// contribute nothing.
///
/// ```
/// use wl_vapi_compiler::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("xdg_toplevel"), "XdgToplevel");
/// assert_eq!(to_pascal_case("XdgToplevel"), "XdgToplevel");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Converts snake_case to lowerCamelCase. The first segment is kept verbatim.
///
/// ```
/// use wl_vapi_compiler::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("configure_bounds"), "configureBounds");
/// assert_eq!(to_camel_case("enter"), "enter");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut segments = s.split('_');
    let mut result = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        result.push_str(&capitalize(segment));
    }
    result
}

/// Converts snake_case to SCREAMING_SNAKE_CASE. Underscores stay where they are.
pub fn to_screaming_snake_case(s: &str) -> String {
    s.to_ascii_uppercase()
}
