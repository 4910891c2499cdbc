use lazy_static::lazy_static;
use regex::Regex;
use wl_vapi_schema::{Arg, Protocol};

use crate::{
    error::VapiError,
    naming::{to_camel_case, to_pascal_case},
    resolver::class_name,
    utils::{location, quote},
};

lazy_static! {
    static ref IDENTIFIER:  Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref ENTRY_NAME:  Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

/// Words that cannot appear as plain identifiers in Vala source.
pub const VALA_KEYWORDS: [&str; 63] = [
    "abstract", "as", "async", "base", "break", "case", "catch", "class", "const",
    "construct", "continue", "default", "delegate", "delete", "do", "dynamic", "else",
    "ensures", "enum", "errordomain", "extern", "false", "finally", "for", "foreach",
    "get", "if", "in", "inline", "interface", "internal", "is", "lock", "namespace",
    "new", "null", "out", "override", "owned", "params", "private", "protected",
    "public", "ref", "requires", "return", "set", "signal", "sizeof", "static",
    "struct", "switch", "this", "throw", "throws", "true", "try", "typeof", "unowned",
    "var", "virtual", "void", "while",
];

pub fn is_vala_keyword(name: &str) -> bool {
    VALA_KEYWORDS.contains(&name)
}

fn check_identifier(name: &str, what: &str, at: impl FnOnce() -> String) -> Result<(), VapiError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(VapiError::translation(
            at(),
            format!("The {} name {} is not a valid identifier", what, quote(name)),
        ))
    }
}

/// Checks a name derived from a protocol name, e.g. the class for `wl_2d`.
fn check_derived(
    name: &str,
    derived: &str,
    what: &str,
    at: impl FnOnce() -> String,
) -> Result<(), VapiError> {
    if IDENTIFIER.is_match(derived) {
        Ok(())
    } else {
        Err(VapiError::translation(
            at(),
            format!(
                "The {} name {} becomes {}, which is not a valid identifier",
                what,
                quote(name),
                quote(derived)
            ),
        ))
    }
}

fn check_args(interface: &str, kind: &str, member: &str, args: &[Arg]) -> Result<(), VapiError> {
    for arg in args {
        check_identifier(&arg.name, "argument", || {
            location(interface, Some((kind, member)), None)
        })?;
    }
    Ok(())
}

/// Returns `Ok(())` if every name that ends up in the generated VAPI can be
/// written as a Vala identifier, or `Err(VapiError::TranslationError { .. })`
/// naming the first offender.
///
/// Cross-references are not checked here; the type resolver reports those.
pub fn verify_protocol(protocol: &Protocol) -> Result<(), VapiError> {
    for interface in &protocol.interfaces {
        check_identifier(&interface.name, "interface", || {
            format!("interface {}", quote(&interface.name))
        })?;
        let iface = interface.name.as_str();
        check_derived(iface, &class_name(iface), "interface", || location(iface, None, None))?;

        for request in &interface.requests {
            check_identifier(&request.name, "request", || location(iface, None, None))?;
            check_args(iface, "request", &request.name, &request.args)?;
        }

        for event in &interface.events {
            check_identifier(&event.name, "event", || location(iface, None, None))?;
            // Listener field name; empty exactly when the delegate suffix is.
            check_derived(&event.name, &to_camel_case(&event.name), "event", || {
                location(iface, None, None)
            })?;
        }

        for enum_ in &interface.enums {
            check_identifier(&enum_.name, "enum", || location(iface, None, None))?;
            if to_pascal_case(&enum_.name).is_empty() {
                return Err(VapiError::translation(
                    location(iface, None, None),
                    format!("The enum name {} has no letters or digits", quote(&enum_.name)),
                ));
            }
            for entry in &enum_.entries {
                if !ENTRY_NAME.is_match(&entry.name) {
                    return Err(VapiError::translation(
                        location(iface, Some(("enum", enum_.name.as_str())), None),
                        format!("The entry name {} is not a valid identifier", quote(&entry.name)),
                    ));
                }
            }
        }
    }

    Ok(())
}
