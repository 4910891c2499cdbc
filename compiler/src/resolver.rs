use wl_vapi_schema::{Arg, ArgType};

use crate::{error::VapiError, naming::to_pascal_case, utils::quote};

/// Interfaces of the core protocol, already bound by the `wayland-client` VAPI.
pub const CORE_PREFIX: &str = "wl_";
pub const CORE_NAMESPACE: &str = "Wl";

fn non_empty(name: String, interface: &str, reference: &str) -> Result<String, VapiError> {
    if name.is_empty() {
        Err(VapiError::translation(
            format!("interface {}", quote(interface)),
            format!("The reference {} does not name a type", quote(reference)),
        ))
    } else {
        Ok(name)
    }
}

/// The Vala class generated for an interface, and the stem of every name
/// derived from it (listener, delegates, enums).
///
/// `wl_output` -> `Output`, `xdg_surface` -> `XdgSurface`.
pub fn class_name(interface: &str) -> String {
    to_pascal_case(interface.strip_prefix(CORE_PREFIX).unwrap_or(interface))
}

/// Maps an argument type onto a Vala type name.
///
/// `interface` is the enclosing interface; `interface_ref` and `enum_ref` are
/// the arg's `interface` and `enum` attributes.
pub fn resolve_type(
    arg_type: &ArgType,
    interface: &str,
    interface_ref: Option<&str>,
    enum_ref: Option<&str>,
) -> Result<String, VapiError> {
    if let (ArgType::Object | ArgType::NewId, Some(target)) = (arg_type, interface_ref) {
        return match target.strip_prefix(CORE_PREFIX) {
            Some(rest) => {
                let name = non_empty(to_pascal_case(rest), interface, target)?;
                Ok(format!("{}.{}", CORE_NAMESPACE, name))
            }
            None => resolve_type(&ArgType::Named(target.to_string()), interface, None, None),
        };
    }

    if let Some(reference) = enum_ref.filter(|_| arg_type.is_integer()) {
        let mut parts = reference.split('.');
        let (owner, enum_name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(enum_name), None, _) => (interface, enum_name),
            (Some(owner), Some(enum_name), None) => (owner, enum_name),
            _ => {
                return Err(VapiError::translation(
                    format!("interface {}", quote(interface)),
                    format!("The enum reference {} has more than one '.'", quote(reference)),
                ))
            }
        };
        let owner = non_empty(class_name(owner), interface, reference)?;
        let enum_name = non_empty(to_pascal_case(enum_name), interface, reference)?;
        return Ok(owner + &enum_name);
    }

    let name = match arg_type {
        ArgType::Fixed  => "Wl.fixed_t".to_string(),
        ArgType::String => "string".to_string(),
        ArgType::Array  => "Wl.Array".to_string(),
        ArgType::Fd     => "int32".to_string(),
        ArgType::Int    => "int32".to_string(),
        ArgType::Uint   => "uint32".to_string(),
        other           => to_pascal_case(other.as_tag()),
    };
    non_empty(name, interface, arg_type.as_tag())
}

/// Resolves an argument of `interface`, using its `interface` and `enum` attributes.
pub fn resolve_arg(arg: &Arg, interface: &str) -> Result<String, VapiError> {
    resolve_type(
        &arg.type_,
        interface,
        arg.interface.as_deref(),
        arg.enum_.as_deref(),
    )
}
