use tracing::debug;
use wl_vapi_schema::Protocol;

use crate::{
    builder::build_interface,
    emitter::emit_declarations,
    error::VapiError,
    parser::parse_protocol,
    verifier::verify_protocol,
};

pub const GENERATOR_NAME: &str = "wl-vapi-gen";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse and verify a protocol document.
/// Returns `Err(VapiError)` if the XML is malformed or a name cannot be emitted.
pub fn compile_protocol(text: &str) -> Result<Protocol, VapiError> {
    let protocol = parse_protocol(text)?;
    verify_protocol(&protocol)?;
    Ok(protocol)
}

/// Generate the complete VAPI text for `protocol`.
///
/// Interfaces are built and emitted one at a time, in document order. The
/// first error aborts the whole run and nothing is returned.
pub fn generate_vapi(protocol: &Protocol, cheader: &str) -> Result<String, VapiError> {
    let mut vapi = format!("// Generated VAPI file using {} {}\n\n", GENERATOR_NAME, VERSION);

    for interface in &protocol.interfaces {
        let declarations = build_interface(interface, cheader)?;
        let mut chunk = String::new();
        emit_declarations(&declarations, &mut chunk);
        debug!(
            interface = interface.name.as_str(),
            declarations = declarations.len(),
            bytes = chunk.len(),
            "generated interface"
        );
        vapi.push_str(&chunk);
    }

    Ok(vapi)
}

/// `compile_protocol` followed by `generate_vapi`.
pub fn compile_protocol_to_vapi(text: &str, cheader: &str) -> Result<String, VapiError> {
    let protocol = compile_protocol(text)?;
    generate_vapi(&protocol, cheader)
}
