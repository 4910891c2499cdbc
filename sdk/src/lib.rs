//! wl-vapi
//!
//! This crate is the entry point for generating Vala bindings from Wayland
//! protocol files.
//!
//! - `generate_vapi_file`: protocol XML on disk → `.vapi` on disk
//! - `load_protocol_file`: protocol XML on disk → verified `Protocol`
//! - `protocol_to_json` / `render_json`: the protocol model as pretty‐printed JSON
//! - Re-exports of the compiler API and the protocol model

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

pub use wl_vapi_compiler::error::VapiError;
pub use wl_vapi_compiler::{compile_protocol, compile_protocol_to_vapi, generate_vapi};
pub use wl_vapi_schema::{Arg, ArgType, Entry, Enum, Event, Interface, Protocol, Request};

/// Read a protocol file, returning `InputNotFound` when it does not exist.
pub fn read_protocol_file(path: &Path) -> Result<String, VapiError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VapiError::InputNotFound(path.to_path_buf()),
        _ => VapiError::Io(e),
    })
}

/// Write `contents` to `path`, replacing whatever was there.
pub fn write_output_file(path: &Path, contents: &str) -> Result<(), VapiError> {
    fs::write(path, contents).map_err(|source| VapiError::OutputWriteError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Read, parse and verify the protocol file at `path`.
pub fn load_protocol_file(path: &Path) -> Result<Protocol, VapiError> {
    let text = read_protocol_file(path)?;
    info!(path = %path.display(), "read protocol");
    compile_protocol(&text)
}

/// Generate `vapi` from the protocol XML at `protocol`.
///
/// The whole VAPI is generated in memory first, so the output file is only
/// touched once everything succeeded.
pub fn generate_vapi_file(protocol: &Path, vapi: &Path, cheader: &str) -> Result<(), VapiError> {
    let protocol = load_protocol_file(protocol)?;
    let output = generate_vapi(&protocol, cheader)?;
    write_output_file(vapi, &output)
}

/// Render an already parsed protocol as pretty‐printed JSON.
pub fn render_json(protocol: &Protocol) -> Result<String, VapiError> {
    Ok(serde_json::to_string_pretty(protocol)?)
}

/// Parse and verify a protocol document, then render the model as JSON.
pub fn protocol_to_json(text: &str) -> Result<String, VapiError> {
    render_json(&compile_protocol(text)?)
}

pub mod error {
    pub use wl_vapi_compiler::error::VapiError;
}

pub mod schema {
    pub use wl_vapi_schema::*;
}
