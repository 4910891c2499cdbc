//! wl-vapi-compiler
//!
//! This crate implements:
//!  1) A parser for Wayland protocol XML documents (`parser`),
//!  2) A verifier for names that must become Vala identifiers (`verifier`),
//!  3) Case conversions (`naming`) and argument type resolution (`resolver`),
//!  4) Declaration building and VAPI emission (`builder`, `emitter`),
//!  5) The driver tying them together (`compile_protocol_to_vapi` → `String`),
//!  6) The error type (`VapiError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod naming;
pub mod parser;
pub mod verifier;
pub mod resolver;
pub mod builder;
pub mod emitter;
pub mod compiler;

pub use compiler::compile_protocol;
pub use compiler::compile_protocol_to_vapi;
pub use compiler::generate_vapi;
pub use error::VapiError;
