//! This crate holds the in-memory model of a Wayland protocol document: the
//! tree of interfaces, requests, events and enums that the wl-vapi compiler
//! reads from XML and translates into Vala declarations.
//!
//! ```
//! use wl_vapi_schema::*;
//!
//! let surface = Interface {
//!     name:     "wl_surface".to_owned(),
//!     requests: vec![Request {
//!         name:      "destroy".to_owned(),
//!         destroyer: false,
//!         args:      vec![],
//!     }],
//!     events:   vec![],
//!     enums:    vec![],
//! };
//!
//! assert_eq!(surface.destructor().map(|r| r.name.as_str()), Some("destroy"));
//! assert_eq!(ArgType::from_tag("new_id"), ArgType::NewId);
//! assert_eq!(ArgType::from_tag("wl_buffer"), ArgType::Named("wl_buffer".to_owned()));
//! ```

pub mod arg_type;
pub mod protocol;

pub use arg_type::*;
pub use protocol::*;
