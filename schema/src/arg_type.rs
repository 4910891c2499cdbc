use serde::{Serialize, Serializer};
use std::fmt;

/// The wire type of a request or event argument.
///
/// The Wayland grammar has a fixed set of primitive tags. Anything else is
/// kept verbatim as [`ArgType::Named`] so a type can be referenced purely by
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgType {
    Fixed,
    String,
    Array,
    Fd,
    Int,
    Uint,
    Object,
    NewId,
    Named(String),
}

impl ArgType {
    /// Maps an XML `type` attribute onto an `ArgType`. Never fails.
    pub fn from_tag(tag: &str) -> ArgType {
        match tag {
            "fixed"  => ArgType::Fixed,
            "string" => ArgType::String,
            "array"  => ArgType::Array,
            "fd"     => ArgType::Fd,
            "int"    => ArgType::Int,
            "uint"   => ArgType::Uint,
            "object" => ArgType::Object,
            "new_id" => ArgType::NewId,
            other    => ArgType::Named(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            ArgType::Fixed       => "fixed",
            ArgType::String      => "string",
            ArgType::Array       => "array",
            ArgType::Fd          => "fd",
            ArgType::Int         => "int",
            ArgType::Uint        => "uint",
            ArgType::Object      => "object",
            ArgType::NewId       => "new_id",
            ArgType::Named(name) => name,
        }
    }

    /// `int` and `uint` are the only tags an `enum` attribute can qualify.
    pub fn is_integer(&self) -> bool {
        matches!(self, ArgType::Int | ArgType::Uint)
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for ArgType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_round_trips_primitives() {
        for tag in ["fixed", "string", "array", "fd", "int", "uint", "object", "new_id"] {
            let ty = ArgType::from_tag(tag);
            assert!(!matches!(ty, ArgType::Named(_)), "{} should be a primitive", tag);
            assert_eq!(ty.as_tag(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_named() {
        assert_eq!(ArgType::from_tag("wl_surface"), ArgType::Named("wl_surface".into()));
        assert_eq!(ArgType::from_tag("wl_surface").to_string(), "wl_surface");
        assert!(!ArgType::from_tag("wl_surface").is_integer());
        assert!(ArgType::Uint.is_integer());
    }
}
