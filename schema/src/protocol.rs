use serde::Serialize;

use crate::ArgType;

/// A parsed protocol document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Protocol {
    pub name:       Option<String>,
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub name:     String,
    pub requests: Vec<Request>,
    pub events:   Vec<Event>,
    pub enums:    Vec<Enum>,
}

impl Interface {
    /// The request that frees the native object: the first one, in document
    /// order, that is named `destroy` or flagged as a destroyer.
    pub fn destructor(&self) -> Option<&Request> {
        self.requests.iter().find(|request| request.is_destructor())
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub name:      String,
    pub destroyer: bool,
    pub args:      Vec<Arg>,
}

impl Request {
    pub fn is_destructor(&self) -> bool {
        self.destroyer || self.name == "destroy"
    }

    /// Arguments that designate the object created by this request.
    pub fn new_id_args(&self) -> impl Iterator<Item = &Arg> {
        self.args.iter().filter(|arg| arg.type_ == ArgType::NewId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    pub args: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arg {
    pub name:      String,
    #[serde(rename = "type")]
    pub type_:     ArgType,
    pub interface: Option<String>,
    #[serde(rename = "enum")]
    pub enum_:     Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    pub name:     String,
    pub bitfield: bool,
    pub entries:  Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name:  String,
    pub value: Option<String>,
}
