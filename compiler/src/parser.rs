use roxmltree::{Document, Node};
use tracing::warn;
use wl_vapi_schema::{Arg, ArgType, Entry, Enum, Event, Interface, Protocol, Request};

use crate::{
    error::VapiError,
    utils::{error, quote},
};

/// Parses a Wayland protocol XML document into a [`Protocol`].
///
/// Only the structure the generator needs is read: interfaces and their
/// requests, events, args, enums and entries. Descriptions, copyright blocks
/// and unknown elements are skipped.
pub fn parse_protocol(text: &str) -> Result<Protocol, VapiError> {
    let document = Document::parse(text).map_err(|e| {
        let pos = e.pos();
        error(&e.to_string(), pos.row as usize, pos.col as usize)
    })?;

    let root = document.root_element();
    if !root.has_tag_name("protocol") {
        warn!(
            element = root.tag_name().name(),
            "root element is not <protocol>, reading its interfaces anyway"
        );
    }

    let interfaces = children(root, "interface")
        .map(|node| parse_interface(&document, node))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Protocol {
        name: root.attribute("name").map(str::to_string),
        interfaces,
    })
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| child.has_tag_name(tag))
}

fn required_attribute(document: &Document, node: Node, name: &str) -> Result<String, VapiError> {
    match node.attribute(name) {
        Some(value) => Ok(value.to_string()),
        None => {
            let pos = document.text_pos_at(node.range().start);
            Err(error(
                &format!(
                    "Element <{}> is missing the required attribute {}",
                    node.tag_name().name(),
                    quote(name)
                ),
                pos.row as usize,
                pos.col as usize,
            ))
        }
    }
}

fn flag(node: Node, name: &str) -> bool {
    node.attribute(name) == Some("true")
}

fn parse_interface(document: &Document, node: Node) -> Result<Interface, VapiError> {
    let name = required_attribute(document, node, "name")?;

    let requests = children(node, "request")
        .map(|request| -> Result<Request, VapiError> {
            Ok(Request {
                name:      required_attribute(document, request, "name")?,
                // `destroyer="true"` is accepted next to the grammar's `type="destructor"`.
                destroyer: flag(request, "destroyer")
                    || request.attribute("type") == Some("destructor"),
                args:      parse_args(document, request)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let events = children(node, "event")
        .map(|event| -> Result<Event, VapiError> {
            Ok(Event {
                name: required_attribute(document, event, "name")?,
                args: parse_args(document, event)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let enums = children(node, "enum")
        .map(|enum_node| parse_enum(document, enum_node))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Interface {
        name,
        requests,
        events,
        enums,
    })
}

fn parse_args(document: &Document, message: Node) -> Result<Vec<Arg>, VapiError> {
    children(message, "arg")
        .map(|arg| -> Result<Arg, VapiError> {
            Ok(Arg {
                name:      required_attribute(document, arg, "name")?,
                type_:     ArgType::from_tag(&required_attribute(document, arg, "type")?),
                interface: arg.attribute("interface").map(str::to_string),
                enum_:     arg.attribute("enum").map(str::to_string),
            })
        })
        .collect()
}

fn parse_enum(document: &Document, node: Node) -> Result<Enum, VapiError> {
    let entries = children(node, "entry")
        .map(|entry| -> Result<Entry, VapiError> {
            Ok(Entry {
                name:  required_attribute(document, entry, "name")?,
                value: entry.attribute("value").map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Enum {
        name: required_attribute(document, node, "name")?,
        bitfield: flag(node, "bitfield"),
        entries,
    })
}
