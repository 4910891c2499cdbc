use tracing::trace;
use wl_vapi_schema::{ArgType, Enum, Interface, Request};

use crate::{
    error::VapiError,
    naming::{to_camel_case, to_pascal_case, to_screaming_snake_case},
    resolver::{class_name, resolve_arg, resolve_type},
    types::{
        ClassDecl, Declaration, EnumDecl, EnumEntryDecl, ListenerDelegateDecl,
        ListenerStructDecl, MethodDecl, ParamDecl,
    },
    utils::{location, quote},
    verifier::is_vala_keyword,
};

/// Prefixes Vala keywords with `@` so they can be used as identifiers.
fn escape_vala_keyword(s: &str) -> String {
    if is_vala_keyword(s) {
        format!("@{}", s)
    } else {
        s.to_string()
    }
}

/// Builds the declarations for one interface, in emission order: the class,
/// then the listener struct and one delegate per event (only when there are
/// events), then one enum per `<enum>`.
pub fn build_interface(interface: &Interface, cheader: &str) -> Result<Vec<Declaration>, VapiError> {
    let iface = interface.name.as_str();
    let class = class_name(iface);
    let listener = format!("{}Listener", class);

    let free_function = interface
        .destructor()
        .map(|request| format!("{}_{}", iface, request.name))
        .unwrap_or_default();

    let methods = interface
        .requests
        .iter()
        .map(|request| build_method(iface, request))
        .collect::<Result<Vec<_>, _>>()?;

    let mut declarations = vec![Declaration::Class(ClassDecl {
        name: class.clone(),
        cheader_filename: cheader.to_string(),
        cname: format!("struct {}", iface),
        cprefix: format!("{}_", iface),
        free_function,
        iface_cname: format!("{}_interface", iface),
        methods,
        listener: interface.has_events().then(|| listener.clone()),
    })];

    if interface.has_events() {
        let fields = interface
            .events
            .iter()
            .map(|event| ParamDecl {
                type_name: format!("{}{}", listener, to_pascal_case(&event.name)),
                name:      escape_vala_keyword(&to_camel_case(&event.name)),
            })
            .collect();

        declarations.push(Declaration::ListenerStruct(ListenerStructDecl {
            name: listener.clone(),
            cname: format!("struct {}_listener", iface),
            fields,
        }));

        for event in &interface.events {
            declarations.push(Declaration::ListenerDelegate(ListenerDelegateDecl {
                name:          format!("{}{}", listener, to_pascal_case(&event.name)),
                class_name:    class.clone(),
                instance_name: escape_vala_keyword(iface),
            }));
        }
    }

    for enum_ in &interface.enums {
        declarations.push(Declaration::Enum(build_enum(iface, &class, enum_, cheader)));
    }

    trace!(interface = iface, count = declarations.len(), "built declarations");
    Ok(declarations)
}

/// One request becomes one method. A `new_id` argument is the return type;
/// every other argument is a parameter, in document order.
fn build_method(iface: &str, request: &Request) -> Result<MethodDecl, VapiError> {
    let mut return_type: Option<String> = None;
    let mut params = Vec::with_capacity(request.args.len());

    for arg in &request.args {
        let at = || location(iface, Some(("request", request.name.as_str())), Some(arg.name.as_str()));

        if arg.type_ == ArgType::NewId {
            if return_type.is_some() {
                return Err(VapiError::translation(
                    at(),
                    format!(
                        "Request {} has more than one new_id argument",
                        quote(&request.name)
                    ),
                ));
            }
            let resolved = resolve_type(&arg.type_, iface, arg.interface.as_deref(), None)
                .map_err(|e| e.within(at()))?;
            return_type = Some(resolved);
        } else {
            params.push(ParamDecl {
                type_name: resolve_arg(arg, iface).map_err(|e| e.within(at()))?,
                name:      escape_vala_keyword(&arg.name),
            });
        }
    }

    Ok(MethodDecl {
        name: escape_vala_keyword(&request.name),
        return_type: return_type.unwrap_or_else(|| "void".to_string()),
        params,
        destroys_instance: request.is_destructor(),
    })
}

fn build_enum(iface: &str, class: &str, enum_: &Enum, cheader: &str) -> EnumDecl {
    let cprefix = format!(
        "{}_{}_",
        to_screaming_snake_case(iface),
        to_screaming_snake_case(&enum_.name)
    );

    let entries = enum_
        .entries
        .iter()
        .map(|entry| {
            let name = to_screaming_snake_case(&entry.name);
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                EnumEntryDecl {
                    cname: Some(format!("{}{}", cprefix, name)),
                    name:  format!("_{}", name),
                }
            } else {
                EnumEntryDecl { name, cname: None }
            }
        })
        .collect();

    EnumDecl {
        name: format!("{}{}", class, to_pascal_case(&enum_.name)),
        cname: format!("enum {}_{}", iface, enum_.name),
        cprefix,
        cheader_filename: cheader.to_string(),
        is_flags: enum_.bitfield,
        entries,
    }
}
