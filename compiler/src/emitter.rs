use crate::types::{ClassDecl, Declaration, EnumDecl, ListenerDelegateDecl, ListenerStructDecl};

/// Appends the VAPI text for `declarations` to `out`, in the given order.
pub fn emit_declarations(declarations: &[Declaration], out: &mut String) {
    for declaration in declarations {
        emit_declaration(declaration, out);
    }
}

pub fn emit_declaration(declaration: &Declaration, out: &mut String) {
    match declaration {
        Declaration::Class(class) => emit_class(class, out),
        Declaration::ListenerStruct(listener) => emit_listener_struct(listener, out),
        Declaration::ListenerDelegate(delegate) => emit_listener_delegate(delegate, out),
        Declaration::Enum(enum_decl) => emit_enum(enum_decl, out),
    }
}

fn emit_class(class: &ClassDecl, out: &mut String) {
    out.push_str(&format!(
        "[CCode (cheader_filename=\"{}\", cname=\"{}\", cprefix=\"{}\", free_function=\"{}\")]\n",
        class.cheader_filename, class.cname, class.cprefix, class.free_function
    ));
    out.push_str("[Compact]\n");
    out.push_str(&format!("public class {} : Wl.Proxy {{\n", class.name));

    // Members every proxy class has.
    out.push_str(&format!("  [CCode (cname = \"{}\")]\n", class.iface_cname));
    out.push_str("  public static Wl.Interface iface;\n\n");
    out.push_str("  public void set_user_data(void* user_data);\n");
    out.push_str("  public void* get_user_data();\n");
    out.push_str("  public uint32 get_version();\n\n");

    for method in &class.methods {
        if method.destroys_instance {
            out.push_str("  [DestroysInstance]\n");
        }
        let params = method
            .params
            .iter()
            .map(|param| format!("{} {}", param.type_name, param.name))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  public {} {} ({});\n",
            method.return_type, method.name, params
        ));
    }

    if let Some(listener) = &class.listener {
        out.push_str(&format!(
            "  public int add_listener({} listener, void* data);\n",
            listener
        ));
    }

    out.push_str("}\n\n");
}

fn emit_listener_struct(listener: &ListenerStructDecl, out: &mut String) {
    out.push_str(&format!(
        "\n[CCode (cname = \"{}\", has_type_id = false)]\n",
        listener.cname
    ));
    out.push_str(&format!("public struct {} {{\n", listener.name));
    for field in &listener.fields {
        out.push_str(&format!("  public {} {};\n", field.type_name, field.name));
    }
    out.push_str("}\n\n");
}

fn emit_listener_delegate(delegate: &ListenerDelegateDecl, out: &mut String) {
    out.push_str("[CCode (has_target = false, has_typedef = false)]\n");
    out.push_str(&format!(
        "public delegate void {}(void *data, {} {});\n\n",
        delegate.name, delegate.class_name, delegate.instance_name
    ));
}

fn emit_enum(enum_decl: &EnumDecl, out: &mut String) {
    out.push_str(&format!(
        "[CCode (cprefix=\"{}\", cname=\"{}\", cheader_filename=\"{}\")]\n",
        enum_decl.cprefix, enum_decl.cname, enum_decl.cheader_filename
    ));
    if enum_decl.is_flags {
        out.push_str("[Flags]\n");
    }
    out.push_str(&format!("public enum {} {{\n", enum_decl.name));
    for entry in &enum_decl.entries {
        if let Some(cname) = &entry.cname {
            out.push_str(&format!("  [CCode (cname = \"{}\")]\n", cname));
        }
        out.push_str(&format!("  {},\n", entry.name));
    }
    out.push_str("}\n\n");
}
