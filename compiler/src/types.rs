//! Declaration records produced by the builder and consumed by the emitter.
//! They carry every string the emitter writes, so emission never looks back
//! at the protocol model.

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Class(ClassDecl),
    ListenerStruct(ListenerStructDecl),
    ListenerDelegate(ListenerDelegateDecl),
    Enum(EnumDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name:             String,
    pub cheader_filename: String,
    pub cname:            String,
    pub cprefix:          String,
    /// Empty when the interface has no destructor request.
    pub free_function:    String,
    pub iface_cname:      String,
    pub methods:          Vec<MethodDecl>,
    /// Listener struct type taken by `add_listener`, if the interface has events.
    pub listener:         Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name:              String,
    pub return_type:       String,
    pub params:            Vec<ParamDecl>,
    pub destroys_instance: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub type_name: String,
    pub name:      String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListenerStructDecl {
    pub name:   String,
    pub cname:  String,
    pub fields: Vec<ParamDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListenerDelegateDecl {
    pub name:          String,
    pub class_name:    String,
    pub instance_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name:             String,
    pub cname:            String,
    pub cprefix:          String,
    pub cheader_filename: String,
    pub is_flags:         bool,
    pub entries:          Vec<EnumEntryDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntryDecl {
    pub name:  String,
    /// Explicit C symbol, set when `name` had to be altered to be a valid identifier.
    pub cname: Option<String>,
}
