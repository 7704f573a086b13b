//! Data types used throughout the completion engine.
//!
//! This module contains the "model" structs and enums that describe the
//! classes each symbol source can hand out (bytecode classes from the
//! workspace, reflective classes from the runtime classpath) as well as the
//! request-side types (MemberKind, CompletionKind, DescriptorToken).

use serde::{Deserialize, Serialize};

/// Which member list of an owner class a completion reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Field,
}

/// The four kinds of completion a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionKind {
    /// A slash-separated class name (e.g. `java/lang/Str`).
    InternalName,
    /// A reference type descriptor (e.g. `Ljava/lang/Str`, `[[Ljava/`).
    Descriptor,
    /// A method signature on an owner class (e.g. `hash`).
    Method,
    /// A field signature on an owner class (e.g. `val`).
    Field,
}

/// A single completion request, as handed over by an editor front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub kind: CompletionKind,
    /// The owner class in internal form.  Only read for member kinds.
    pub owner: Option<String>,
    /// The token being completed.
    pub partial: String,
}

/// Structural result of tokenizing a partial descriptor.
///
/// `prefix` always contains at least one `L` (optionally preceded by `[`
/// array markers) and `fragment` is the non-empty class name typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorToken {
    pub prefix: String,
    pub fragment: String,
}

/// A member as it appears in a parsed class file: a name and a raw JVM
/// descriptor (`(I)V` for methods, `Ljava/lang/String;` for fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BytecodeMember {
    pub name: String,
    pub descriptor: String,
}

/// A class parsed from bytecode that lives in the editable workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BytecodeClass {
    /// Internal name (e.g. `com/example/App`).
    pub name: String,
    #[serde(default)]
    pub methods: Vec<BytecodeMember>,
    #[serde(default)]
    pub fields: Vec<BytecodeMember>,
}

/// A declared method seen through a reflective handle.
///
/// Parameter and return types are source-form type names (`int`,
/// `java.lang.String[]`) or `Class::getName` array names (`[I`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeMethod {
    pub name: String,
    #[serde(default, rename = "parameters")]
    pub parameter_types: Vec<String>,
    #[serde(default = "void_type", rename = "returns")]
    pub return_type: String,
}

/// A declared field seen through a reflective handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A class loadable from the runtime classpath.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeClass {
    /// Dotted binary name (e.g. `java.lang.String`).
    pub name: String,
    #[serde(default)]
    pub methods: Vec<RuntimeMethod>,
    #[serde(default)]
    pub fields: Vec<RuntimeField>,
}

fn void_type() -> String {
    "void".to_string()
}
