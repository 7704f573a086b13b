#![allow(dead_code)]

use std::sync::Arc;

use bytecode_complete::{
    BytecodeClass, BytecodeMember, Completer, MemoryWorkspace, RuntimeClass, RuntimeField,
    RuntimeMethod, StaticClassPath, WorkspaceSlot,
};

/// Build a runtime classpath from bare loadable names.
pub fn class_path(names: &[&str]) -> StaticClassPath {
    let mut cp = StaticClassPath::new();
    for name in names {
        cp.add_name(name);
    }
    cp
}

/// Build a workspace holding empty classes with the given internal names.
pub fn workspace(names: &[&str]) -> MemoryWorkspace {
    MemoryWorkspace::from_classes(names.iter().map(|name| bytecode_class(name, &[], &[])))
}

/// A workspace class with `(name, descriptor)` methods and fields.
pub fn bytecode_class(name: &str, methods: &[(&str, &str)], fields: &[(&str, &str)]) -> BytecodeClass {
    let member = |&(name, descriptor): &(&str, &str)| BytecodeMember {
        name: name.to_string(),
        descriptor: descriptor.to_string(),
    };
    BytecodeClass {
        name: name.to_string(),
        methods: methods.iter().map(member).collect(),
        fields: fields.iter().map(member).collect(),
    }
}

/// A runtime class with `(name, parameter types, return type)` methods and
/// `(name, type)` fields, all in reflective (source-form) spelling.
pub fn runtime_class(
    name: &str,
    methods: &[(&str, &[&str], &str)],
    fields: &[(&str, &str)],
) -> RuntimeClass {
    RuntimeClass {
        name: name.to_string(),
        methods: methods
            .iter()
            .map(|&(name, params, ret)| RuntimeMethod {
                name: name.to_string(),
                parameter_types: params.iter().map(|p| p.to_string()).collect(),
                return_type: ret.to_string(),
            })
            .collect(),
        fields: fields
            .iter()
            .map(|&(name, ty)| RuntimeField {
                name: name.to_string(),
                field_type: ty.to_string(),
            })
            .collect(),
    }
}

/// A completer over `class_path` with `workspace` active (if given).
///
/// The slot is returned too so tests can swap or clear the workspace.
pub fn create_completer(
    class_path: StaticClassPath,
    workspace: Option<MemoryWorkspace>,
) -> (Completer, Arc<WorkspaceSlot>) {
    let slot = Arc::new(match workspace {
        Some(ws) => WorkspaceSlot::with_workspace(Arc::new(ws)),
        None => WorkspaceSlot::new(),
    });
    let completer = Completer::new(Arc::new(class_path), slot.clone());
    (completer, slot)
}
