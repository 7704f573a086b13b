/// Owner class resolution for method and field completion.
///
/// A member completion needs the signatures of the owner class.  The owner
/// is looked up in two places, in priority order:
///
///   1. the active workspace, as parsed bytecode;
///   2. the runtime classpath, as a reflective handle.
///
/// The workspace wins even when the runtime has a class of the same name,
/// so completion follows the bytecode being edited rather than whatever
/// happens to be loaded.  Both sources render signatures through
/// [`MemberSignatureSource`] into the same textual shape:
///
///   - methods: `<name><descriptor>`  (e.g. `hashCode()I`)
///   - fields:  `<name> <descriptor>` (e.g. `value [C`)
use crate::descriptor::{internal_to_dotted, method_descriptor, type_descriptor};
use crate::source::{RuntimeClassSource, Workspace};
use crate::types::{BytecodeClass, MemberKind, RuntimeClass};

/// Something that can list its declared members as signature strings.
pub trait MemberSignatureSource {
    fn signatures(&self, kind: MemberKind) -> Vec<String>;
}

impl MemberSignatureSource for BytecodeClass {
    fn signatures(&self, kind: MemberKind) -> Vec<String> {
        match kind {
            MemberKind::Method => self
                .methods
                .iter()
                .map(|m| format!("{}{}", m.name, m.descriptor))
                .collect(),
            MemberKind::Field => self
                .fields
                .iter()
                .map(|f| format!("{} {}", f.name, f.descriptor))
                .collect(),
        }
    }
}

impl MemberSignatureSource for RuntimeClass {
    fn signatures(&self, kind: MemberKind) -> Vec<String> {
        match kind {
            MemberKind::Method => self
                .methods
                .iter()
                .map(|m| {
                    let desc = method_descriptor(m.parameter_types.as_slice(), &m.return_type);
                    format!("{}{}", m.name, desc)
                })
                .collect(),
            MemberKind::Field => self
                .fields
                .iter()
                .map(|f| format!("{} {}", f.name, type_descriptor(&f.field_type)))
                .collect(),
        }
    }
}

/// Resolves an owner name to the signatures of its members.
pub struct OwnerResolver<'a> {
    runtime: &'a dyn RuntimeClassSource,
    workspace: Option<&'a dyn Workspace>,
}

impl<'a> OwnerResolver<'a> {
    pub fn new(runtime: &'a dyn RuntimeClassSource, workspace: Option<&'a dyn Workspace>) -> Self {
        Self { runtime, workspace }
    }

    /// Signatures of `kind` declared by `owner` (internal form), or `None`
    /// when neither the workspace nor the runtime knows the class.
    pub fn resolve(&self, owner: &str, kind: MemberKind) -> Option<Vec<String>> {
        let owner = owner.trim();
        if owner.is_empty() {
            return None;
        }

        // ── 1. Workspace bytecode ───────────────────────────────────
        if let Some(class) = self
            .workspace
            .and_then(|ws| ws.class_by_internal_name(owner))
        {
            tracing::trace!(owner, ?kind, "owner resolved from workspace");
            return Some(class.signatures(kind));
        }

        // ── 2. Runtime classpath ────────────────────────────────────
        if let Some(class) = self.runtime.load_class(&internal_to_dotted(owner)) {
            tracing::trace!(owner, ?kind, "owner resolved from runtime");
            return Some(class.signatures(kind));
        }

        tracing::trace!(owner, "owner not resolvable");
        None
    }
}
