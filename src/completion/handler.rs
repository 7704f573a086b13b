/// Completion entry points.
///
/// Every entry point returns a plain list: anything that prevents a
/// suggestion (blank input, a descriptor that is already closed, an owner
/// nobody knows) simply produces no items.
///
/// Class name and descriptor completion read the cached [`ClassNameIndex`]
/// (see `index.rs`); method and field completion resolve the owner fresh on
/// every request.
///
/// [`ClassNameIndex`]: crate::index::ClassNameIndex
use std::sync::Arc;

use crate::Completer;
use crate::source::OwnerContext;
use crate::types::{CompletionKind, CompletionRequest, MemberKind};

use super::matcher::MatchMode;
use super::owner::OwnerResolver;
use super::tokenizer::tokenize;

impl Completer {
    /// Completes internal names.
    ///
    /// Returns every known class name that starts with `partial` (trimmed),
    /// except `partial` itself, in alphabetical order.
    pub fn complete_internal_name(&self, partial: &str) -> Vec<String> {
        let key = partial.trim();
        if key.is_empty() {
            return Vec::new();
        }
        MatchMode::InternalName(key).apply(self.class_names().iter())
    }

    /// Completes reference type descriptors such as `Ljava/lang/Str` or
    /// `[[Ljava/util/`.
    ///
    /// Each suggestion carries the typed prefix markers and a closing `;`
    /// (e.g. `[[Ljava/util/List;`).
    pub fn complete_descriptor(&self, partial: &str) -> Vec<String> {
        let Some(token) = tokenize(partial) else {
            return Vec::new();
        };
        MatchMode::Descriptor(&token).apply(self.class_names().iter())
    }

    /// Completes method signatures (`name` + descriptor) declared by `owner`.
    pub fn complete_method(&self, owner: &str, partial: &str) -> Vec<String> {
        self.complete_members(owner, partial, MemberKind::Method)
    }

    /// Completes field signatures (`name` + space + descriptor) declared by
    /// `owner`.
    pub fn complete_field(&self, owner: &str, partial: &str) -> Vec<String> {
        self.complete_members(owner, partial, MemberKind::Field)
    }

    /// Like [`Completer::complete_method`], with the owner read from the
    /// parse of the instruction being edited.
    pub fn complete_method_in(&self, ctx: &dyn OwnerContext, partial: &str) -> Vec<String> {
        match ctx.owner_value() {
            Some(owner) => self.complete_method(&owner, partial),
            None => Vec::new(),
        }
    }

    /// Like [`Completer::complete_field`], with the owner read from the
    /// parse of the instruction being edited.
    pub fn complete_field_in(&self, ctx: &dyn OwnerContext, partial: &str) -> Vec<String> {
        match ctx.owner_value() {
            Some(owner) => self.complete_field(&owner, partial),
            None => Vec::new(),
        }
    }

    /// Dispatch a request to the entry point for its kind.
    pub fn complete(&self, request: &CompletionRequest) -> Vec<String> {
        let owner = request.owner.as_deref().unwrap_or_default();
        match request.kind {
            CompletionKind::InternalName => self.complete_internal_name(&request.partial),
            CompletionKind::Descriptor => self.complete_descriptor(&request.partial),
            CompletionKind::Method => self.complete_method(owner, &request.partial),
            CompletionKind::Field => self.complete_field(owner, &request.partial),
        }
    }

    /// Sorted class names for the workspace active right now.
    fn class_names(&self) -> Arc<[String]> {
        let workspace = self.workspaces.current_workspace();
        self.index.names(&*self.runtime, workspace.as_deref())
    }

    fn complete_members(&self, owner: &str, partial: &str, kind: MemberKind) -> Vec<String> {
        if owner.trim().is_empty() || partial.trim().is_empty() {
            return Vec::new();
        }

        let workspace = self.workspaces.current_workspace();
        let resolver = OwnerResolver::new(&*self.runtime, workspace.as_deref());
        match resolver.resolve(owner, kind) {
            Some(signatures) => MatchMode::Member(partial.trim_start()).apply(signatures),
            None => Vec::new(),
        }
    }
}
