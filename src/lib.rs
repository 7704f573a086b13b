//! Symbol completion for JVM bytecode editors.
//!
//! Given a partially typed class name, type descriptor, or member signature,
//! [`Completer`] returns the sorted list of completions drawn from two
//! sources: the classes loaded into the active editing workspace (parsed
//! bytecode) and the classes loadable from the runtime classpath.
//!
//! ```text
//! complete_internal_name / complete_descriptor
//!     → ClassNameIndex (cached, merged, sorted) → MatchMode
//! complete_method / complete_field
//!     → OwnerResolver (workspace first, runtime second) → MatchMode
//! ```
use std::sync::Arc;

pub mod completion;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod index;
pub mod snapshot;
pub mod source;
pub mod types;

pub use error::{LoadError, Result};
pub use index::ClassNameIndex;
pub use source::{
    MemoryWorkspace, OwnerContext, RuntimeClassSource, StaticClassPath, Workspace, WorkspaceHost,
    WorkspaceId, WorkspaceSlot,
};
pub use types::*;

/// The completion facade an editor front end talks to.
///
/// Cheap to share between threads: the only mutable state is the class
/// name cache, which guards itself.
pub struct Completer {
    runtime: Arc<dyn RuntimeClassSource>,
    workspaces: Arc<dyn WorkspaceHost>,
    index: ClassNameIndex,
}

impl Completer {
    pub fn new(runtime: Arc<dyn RuntimeClassSource>, workspaces: Arc<dyn WorkspaceHost>) -> Self {
        Self::with_index(runtime, workspaces, ClassNameIndex::new())
    }

    /// Build a completer around an existing (possibly pre-warmed) index.
    pub fn with_index(
        runtime: Arc<dyn RuntimeClassSource>,
        workspaces: Arc<dyn WorkspaceHost>,
        index: ClassNameIndex,
    ) -> Self {
        Self {
            runtime,
            workspaces,
            index,
        }
    }

    pub fn index(&self) -> &ClassNameIndex {
        &self.index
    }

    /// Forget the cached class names.  Call this when the active
    /// workspace gained or lost classes without being swapped out.
    pub fn invalidate_class_names(&self) {
        self.index.invalidate();
    }
}
