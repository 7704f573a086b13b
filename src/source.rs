/// Symbol sources consumed by the completion engine.
///
/// Two sources feed completion:
///   - the **runtime** classpath, seen through reflective class handles
///     ([`RuntimeClassSource`]), and
///   - the **workspace**, the set of classes currently loaded into the
///     editing session as parsed bytecode ([`Workspace`]), reached through
///     whatever holds the active one ([`WorkspaceHost`]).
///
/// The in-memory implementations in this module back the command-line
/// front end and the tests; an embedding editor supplies its own.
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::descriptor::{dotted_to_internal, internal_to_dotted};
use crate::types::{BytecodeClass, RuntimeClass};

/// Identity of a workspace instance.  Two distinct instances never share an
/// id, even when their contents are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkspaceId(u64);

impl WorkspaceId {
    /// Allocate a fresh, process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        WorkspaceId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Classes available on the running system's classpath.
pub trait RuntimeClassSource: Send + Sync {
    /// Every loadable class name, in internal (slash) form.  Order is not
    /// guaranteed.
    fn all_loadable_class_names(&self) -> Vec<String>;

    /// Load a class by its dotted binary name, if it exists.
    fn load_class(&self, dotted_name: &str) -> Option<Arc<RuntimeClass>>;
}

/// An editable set of classes parsed from bytecode.
pub trait Workspace: Send + Sync {
    fn id(&self) -> WorkspaceId;

    /// Internal names of every class resident in the workspace.
    fn resident_class_names(&self) -> Vec<String>;

    fn class_by_internal_name(&self, name: &str) -> Option<Arc<BytecodeClass>>;
}

/// Whatever owns the "current workspace" of the session.
pub trait WorkspaceHost: Send + Sync {
    fn current_workspace(&self) -> Option<Arc<dyn Workspace>>;
}

/// Read access to the in-progress parse of the instruction being completed.
///
/// Member completion only needs one value out of it: the owner class the
/// parser already resolved for the instruction, if it got that far.
pub trait OwnerContext {
    fn owner_value(&self) -> Option<String>;
}

impl<T: AsRef<str>> OwnerContext for Option<T> {
    fn owner_value(&self) -> Option<String> {
        self.as_ref().map(|owner| owner.as_ref().to_string())
    }
}

// ─── In-memory runtime classpath ────────────────────────────────────────────

/// A fixed runtime classpath.
///
/// Classes registered with members can be loaded; bare names are only
/// offered for class name completion (the same as a classpath entry whose
/// reflective handle could not be obtained).
#[derive(Debug, Default)]
pub struct StaticClassPath {
    /// Dotted name → class handle.
    classes: HashMap<String, Arc<RuntimeClass>>,
    /// Internal names of every loadable class, including `classes`.
    names: Vec<String>,
}

impl StaticClassPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loadable class together with its members.
    pub fn add_class(&mut self, class: RuntimeClass) {
        let dotted = internal_to_dotted(&class.name);
        self.names.push(dotted_to_internal(&dotted));
        self.classes.insert(dotted, Arc::new(class));
    }

    /// Register a loadable name without a reflective handle.
    pub fn add_name(&mut self, name: &str) {
        self.names.push(dotted_to_internal(name));
    }
}

impl RuntimeClassSource for StaticClassPath {
    fn all_loadable_class_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn load_class(&self, dotted_name: &str) -> Option<Arc<RuntimeClass>> {
        self.classes.get(dotted_name).cloned()
    }
}

// ─── In-memory workspace ────────────────────────────────────────────────────

/// A workspace holding already-parsed classes, keyed by internal name.
///
/// Contents are only mutable before the workspace is shared; once it is
/// active behind an `Arc`, its identity stands for its contents.
#[derive(Debug)]
pub struct MemoryWorkspace {
    id: WorkspaceId,
    classes: HashMap<String, Arc<BytecodeClass>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self {
            id: WorkspaceId::next(),
            classes: HashMap::new(),
        }
    }

    pub fn from_classes(classes: impl IntoIterator<Item = BytecodeClass>) -> Self {
        let mut ws = Self::new();
        for class in classes {
            ws.put_class(class);
        }
        ws
    }

    /// Insert or replace a class.  The class name is taken as given.
    pub fn put_class(&mut self, class: BytecodeClass) {
        self.classes.insert(class.name.clone(), Arc::new(class));
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for MemoryWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for MemoryWorkspace {
    fn id(&self) -> WorkspaceId {
        self.id
    }

    fn resident_class_names(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    fn class_by_internal_name(&self, name: &str) -> Option<Arc<BytecodeClass>> {
        self.classes.get(name).cloned()
    }
}

// ─── Active workspace slot ──────────────────────────────────────────────────

/// Holds the active workspace and lets another thread swap it out.
#[derive(Default)]
pub struct WorkspaceSlot {
    current: RwLock<Option<Arc<dyn Workspace>>>,
}

impl WorkspaceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace(workspace: Arc<dyn Workspace>) -> Self {
        Self {
            current: RwLock::new(Some(workspace)),
        }
    }

    /// Make `workspace` the active one, returning the previous workspace.
    pub fn set(&self, workspace: Arc<dyn Workspace>) -> Option<Arc<dyn Workspace>> {
        tracing::debug!(workspace = ?workspace.id(), "activating workspace");
        self.current.write().replace(workspace)
    }

    /// Close the active workspace, if any.
    pub fn clear(&self) -> Option<Arc<dyn Workspace>> {
        self.current.write().take()
    }
}

impl WorkspaceHost for WorkspaceSlot {
    fn current_workspace(&self) -> Option<Arc<dyn Workspace>> {
        self.current.read().clone()
    }
}
