/// Merged class name index.
///
/// Class name and descriptor completion both filter one sorted list: every
/// class the runtime can load plus every class resident in the active
/// workspace.  Building it means pulling and sorting the whole classpath, so
/// the result is cached and only rebuilt when the active workspace changes.
///
/// # Invalidation
///
/// The cache is keyed by the identity of the workspace it was built for
/// (`None` when no workspace was active).  A read that sees a different
/// identity rebuilds under the write lock.  Readers get an `Arc` snapshot,
/// so a concurrent rebuild swaps the whole list at once and is never seen
/// half-done.
use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::source::{RuntimeClassSource, Workspace, WorkspaceId};

struct CachedNames {
    workspace: Option<WorkspaceId>,
    names: Arc<[String]>,
}

#[derive(Default)]
pub struct ClassNameIndex {
    cache: RwLock<Option<CachedNames>>,
}

impl ClassNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sorted class names for the given active workspace,
    /// rebuilding the cache if it was built for a different one.
    pub fn names(
        &self,
        runtime: &dyn RuntimeClassSource,
        workspace: Option<&dyn Workspace>,
    ) -> Arc<[String]> {
        let key = workspace.map(|ws| ws.id());

        if let Some(cached) = self.cache.read().as_ref()
            && cached.workspace == key
        {
            return Arc::clone(&cached.names);
        }

        let mut guard = self.cache.write();
        // Another reader may have rebuilt while we waited for the lock.
        if let Some(cached) = guard.as_ref()
            && cached.workspace == key
        {
            return Arc::clone(&cached.names);
        }

        let names = build_names(runtime, workspace);
        tracing::debug!(
            workspace = ?key,
            count = names.len(),
            "rebuilt class name index"
        );
        *guard = Some(CachedNames {
            workspace: key,
            names: Arc::clone(&names),
        });
        names
    }

    /// Drop the cached list so the next read rebuilds it.
    ///
    /// Needed when a workspace's contents change while its identity stays
    /// the same.
    pub fn invalidate(&self) {
        if self.cache.write().take().is_some() {
            tracing::debug!("class name index invalidated");
        }
    }

    /// Whether a cached list exists for the given workspace identity.
    pub fn is_cached_for(&self, workspace: Option<WorkspaceId>) -> bool {
        self.cache
            .read()
            .as_ref()
            .is_some_and(|cached| cached.workspace == workspace)
    }
}

fn build_names(
    runtime: &dyn RuntimeClassSource,
    workspace: Option<&dyn Workspace>,
) -> Arc<[String]> {
    let runtime_names = runtime.all_loadable_class_names();

    let mut merged: Vec<String> = match workspace {
        Some(ws) => {
            let resident = ws.resident_class_names();
            let mut seen: HashSet<String> =
                HashSet::with_capacity(resident.len() + runtime_names.len());
            resident
                .into_iter()
                .chain(runtime_names)
                .filter(|name| seen.insert(name.clone()))
                .collect()
        }
        None => runtime_names,
    };

    merged.sort_unstable();
    // A no-op after the set above; the runtime-only list is not guaranteed
    // to be free of duplicates.
    merged.dedup();
    merged.into()
}
