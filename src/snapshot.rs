/// Symbol snapshots.
///
/// A snapshot is a TOML document describing both symbol sources, so the
/// engine can run outside an editor (the command-line front end, fixtures in
/// tests).  The runtime section lists loadable classes the way reflection
/// reports them; the optional workspace section lists parsed classes with
/// raw descriptors.  Leaving out `[workspace]` means no workspace is active.
///
/// ```toml
/// [runtime]
/// names = ["java/util/List", "java/util/Map"]
///
/// [[runtime.classes]]
/// name = "java.lang.Object"
/// methods = [{ name = "hashCode", returns = "int" }]
///
/// [[workspace.classes]]
/// name = "com/example/App"
/// methods = [{ name = "main", descriptor = "([Ljava/lang/String;)V" }]
/// fields = [{ name = "count", descriptor = "I" }]
/// ```
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{LoadError, Result};
use crate::source::{MemoryWorkspace, StaticClassPath, WorkspaceSlot};
use crate::types::{BytecodeClass, RuntimeClass};
use crate::Completer;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub runtime: RuntimeSection,
    pub workspace: Option<WorkspaceSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeSection {
    /// Loadable names with no member information.
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub classes: Vec<RuntimeClass>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSection {
    #[serde(default)]
    pub classes: Vec<BytecodeClass>,
}

impl Snapshot {
    /// Read and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse and validate snapshot text.  `origin` only labels errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let snapshot: Snapshot = toml::from_str(text).map_err(|source| LoadError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<()> {
        if self.runtime.names.iter().any(|n| n.trim().is_empty())
            || self.runtime.classes.iter().any(|c| c.name.trim().is_empty())
        {
            return Err(LoadError::InvalidClass {
                section: "runtime",
                reason: "class name is blank".to_string(),
            });
        }

        if let Some(ws) = &self.workspace {
            for class in &ws.classes {
                if class.name.trim().is_empty() {
                    return Err(LoadError::InvalidClass {
                        section: "workspace",
                        reason: "class name is blank".to_string(),
                    });
                }
                if class.name.contains('.') {
                    return Err(LoadError::InvalidClass {
                        section: "workspace",
                        reason: format!("`{}` is not an internal name", class.name),
                    });
                }
            }
        }
        Ok(())
    }

    /// Split the snapshot into its two in-memory symbol sources.
    pub fn into_sources(self) -> (StaticClassPath, Option<MemoryWorkspace>) {
        let mut class_path = StaticClassPath::new();
        for name in &self.runtime.names {
            class_path.add_name(name.trim());
        }
        for class in self.runtime.classes {
            class_path.add_class(class);
        }

        let workspace = self
            .workspace
            .map(|ws| MemoryWorkspace::from_classes(ws.classes));

        tracing::debug!(
            workspace_classes = workspace.as_ref().map_or(0, |ws| ws.len()),
            "snapshot loaded"
        );
        (class_path, workspace)
    }

    /// Build a ready-to-use completer, with the snapshot's workspace (if
    /// any) active.
    pub fn into_completer(self) -> Completer {
        let (class_path, workspace) = self.into_sources();
        let slot = match workspace {
            Some(ws) => WorkspaceSlot::with_workspace(Arc::new(ws)),
            None => WorkspaceSlot::new(),
        };
        Completer::new(Arc::new(class_path), Arc::new(slot))
    }
}
