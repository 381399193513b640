//! Types describing a project skeleton and its injectable modules

use crate::constants::module_kinds;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Declarative project skeleton. Paths and contents may contain placeholders.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StructureDescription {
    /// Directory path templates, relative to the project root
    #[serde(default)]
    pub directories: Vec<String>,
    /// File entries, relative to the project root
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// A single file of the skeleton.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FileEntry {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// What a module kind resolves to in the configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ModuleEntry {
    /// File names created empty inside a new module directory
    Files(Vec<String>),
    /// `database type -> driver type -> template subtree`
    Drivers(IndexMap<String, IndexMap<String, PathBuf>>),
}

/// Catalog of injectable modules.
///
/// Lookups never fail: unknown kinds, database types or drivers yield nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ModuleCatalog {
    entries: IndexMap<String, ModuleEntry>,
}

impl ModuleCatalog {
    /// File names for a module kind, empty when the kind is unknown.
    pub fn files_for(&self, kind: &str) -> &[String] {
        match self.entries.get(kind) {
            Some(ModuleEntry::Files(files)) => files,
            _ => &[],
        }
    }

    /// Template subtree registered for a database/driver pair.
    pub fn database_source(&self, db_type: &str, driver: &str) -> Option<&Path> {
        self.drivers()
            .and_then(|drivers| drivers.get(db_type))
            .and_then(|by_driver| by_driver.get(driver))
            .map(PathBuf::as_path)
    }

    /// Database types in document order.
    pub fn database_types(&self) -> Vec<String> {
        self.drivers().map(|d| d.keys().cloned().collect()).unwrap_or_default()
    }

    /// Drivers registered for a database type, in document order.
    pub fn drivers_for(&self, db_type: &str) -> Vec<String> {
        self.drivers()
            .and_then(|drivers| drivers.get(db_type))
            .map(|by_driver| by_driver.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Module kinds (other than `database`) that create files.
    pub fn kinds(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, ModuleEntry::Files(_)))
            .map(|(kind, _)| kind.clone())
            .collect()
    }

    /// Rewrites relative driver paths so they are anchored at `base`.
    pub fn anchor_sources(&mut self, base: &Path) {
        if let Some(ModuleEntry::Drivers(drivers)) =
            self.entries.get_mut(module_kinds::DATABASE)
        {
            for path in drivers.values_mut().flat_map(|d| d.values_mut()) {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    fn drivers(&self) -> Option<&IndexMap<String, IndexMap<String, PathBuf>>> {
        match self.entries.get(module_kinds::DATABASE) {
            Some(ModuleEntry::Drivers(drivers)) => Some(drivers),
            _ => None,
        }
    }
}

/// Everything the configuration document holds for one framework.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameworkConfig {
    pub project_structure: StructureDescription,
    #[serde(default)]
    pub modules: ModuleCatalog,
}
