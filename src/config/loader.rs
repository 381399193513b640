//! Configuration loading and management

use crate::config::types::FrameworkConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Either one framework, or one entry per framework name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    Single(FrameworkConfig),
    PerFramework(IndexMap<String, FrameworkConfig>),
}

/// A loaded configuration document.
#[derive(Debug)]
pub struct ProjectConfig {
    document: ConfigDocument,
}

impl ProjectConfig {
    /// Reads and parses the document at `path`.
    ///
    /// Relative database module paths are anchored at the directory holding the document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            log::debug!("Cannot read '{}': {e}", path.display());
            Error::ConfigNotFound { path: path.display().to_string() }
        })?;

        let mut config = Self::parse(&content, ConfigFormat::from_path(path))
            .map_err(|reason| Error::ConfigMalformed {
                path: path.display().to_string(),
                reason,
            })?;

        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        config.anchor_sources(&base);
        log::debug!("Loaded configuration from '{}'", path.display());
        Ok(config)
    }

    /// Parses a document held in memory. Paths are kept as written.
    pub fn parse(content: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        let document: ConfigDocument = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };
        Ok(Self { document })
    }

    /// Framework names available in the document, in document order.
    pub fn frameworks(&self) -> Vec<String> {
        match &self.document {
            ConfigDocument::Single(_) => Vec::new(),
            ConfigDocument::PerFramework(map) => map.keys().cloned().collect(),
        }
    }

    /// Everything registered for `framework`.
    ///
    /// A single-framework document answers for every name; an unknown name in a
    /// per-framework document yields an empty configuration.
    pub fn framework(&self, framework: &str) -> FrameworkConfig {
        match &self.document {
            ConfigDocument::Single(config) => config.clone(),
            ConfigDocument::PerFramework(map) => match map.get(framework) {
                Some(config) => config.clone(),
                None => {
                    log::warn!(
                        "No project structure configured for '{framework}' (configured: {})",
                        self.frameworks().join(", ")
                    );
                    FrameworkConfig::default()
                }
            },
        }
    }

    fn anchor_sources(&mut self, base: &Path) {
        match &mut self.document {
            ConfigDocument::Single(config) => config.modules.anchor_sources(base),
            ConfigDocument::PerFramework(map) => {
                for config in map.values_mut() {
                    config.modules.anchor_sources(base);
                }
            }
        }
    }
}
