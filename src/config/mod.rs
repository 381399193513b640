//! Configuration management for Codecraft projects
//!
//! This module contains the configuration system components:
//! - `types`: Project skeleton and module catalog types
//! - `loader`: Configuration file loading and parsing

pub mod loader;
pub mod types;


pub use loader::{ConfigFormat, ProjectConfig};
pub use types::{FileEntry, FrameworkConfig, ModuleCatalog, ModuleEntry, StructureDescription};
