use std::path::{Path, PathBuf};

use crate::constants::layout;
use crate::error::{Error, Result};

/// Root directory of a new project: `<base>/<project_name>`.
pub fn project_target<P: AsRef<Path>>(base: P, project_name: &str) -> PathBuf {
    base.as_ref().join(project_name)
}

/// Refuses a project target that is already on disk.
///
/// This is checked once, before anything is written.
pub fn ensure_absent<P: AsRef<Path>>(target: P, project_name: &str) -> Result<()> {
    let target = target.as_ref();
    if target.exists() {
        log::debug!("Target '{}' already exists", target.display());
        return Err(Error::AlreadyExists { project_name: project_name.to_string() });
    }
    Ok(())
}

/// Directory that receives injected modules: `<root>/src/<project_name>/v1`.
pub fn module_root<P: AsRef<Path>>(project_root: P, project_name: &str) -> PathBuf {
    project_root
        .as_ref()
        .join(layout::SOURCE_DIR)
        .join(project_name)
        .join(layout::API_VERSION_DIR)
}

/// Fixed destination of database driver modules.
pub fn database_module_root<P: AsRef<Path>>(project_root: P, project_name: &str) -> PathBuf {
    layout::DATABASE_DIR
        .iter()
        .fold(module_root(project_root, project_name), |path, segment| path.join(segment))
}
