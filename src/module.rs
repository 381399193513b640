//! Injection of modules into an already generated project.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ModuleCatalog;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::{database_module_root, module_root};
use crate::template::{OperationExecutor, TemplateOperation};

/// A single module to add to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRequest {
    /// Copy the template subtree registered for a database/driver pair
    Database { db_type: String, driver: String },
    /// Create `<kind>/<name>` with the files the catalog lists for `kind`
    Module { kind: String, name: String },
}

impl ModuleRequest {
    /// Parses `<kind>:<name>`.
    pub fn parse_module(s: &str) -> Result<Self> {
        let (kind, name) = split_pair(s)?;
        Self::module(&kind, &name)
    }

    /// A `<kind>/<name>` module request. Both parts must be plain directory names.
    pub fn module(kind: &str, name: &str) -> Result<Self> {
        let (kind, name) = (kind.trim(), name.trim());
        if !Path::new(kind).is_plain_name() || !Path::new(name).is_plain_name() {
            return Err(Error::InvalidModuleRequest { request: format!("{kind}:{name}") });
        }
        Ok(ModuleRequest::Module { kind: kind.to_string(), name: name.to_string() })
    }

    /// Parses `<database type>:<driver>`.
    pub fn parse_database(s: &str) -> Result<Self> {
        let (db_type, driver) = split_pair(s)?;
        Ok(ModuleRequest::Database { db_type, driver })
    }
}

impl Display for ModuleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleRequest::Database { db_type, driver } => {
                write!(f, "database module {db_type}/{driver}")
            }
            ModuleRequest::Module { kind, name } => write!(f, "{kind} module '{name}'"),
        }
    }
}

fn split_pair(s: &str) -> Result<(String, String)> {
    match s.split_once(':') {
        Some((left, right)) if !left.trim().is_empty() && !right.trim().is_empty() => {
            Ok((left.trim().to_string(), right.trim().to_string()))
        }
        _ => Err(Error::InvalidModuleRequest { request: s.to_string() }),
    }
}

/// Extends a generated project with modules from a catalog.
pub struct ModuleInjector<'a> {
    project_root: PathBuf,
    project_name: String,
    catalog: &'a ModuleCatalog,
    executor: &'a OperationExecutor<'a>,
}

impl<'a> ModuleInjector<'a> {
    pub fn new<P: AsRef<Path>>(
        project_root: P,
        project_name: &str,
        catalog: &'a ModuleCatalog,
        executor: &'a OperationExecutor<'a>,
    ) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            project_name: project_name.to_string(),
            catalog,
            executor,
        }
    }

    /// Applies requests one at a time, in order.
    ///
    /// A missing database source or an invalid module request is reported and
    /// skipped; any other error stops the run. Returns the number of modules injected.
    pub fn inject_all<I>(&self, requests: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<ModuleRequest>>,
    {
        let mut injected = 0;
        for request in requests {
            let result = request.and_then(|request| {
                let path = self.inject(&request)?;
                Ok((request, path))
            });
            match result {
                Ok((request, path)) => {
                    println!("Created {request} in '{}'.", path.display());
                    injected += 1;
                }
                Err(
                    e @ (Error::DatabaseModulePathMissing { .. }
                    | Error::InvalidModuleRequest { .. }),
                ) => {
                    log::warn!("Skipping module: {e}");
                    println!("{e}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(injected)
    }

    /// Applies a single request, returning the directory it populated.
    pub fn inject(&self, request: &ModuleRequest) -> Result<PathBuf> {
        match request {
            ModuleRequest::Database { db_type, driver } => {
                self.inject_database_module(db_type, driver)
            }
            ModuleRequest::Module { kind, name } => self.inject_module(kind, name),
        }
    }

    /// Copies the template subtree for `db_type`/`driver` into
    /// `src/<project>/v1/frameworks/database`.
    ///
    /// Nested directories are flattened: every directory and every file of the
    /// subtree lands directly in the destination, so same-named files from
    /// different subdirectories overwrite each other (later in walk order wins).
    pub fn inject_database_module(&self, db_type: &str, driver: &str) -> Result<PathBuf> {
        let source = match self.catalog.database_source(db_type, driver) {
            Some(source) if source.exists() => source,
            Some(source) => {
                return Err(Error::DatabaseModulePathMissing {
                    path: source.display().to_string(),
                })
            }
            None => {
                return Err(Error::DatabaseModulePathMissing {
                    path: format!("<none registered for {db_type}/{driver}>"),
                })
            }
        };

        let destination = database_module_root(&self.project_root, &self.project_name);
        let mut operations =
            vec![TemplateOperation::CreateDirectory { target: destination.clone() }];

        for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let target = destination.join(entry.file_name());
            if entry.file_type().is_dir() {
                operations.push(TemplateOperation::CreateDirectory { target });
            } else if entry.file_type().is_file() {
                operations.push(TemplateOperation::Copy {
                    source: entry.path().to_path_buf(),
                    target,
                });
            } else {
                log::debug!("Skipping '{}': not a file or directory", entry.path().display());
            }
        }

        self.executor.execute_all(&operations)?;
        Ok(destination)
    }

    /// Creates `src/<project>/v1/<kind>/<name>` with one empty file per name the
    /// catalog lists for `kind`. Existing files are truncated.
    ///
    /// # Returns
    /// * `Err(Error::InvalidModuleRequest)` - `kind` or `name` is not a plain name
    /// * `Err(Error::ProcessError)` - a catalog file name is not a plain name; nothing was written
    pub fn inject_module(&self, kind: &str, name: &str) -> Result<PathBuf> {
        if !Path::new(kind).is_plain_name() || !Path::new(name).is_plain_name() {
            return Err(Error::InvalidModuleRequest { request: format!("{kind}:{name}") });
        }

        let directory =
            module_root(&self.project_root, &self.project_name).join(kind).join(name);
        let files = self.catalog.files_for(kind);
        if files.is_empty() {
            log::warn!("No files registered for module kind '{kind}'");
        }
        if let Some(file) = files.iter().find(|file| !Path::new(file).is_plain_name()) {
            return Err(Error::ProcessError {
                source_path: file.clone(),
                e: format!("Module files of kind '{kind}' must be plain file names"),
            });
        }

        let mut operations =
            vec![TemplateOperation::CreateDirectory { target: directory.clone() }];
        operations.extend(files.iter().map(|file| TemplateOperation::Write {
            target: directory.join(file),
            content: String::new(),
        }));

        self.executor.execute_all(&operations)?;
        Ok(directory)
    }
}
