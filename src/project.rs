//! Project materialization for both the local and the remote front-end.

use std::path::Path;

use crate::config::StructureDescription;
use crate::constants::REMOTE_SOURCE_DIR;
use crate::error::Result;
use crate::ext::PathExt;
use crate::ioutils::ensure_absent;
use crate::remote::{EntryKind, RemoteEntry};
use crate::renderer::{project_context, TemplateRenderer};
use crate::template::{OperationExecutor, StructureProcessor, TemplateOperation};

/// Creates new project trees. Never touches a target that already exists.
pub struct ProjectCreator<'a> {
    engine: &'a dyn TemplateRenderer,
    executor: &'a OperationExecutor<'a>,
}

impl<'a> ProjectCreator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, executor: &'a OperationExecutor<'a>) -> Self {
        Self { engine, executor }
    }

    /// Materializes `structure` under `target`, binding `{project_name}`.
    ///
    /// # Returns
    /// * `Err(Error::AlreadyExists)` - `target` exists; nothing was written
    /// * `Err(Error::ProcessError)` - a path rendered empty or outside `target`;
    ///   nothing was written
    pub fn create_project(
        &self,
        target: &Path,
        project_name: &str,
        structure: &StructureDescription,
    ) -> Result<()> {
        ensure_absent(target, project_name)?;

        let context = project_context(project_name);
        let processor = StructureProcessor::new(self.engine, target, &context);
        let mut operations =
            vec![TemplateOperation::CreateDirectory { target: target.to_path_buf() }];
        operations.extend(processor.process(structure)?);

        self.executor.execute_all(&operations)
    }

    /// Mirrors one level of a remote listing into `<target>/src`.
    ///
    /// Subdirectories are created empty; their contents are not fetched.
    pub fn create_from_listing(
        &self,
        target: &Path,
        project_name: &str,
        entries: &[RemoteEntry],
    ) -> Result<()> {
        ensure_absent(target, project_name)?;

        let operations = plan_listing(target, entries);
        self.executor.execute_all(&operations)
    }
}

/// Plans the operations for a shallow remote listing.
pub fn plan_listing(target: &Path, entries: &[RemoteEntry]) -> Vec<TemplateOperation> {
    let source_dir = target.join(REMOTE_SOURCE_DIR);
    let mut operations = vec![
        TemplateOperation::CreateDirectory { target: target.to_path_buf() },
        TemplateOperation::CreateDirectory { target: source_dir.clone() },
    ];

    for entry in entries {
        if !Path::new(&entry.name).is_plain_name() {
            log::warn!("Skipping remote entry with unusable name '{}'", entry.name);
            continue;
        }
        match (entry.kind, &entry.download_url) {
            (EntryKind::Dir, _) => operations.push(TemplateOperation::CreateDirectory {
                target: source_dir.join(&entry.name),
            }),
            (EntryKind::File, Some(url)) => operations.push(TemplateOperation::Download {
                url: url.clone(),
                target: source_dir.join(&entry.name),
            }),
            (EntryKind::File, None) => {
                log::warn!("Skipping remote file '{}' without a download address", entry.name)
            }
            (EntryKind::Other, _) => {
                log::debug!("Skipping remote entry '{}' of unsupported type", entry.name)
            }
        }
    }

    operations
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::FileEntry;
    use crate::error::Error;
    use crate::renderer::PlaceholderRenderer;

    fn blog_structure() -> StructureDescription {
        StructureDescription {
            directories: vec!["src/{project_name}".to_string()],
            files: vec![FileEntry {
                path: "src/{project_name}/main.py".to_string(),
                content: "# app {project_name}".to_string(),
            }],
        }
    }

    #[test]
    fn creates_structure_under_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("blog");
        let engine = PlaceholderRenderer::new();
        let executor = OperationExecutor::new(false);

        ProjectCreator::new(&engine, &executor)
            .create_project(&target, "blog", &blog_structure())
            .unwrap();

        assert!(target.join("src/blog").is_dir());
        assert_eq!(fs::read_to_string(target.join("src/blog/main.py")).unwrap(), "# app blog");
    }

    #[test]
    fn second_creation_reports_already_exists_and_keeps_first_result() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("blog");
        let engine = PlaceholderRenderer::new();
        let executor = OperationExecutor::new(false);
        let creator = ProjectCreator::new(&engine, &executor);

        creator.create_project(&target, "blog", &blog_structure()).unwrap();
        fs::write(target.join("src/blog/main.py"), "edited").unwrap();

        let result = creator.create_project(&target, "blog", &blog_structure());
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
        assert_eq!(fs::read_to_string(target.join("src/blog/main.py")).unwrap(), "edited");
    }

    #[test]
    fn invalid_structure_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("blog");
        let engine = PlaceholderRenderer::new();
        let executor = OperationExecutor::new(false);
        let mut structure = blog_structure();
        structure.directories.push("../escape".to_string());

        let result =
            ProjectCreator::new(&engine, &executor).create_project(&target, "blog", &structure);
        assert!(matches!(result, Err(Error::ProcessError { .. })));
        assert!(!target.exists());
    }

    #[test]
    fn plan_listing_is_shallow() {
        let entries = vec![
            RemoteEntry::dir("app"),
            RemoteEntry::file("main.py", "https://raw.example.com/main.py"),
            RemoteEntry { name: "README.md".into(), kind: EntryKind::File, download_url: None },
            RemoteEntry { name: "link".into(), kind: EntryKind::Other, download_url: None },
            RemoteEntry::dir(".."),
        ];
        let operations = plan_listing(Path::new("shop"), &entries);

        assert_eq!(
            operations,
            vec![
                TemplateOperation::CreateDirectory { target: "shop".into() },
                TemplateOperation::CreateDirectory { target: "shop/src".into() },
                TemplateOperation::CreateDirectory { target: "shop/src/app".into() },
                TemplateOperation::Download {
                    url: "https://raw.example.com/main.py".into(),
                    target: "shop/src/main.py".into(),
                },
            ]
        );
    }
}
