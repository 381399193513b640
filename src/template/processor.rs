use std::path::{Path, PathBuf};

use crate::config::StructureDescription;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;

/// Turns a structure description into an ordered list of operations.
pub struct StructureProcessor<'a, P: AsRef<Path>> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    output_root: P,
    context: &'a serde_json::Value,
}

impl<'a, P: AsRef<Path>> StructureProcessor<'a, P> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        output_root: P,
        context: &'a serde_json::Value,
    ) -> Self {
        Self { engine, output_root, context }
    }

    /// Renders a path template and resolves it below the output root.
    ///
    /// # Arguments
    /// * `template_entry` - The path template from the structure description
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The target path, or `ProcessError` when the rendered
    ///   path is empty or would leave the output root
    ///
    fn render_target(&self, template_entry: &str) -> Result<PathBuf> {
        let rendered = self.engine.render_path(Path::new(template_entry), self.context)?;
        let rendered_path = Path::new(&rendered);

        if rendered.trim().is_empty() {
            return Err(Error::ProcessError {
                source_path: template_entry.to_string(),
                e: "The rendered path is empty".to_string(),
            });
        }
        if !rendered_path.is_contained() {
            return Err(Error::ProcessError {
                source_path: rendered,
                e: "The rendered path escapes the project root".to_string(),
            });
        }

        Ok(self.output_root.as_ref().join(rendered_path))
    }

    /// Plans every directory first, then every file, each group in document order.
    ///
    /// # Arguments
    /// * `structure` - The structure description to plan
    ///
    /// # Returns
    /// * `Result<Vec<TemplateOperation>>` - The operations to perform
    ///
    pub fn process(&self, structure: &StructureDescription) -> Result<Vec<TemplateOperation>> {
        let mut operations =
            Vec::with_capacity(structure.directories.len() + structure.files.len());

        for directory in &structure.directories {
            operations.push(TemplateOperation::CreateDirectory {
                target: self.render_target(directory)?,
            });
        }

        for file in &structure.files {
            operations.push(TemplateOperation::Write {
                target: self.render_target(&file.path)?,
                content: self.engine.render(&file.content, self.context),
            });
        }

        Ok(operations)
    }
}
