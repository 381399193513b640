use std::path::Path;

use crate::error::{Error, Result};
use crate::remote::TemplateFetcher;

use super::operation::TemplateOperation;

/// Applies planned operations to the filesystem.
pub struct OperationExecutor<'a> {
    dry_run: bool,
    fetcher: Option<&'a dyn TemplateFetcher>,
}

impl<'a> OperationExecutor<'a> {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run, fetcher: None }
    }

    /// Enables `Download` operations through `fetcher`.
    pub fn with_fetcher(mut self, fetcher: &'a dyn TemplateFetcher) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Applies operations in order, stopping at the first failure.
    ///
    /// Nothing is rolled back: a failure leaves earlier operations in place.
    pub fn execute_all(&self, operations: &[TemplateOperation]) -> Result<()> {
        operations.iter().try_for_each(|operation| self.execute(operation))
    }

    /// Applies a single operation.
    ///
    /// A failed download is reported and skipped; every other failure is returned.
    pub fn execute(&self, operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling file operation: {operation:?}");
        let applied = self.apply(operation).inspect_err(|e| {
            log::error!("Failed to {}: {e}", operation.error_context());
        })?;
        if applied {
            log::info!("{}", operation.get_message(self.dry_run));
        }
        Ok(())
    }

    /// Returns `false` when the operation was skipped.
    fn apply(&self, operation: &TemplateOperation) -> Result<bool> {
        match operation {
            TemplateOperation::CreateDirectory { target } => self.create_dir_all(target)?,
            TemplateOperation::Write { target, content } => {
                self.write_file(content.as_bytes(), target)?
            }
            TemplateOperation::Copy { source, target } => self.copy_file(source, target)?,
            TemplateOperation::Download { url, target } => {
                if self.dry_run {
                    return Ok(true);
                }
                let fetcher = self.fetcher.ok_or_else(|| {
                    Error::Other(anyhow::anyhow!("No template fetcher configured for '{url}'"))
                })?;
                match fetcher.download(url) {
                    Ok(bytes) => self.write_file(&bytes, target)?,
                    Err(e) => {
                        log::warn!("Skipping '{}': {e}", operation.target_path().display());
                        println!("Could not download '{url}', skipped.");
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }

    /// Copy a file from source to destination, creating parent directories if needed.
    fn copy_file(&self, source_path: &Path, dest_path: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        if let Some(parent) = dest_path.parent() {
            self.create_dir_all(parent)?;
        }

        Ok(std::fs::copy(source_path, dest_path).map(|_| ())?)
    }

    /// Write content to a file, creating parent directories if needed.
    fn write_file(&self, content: &[u8], dest_path: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        if let Some(parent) = dest_path.parent() {
            self.create_dir_all(parent)?;
        }

        std::fs::write(dest_path, content).map_err(Error::from)
    }

    /// Create directory and all parent directories if they don't exist.
    fn create_dir_all(&self, dest_path: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        std::fs::create_dir_all(dest_path).map_err(Error::from)
    }
}
