use std::path::PathBuf;

/// A single filesystem side effect of materializing a project or module.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf },
    Write { target: PathBuf, content: String },
    Copy { source: PathBuf, target: PathBuf },
    Download { url: String, target: PathBuf },
}

impl TemplateOperation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target }
            | TemplateOperation::Write { target, .. }
            | TemplateOperation::Copy { target, .. }
            | TemplateOperation::Download { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    ///
    /// # Returns
    /// * `String` - A concise description including the operation type and paths
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target } => {
                format!("create directory '{}'", target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
            TemplateOperation::Copy { source, target } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::Download { url, target } => {
                format!("download '{}' -> '{}'", url, target.display())
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::CreateDirectory { target } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("{}Writing to '{}'", prefix, target.display())
            }
            TemplateOperation::Copy { source, target } => {
                format!(
                    "{}Copying '{}' to '{}'",
                    prefix,
                    source.display(),
                    target.display()
                )
            }
            TemplateOperation::Download { url, target } => {
                format!("{}Downloading '{}' to '{}'", prefix, url, target.display())
            }
        }
    }
}
