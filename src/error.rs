use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("HTTP request failed. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid template address. Original error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration file '{path}' not found or not readable.")]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file '{path}': {reason}")]
    ConfigMalformed { path: String, reason: String },

    /// Soft stop: the project directory is never touched twice.
    #[error("Project '{project_name}' already exists.")]
    AlreadyExists { project_name: String },

    /// Soft stop for a single database module request.
    #[error("Database module source '{path}' does not exist.")]
    DatabaseModulePathMissing { path: String },

    #[error("Error: Repository or file not found ({url}).")]
    TemplateNotFound { url: String },

    #[error("No versions available for {framework}.")]
    NoVersionsAvailable { framework: String },

    #[error("Cannot process the path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error("Invalid module request '{request}': expected <kind>:<name> with plain names.")]
    InvalidModuleRequest { request: String },

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Soft stops are reported to the user but do not fail the invocation.
    pub fn is_soft_stop(&self) -> bool {
        matches!(
            self,
            Error::AlreadyExists { .. }
                | Error::DatabaseModulePathMissing { .. }
                | Error::TemplateNotFound { .. }
                | Error::NoVersionsAvailable { .. }
        )
    }
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Soft stops are printed to stdout and exit with status code 0,
/// everything else goes to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    if err.is_soft_stop() {
        println!("{err}");
        std::process::exit(crate::constants::exit_codes::SUCCESS);
    }
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
