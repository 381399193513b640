//! Constants used throughout the Codecraft application

/// Configuration document used when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Base address of the remote template index
pub const TEMPLATE_BASE_URL: &str =
    "https://api.github.com/repos/avinash539/codecraft-template/contents/templates";

/// User agent sent with every remote request (the GitHub API rejects requests without one)
pub const USER_AGENT: &str = concat!("codecraft/", env!("CARGO_PKG_VERSION"));

/// Languages offered by the remote template index
pub const LANGUAGES: &[&str] = &["python", "nodejs"];

/// Placeholder variable bound to the project name
pub const PROJECT_NAME_VAR: &str = "project_name";

/// Directory that receives remote template entries
pub const REMOTE_SOURCE_DIR: &str = "src";

/// Layout of injected modules: `<root>/src/<project_name>/v1/...`
pub mod layout {
    pub const SOURCE_DIR: &str = "src";
    pub const API_VERSION_DIR: &str = "v1";
    /// Fixed destination of database driver modules, below the API version directory.
    pub const DATABASE_DIR: &[&str] = &["frameworks", "database"];
}

/// Module kinds understood by the catalog
pub mod module_kinds {
    pub const DATABASE: &str = "database";
    pub const SERVICE: &str = "service";
    pub const REPOSITORY: &str = "repository";
    /// Kinds offered by the interactive module prompt
    pub const INJECTABLE: &[&str] = &[SERVICE, REPOSITORY];
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
