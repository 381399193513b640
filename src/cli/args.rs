use crate::constants::{exit_codes, verbosity, DEFAULT_CONFIG_FILE, TEMPLATE_BASE_URL};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Top-level CLI for Codecraft.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scaffold new projects from a structure description",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project from the local configuration document.
    Create(CreateArgs),
    /// Create a project from the remote template index.
    New(NewArgs),
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::Create(args) => args.verbose,
            Commands::New(args) => args.verbose,
        }
    }
}

/// Arguments of `codecraft create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Framework entry of the configuration document (e.g. fastapi, nestjs, django).
    #[arg(value_name = "FRAMEWORK")]
    pub framework: String,

    /// Name of the new project; also bound to `{project_name}`.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Configuration document (.json, .yaml or .yml).
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory the project is created in. Defaults to the current directory.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Module to inject after creation, as `<kind>:<name>` (repeatable).
    #[arg(short, long = "module", value_name = "KIND:NAME")]
    pub modules: Vec<String>,

    /// Database module to inject after creation, as `<database>:<driver>` (repeatable).
    #[arg(short, long = "database", value_name = "DATABASE:DRIVER")]
    pub databases: Vec<String>,

    /// Do not ask for further modules.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments of `codecraft new`.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Name of the new project.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Template language; prompted when missing.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Template framework; prompted when missing.
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Template version; prompted when missing.
    #[arg(long)]
    pub version: Option<String>,

    /// Base address of the remote template index.
    #[arg(long = "base-url", default_value = TEMPLATE_BASE_URL)]
    pub base_url: String,

    /// Directory the project is created in. Defaults to the current directory.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
