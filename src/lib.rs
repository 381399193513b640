/// Handles argument parsing and command dispatch.
pub mod cli;

/// Loading of the project configuration document.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for std types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Injection of modules into a generated project.
pub mod module;

/// Creation of new project trees.
pub mod project;

/// User input and interaction handling.
pub mod prompt;

/// Remote template index access.
pub mod remote;

/// Placeholder substitution.
pub mod renderer;

/// Planning and applying filesystem operations.
pub mod template;
