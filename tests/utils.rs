#![allow(dead_code)]

use codecraft::cli::{CreateArgs, Runner};
use codecraft::error::{Error, Result};
use codecraft::prompt::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn relative_files(dir: &Path) -> HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

fn print_content(label: &str, content: Vec<u8>) {
    println!("  --- {label} content:");
    let len = content.len();
    match String::from_utf8(content) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("  (binary content, {len} bytes)"),
    }
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `actual` - The generated tree.
/// * `expected` - The fixture tree.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");
    println!();

    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }

    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read(actual.join(file)).unwrap();
        let expected_content = fs::read(expected.join(file)).unwrap();
        if actual_content != expected_content {
            println!("\n  File: {file:?}");
            print_content("Actual", actual_content);
            print_content("Expected", expected_content);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Prompt provider for runs that must never ask anything.
pub struct NoPrompts;

fn unexpected_prompt<T>(prompt: &str) -> Result<T> {
    Err(Error::Other(anyhow::anyhow!("Unexpected prompt '{prompt}'")))
}

impl TextPrompter for NoPrompts {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        unexpected_prompt(&config.prompt)
    }
}

impl SingleChoicePrompter for NoPrompts {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        unexpected_prompt(&config.prompt)
    }
}

impl ConfirmationPrompter for NoPrompts {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        unexpected_prompt(&config.prompt)
    }
}

/// Non-interactive `create` arguments writing into `output_dir`.
pub fn create_args(
    framework: &str,
    project_name: &str,
    config: &str,
    output_dir: &Path,
) -> CreateArgs {
    CreateArgs {
        framework: framework.to_string(),
        project_name: project_name.to_string(),
        config: config.into(),
        output_dir: Some(output_dir.to_path_buf()),
        modules: Vec::new(),
        databases: Vec::new(),
        non_interactive: true,
        dry_run: false,
        verbose: 2,
    }
}

/// Asserts that `actual` matches the `expected_dir` fixture tree, printing a diff otherwise.
pub fn assert_same_tree(actual: &Path, expected_dir: &str) {
    match dir_diff::is_different(actual, expected_dir) {
        Ok(different) => {
            if different {
                print_dir_diff(actual, expected_dir.as_ref());
                panic!("Directories differ. See above for details.");
            }
        }
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
        }
    }
    assert!(!dir_diff::is_different(actual, expected_dir).unwrap());
}

/// Runs `create` non-interactively into a scratch directory and compares the
/// result with `expected_dir`.
///
/// # Arguments
/// * `args` - Arguments to run; `output_dir` is replaced by the scratch directory.
/// * `expected_dir` - Path to the directory with expected output.
pub fn run_and_assert(mut args: CreateArgs, expected_dir: &str) {
    let tmp_dir = tempfile::tempdir().unwrap();
    args.output_dir = Some(tmp_dir.path().to_path_buf());
    Runner::new(&NoPrompts).create(&args).unwrap();
    assert_same_tree(tmp_dir.path(), expected_dir);
}
