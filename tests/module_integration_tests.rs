use codecraft::cli::Runner;
use codecraft::config::ProjectConfig;
use codecraft::error::{Error, Result};
use codecraft::module::{ModuleInjector, ModuleRequest};
use codecraft::prompt::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use codecraft::template::OperationExecutor;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use test_log::test;
mod utils;
use utils::{assert_same_tree, create_args};

const BLOG_CONFIG: &str = "tests/templates/blog/config.json";

enum Reply {
    Yes,
    No,
    Pick(usize),
    Type(&'static str),
}

/// Answers prompts from a fixed script.
struct Script(RefCell<VecDeque<Reply>>);

impl Script {
    fn new(replies: Vec<Reply>) -> Self {
        Self(RefCell::new(replies.into()))
    }

    fn next(&self, prompt: &str) -> Result<Reply> {
        self.0
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Other(anyhow::anyhow!("Script ended before '{prompt}'")))
    }

    fn is_done(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

fn wrong_reply<T>(prompt: &str) -> Result<T> {
    Err(Error::Other(anyhow::anyhow!("Wrong kind of reply for '{prompt}'")))
}

impl TextPrompter for Script {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        match self.next(&config.prompt)? {
            Reply::Type(text) => Ok(text.to_string()),
            _ => wrong_reply(&config.prompt),
        }
    }
}

impl SingleChoicePrompter for Script {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        match self.next(&config.prompt)? {
            Reply::Pick(index) => Ok(index),
            _ => wrong_reply(&config.prompt),
        }
    }
}

impl ConfirmationPrompter for Script {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        match self.next(&config.prompt)? {
            Reply::Yes => Ok(true),
            Reply::No => Ok(false),
            _ => wrong_reply(&config.prompt),
        }
    }
}

#[test]
fn test_interactive_modules_match_flag_driven_result() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut args = create_args("fastapi", "blog", BLOG_CONFIG, tmp_dir.path());
    args.non_interactive = false;
    let script = Script::new(vec![
        Reply::Yes,
        Reply::Pick(0),
        Reply::Pick(0),
        Reply::Yes,
        Reply::Pick(0),
        Reply::Type("billing"),
        Reply::No,
    ]);

    Runner::new(&script).create(&args).unwrap();

    assert!(script.is_done());
    assert_same_tree(tmp_dir.path(), "tests/expected/blog_with_modules");
}

#[test]
fn test_flag_requests_run_before_interactive_ones() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut args = create_args("fastapi", "blog", BLOG_CONFIG, tmp_dir.path());
    args.non_interactive = false;
    args.modules = vec!["service:billing".to_string()];
    let script = Script::new(vec![
        Reply::No,
        Reply::Yes,
        Reply::Pick(1),
        Reply::Type("orders"),
        Reply::No,
    ]);

    Runner::new(&script).create(&args).unwrap();

    let v1 = tmp_dir.path().join("blog/src/blog/v1");
    assert!(v1.join("service/billing/service.py").is_file());
    assert!(v1.join("repository/orders/repository.py").is_file());
    assert!(script.is_done());
}

#[test]
fn test_interactive_invalid_name_is_skipped() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut args = create_args("fastapi", "blog", BLOG_CONFIG, tmp_dir.path());
    args.non_interactive = false;
    let script = Script::new(vec![
        Reply::No,
        Reply::Yes,
        Reply::Pick(0),
        Reply::Type("bad/name"),
        Reply::Yes,
        Reply::Pick(0),
        Reply::Type("billing"),
        Reply::No,
    ]);

    Runner::new(&script).create(&args).unwrap();

    let service = tmp_dir.path().join("blog/src/blog/v1/service");
    assert!(service.join("billing/service.py").is_file());
    assert!(!service.join("bad").exists());
    assert!(script.is_done());
}

#[test]
fn test_module_injection_is_repeatable() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::load(BLOG_CONFIG).unwrap();
    let catalog = config.framework("fastapi").modules;
    let executor = OperationExecutor::new(false);
    let injector = ModuleInjector::new(tmp_dir.path(), "blog", &catalog, &executor);
    let request = ModuleRequest::parse_module("service:billing").unwrap();

    let first = injector.inject(&request).unwrap();
    fs::write(first.join("service.py"), "class BillingService: ...\n").unwrap();
    let second = injector.inject(&request).unwrap();

    assert_eq!(first, second);
    let mut names: Vec<_> = fs::read_dir(&second)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["__init__.py", "service.py"]);
    assert_eq!(fs::read_to_string(second.join("service.py")).unwrap(), "");
}

#[test]
fn test_database_module_copies_bytes_unmodified() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::load(BLOG_CONFIG).unwrap();
    let catalog = config.framework("fastapi").modules;
    let executor = OperationExecutor::new(false);
    let injector = ModuleInjector::new(tmp_dir.path(), "blog", &catalog, &executor);

    let destination = injector.inject_database_module("mongodb", "pymongo").unwrap();

    assert_eq!(destination, tmp_dir.path().join("src/blog/v1/frameworks/database"));
    assert_eq!(
        fs::read(destination.join("config.py")).unwrap(),
        fs::read("tests/templates/blog/database/mongodb/pymongo/config.py").unwrap()
    );
}

#[test]
fn test_missing_database_source_creates_nothing() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = ProjectConfig::load(BLOG_CONFIG).unwrap();
    let catalog = config.framework("fastapi").modules;
    let executor = OperationExecutor::new(false);
    let injector = ModuleInjector::new(tmp_dir.path(), "blog", &catalog, &executor);

    let result = injector.inject_database_module("mongodb", "motor");
    assert!(matches!(result, Err(Error::DatabaseModulePathMissing { .. })));
    assert_eq!(fs::read_dir(tmp_dir.path()).unwrap().count(), 0);
}
