//! Common test utilities

#![allow(dead_code)]

use argvault::engine::{CommandDescriptor, CommandRegistry, Dispatcher, Outcome, ParsedArguments};
use argvault::ui::Verbosity;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Create a temporary directory with an argvault.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argvault.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config with a subdirectory to run from
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let (temp_dir, config_path) = create_test_config(content);
    let sub_dir = temp_dir.path().join("subdir");
    fs::create_dir(&sub_dir).unwrap();
    (temp_dir, config_path, sub_dir)
}

/// Every argument mapping a recorded command was invoked with
pub type Calls = Rc<RefCell<Vec<ParsedArguments>>>;

/// Register a command that records its invocations
pub fn register_recorder(registry: &mut CommandRegistry, descriptor: CommandDescriptor) -> Calls {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    registry
        .register_fn(descriptor, move |args, _| {
            seen.borrow_mut().push(args.clone());
            Ok(())
        })
        .unwrap();
    calls
}

/// Convert string slices to an owned argument vector
pub fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

/// Dispatch and capture the sink output
pub fn dispatch(registry: &CommandRegistry, tokens: &[&str]) -> (Outcome, String) {
    let mut out: Vec<u8> = Vec::new();
    let outcome = Dispatcher::new(registry)
        .with_verbosity(Verbosity::Silent)
        .dispatch(&argv(tokens), &mut out)
        .unwrap();
    (outcome, String::from_utf8(out).unwrap())
}
