//! Argvault - a small command-dispatch engine
//!
//! Commands are registered with a descriptor of the parameters they accept.
//! The dispatcher maps an argument vector to a command, parses `-key` and
//! `--CanonicalName` tokens, checks mandatory parameters, renders help, and
//! invokes the command. The bundled binary declares commands in a YAML file
//! and runs them as shell commands.

// Public modules
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use engine::{
    Command, CommandDescriptor, CommandRegistry, Dispatcher, Outcome, ParameterKind,
    ParameterSpec, ParsedArguments,
};
pub use error::{ArgvaultError, Result};

/// Current version of Argvault
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
