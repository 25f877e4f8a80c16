//! Error types for Argvault

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Argvault operations
pub type Result<T> = std::result::Result<T, ArgvaultError>;

/// Main error type for Argvault
#[derive(Error, Debug)]
pub enum ArgvaultError {
    /// Command registration errors
    #[error("Registration error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shell command execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Command-line errors from the outer flags
    #[error("{0}")]
    Cli(#[from] clap::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while building the command registry
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("Command name must not be empty")]
    EmptyCommandName,

    #[error("Command '{command}' declares parameter key '{key}' more than once")]
    DuplicateKey { command: String, key: String },

    #[error("Command '{command}' declares parameter name '{name}' more than once")]
    DuplicateCanonicalName { command: String, name: String },

    #[error("Command '{command}' has an invalid parameter token '{token}' (letters and digits only)")]
    InvalidToken { command: String, token: String },

    #[error("Command '{command}' uses the reserved parameter name 'help' for key '{key}'")]
    ReservedName { command: String, key: String },
}

/// Errors raised while tokenizing an argument vector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ParseError {
    /// The offending token
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidArgument(token) => token,
        }
    }
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to load environment file '{path}': {error}")]
    EnvFile { path: PathBuf, error: String },
}

/// Shell command execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command failed with exit code {0:?}")]
    CommandFailed(Option<i32>),

    #[error("Failed to start '{program}': {error}")]
    Spawn { program: String, error: String },

    #[error("Interpreter is empty")]
    EmptyInterpreter,
}

/// Specialized result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
