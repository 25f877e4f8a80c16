//! Configuration validation
//!
//! Structural checks on the command table. Parameter uniqueness and token
//! shape are enforced by the registry when the table is registered.

use crate::config::types::{CommandConfig, Config};
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(interpreter) = &config.interpreter {
        if interpreter.is_empty() || interpreter[0].trim().is_empty() {
            return Err(ConfigError::Invalid(
                "interpreter must name a program".to_string(),
            ));
        }
    }

    for command in &config.commands {
        validate_command(command)?;
    }

    Ok(())
}

/// Validate a single command
pub fn validate_command(command: &CommandConfig) -> ConfigResult<()> {
    if command.name.trim().is_empty() {
        return Err(ConfigError::Invalid("command name must not be empty".to_string()));
    }

    if command.name.chars().any(char::is_whitespace) || command.name.starts_with('-') {
        return Err(ConfigError::Invalid(format!(
            "command name '{}' must be a single word not starting with '-'",
            command.name
        )));
    }

    if command.run.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "command '{}' has nothing to run",
            command.name
        )));
    }

    for run in &command.run {
        if run.exec().trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "command '{}' has an empty run line",
                command.name
            )));
        }
    }

    Ok(())
}
