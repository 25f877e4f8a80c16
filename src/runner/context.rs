//! Execution context for shell commands
//!
//! The context carries what a run line needs: variables, interpreter,
//! working directory and verbosity.

use crate::engine::ParsedArguments;
use crate::ui::Verbosity;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Default interpreter for run lines
pub const DEFAULT_INTERPRETER: &[&str] = &["sh", "-c"];

/// Execution context that tracks state while a command runs
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory for run lines
    pub working_dir: PathBuf,

    /// Variables from parsed arguments
    pub vars: HashMap<String, String>,

    /// Interpreter (e.g., ["bash", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            vars: HashMap::new(),
            interpreter: DEFAULT_INTERPRETER.iter().map(|s| s.to_string()).collect(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set variables
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = vars;
        self
    }

    /// Take variables from parsed arguments
    pub fn with_args(self, args: &ParsedArguments) -> Self {
        self.with_vars(args.clone().into_map())
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_new() {
        let ctx = Context::new();
        assert_eq!(ctx.verbosity, Verbosity::Normal);
        assert_eq!(ctx.interpreter, vec!["sh", "-c"]);
        assert!(ctx.vars.is_empty());
    }

    #[test]
    fn test_context_with_args() {
        let mut args = ParsedArguments::new();
        args.insert("Name", "value");

        let ctx = Context::new().with_args(&args);
        assert_eq!(ctx.vars.get("Name").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_with_interpreter() {
        let ctx = Context::new().with_interpreter(vec!["bash".to_string(), "-c".to_string()]);
        assert_eq!(ctx.interpreter, vec!["bash", "-c"]);
    }
}
