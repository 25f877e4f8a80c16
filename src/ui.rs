//! Diagnostic output on stderr
//!
//! Tagged, colored trace lines gated by a verbosity level. User-facing output
//! of the engine never goes through here.

use colored::Colorize;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    #[default]
    Normal = 2,
    Verbose = 3,
}

/// Print info message
pub fn info(verbosity: Verbosity, message: &str) {
    if verbosity >= Verbosity::Normal {
        eprintln!("{} {}", "[INFO]".green(), message);
    }
}

/// Print error message
pub fn error(verbosity: Verbosity, message: &str) {
    if verbosity >= Verbosity::Quiet {
        eprintln!("{} {}", "[ERROR]".red().bold(), message);
    }
}

/// Print debug message (only in verbose mode)
pub fn debug(verbosity: Verbosity, message: &str) {
    if verbosity >= Verbosity::Verbose {
        eprintln!("{} {}", "[DEBUG]".dimmed(), message);
    }
}

/// Echo a shell line before it runs
pub fn run_line(verbosity: Verbosity, line: &str) {
    if verbosity >= Verbosity::Normal {
        eprintln!("{} {}", "[RUN]".cyan(), line);
    }
}
