//! Shell command runner
//!
//! This module executes commands declared in the configuration file:
//! interpolating parsed arguments into run lines and running them through
//! an interpreter.

pub mod command;
pub mod context;
pub mod interpolate;

// Re-export main types
pub use command::*;
pub use context::*;
pub use interpolate::*;
