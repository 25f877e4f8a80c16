//! Command dispatch engine
//!
//! This module maps an argument vector to a registered command, parses and
//! validates its parameters, and renders help text.

pub mod command;
pub mod descriptor;
pub mod dispatch;
pub mod help;
pub mod parser;
pub mod registry;
pub mod validate;

// Re-export main types
pub use command::*;
pub use descriptor::*;
pub use dispatch::*;
pub use help::*;
pub use parser::*;
pub use registry::*;
pub use validate::*;
