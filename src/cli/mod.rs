//! CLI interface
//!
//! This module wires the configuration, the registry and the dispatcher into
//! the `argvault` binary, and generates shell completions.

pub mod app;

// Re-export main types
pub use app::*;
