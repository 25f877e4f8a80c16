//! Command metadata
//!
//! Static descriptions of commands and the parameters they accept, plus the
//! per-dispatch mapping of parsed values.

use std::collections::HashMap;

/// Key of the help switch injected into every registered command
pub const HELP_KEY: &str = "h";

/// Canonical name of the help switch
pub const HELP_NAME: &str = "help";

/// Description of the help switch
pub const HELP_DESCRIPTION: &str = "Displays help information for the specified command.";

/// Whether a parameter carries a value or is a bare flag
///
/// Only help rendering cares about the difference: the parser treats both
/// kinds the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    #[default]
    Value,
    Switch,
}

/// A parameter accepted by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Short token used on the command line (`-p1`)
    pub key: String,

    /// Long name (`--Parameter1`), also the key in [`ParsedArguments`]
    pub canonical_name: String,

    /// Help text
    pub description: String,

    /// Whether validation requires this parameter to be present
    pub mandatory: bool,

    /// Value or switch
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// Create an optional value parameter
    pub fn new(key: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        ParameterSpec {
            key: key.into(),
            canonical_name: canonical_name.into(),
            description: String::new(),
            mandatory: false,
            kind: ParameterKind::Value,
        }
    }

    /// Create an optional switch
    pub fn switch(key: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        ParameterSpec::new(key, canonical_name).with_kind(ParameterKind::Switch)
    }

    /// Set the help text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the parameter as mandatory
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Set the parameter kind
    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a switch
    pub fn is_switch(&self) -> bool {
        self.kind == ParameterKind::Switch
    }

    /// The reserved help switch
    pub fn help() -> Self {
        ParameterSpec::switch(HELP_KEY, HELP_NAME).with_description(HELP_DESCRIPTION)
    }
}

/// Name, description and parameters of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Command name, matched case-insensitively
    pub name: String,

    /// One-line description for the command listing
    pub description: String,

    /// Parameters in declaration order
    pub parameters: Vec<ParameterSpec>,
}

impl CommandDescriptor {
    /// Create a descriptor with no parameters
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        CommandDescriptor {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Find a parameter by its short key (case-sensitive)
    pub fn by_key(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }

    /// Find a parameter by its canonical name
    pub fn by_canonical_name(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.canonical_name == name)
    }

    /// Mandatory parameters in declaration order
    pub fn mandatory_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.mandatory)
    }

    /// Replace any `h` entry with the help switch
    pub(crate) fn inject_help(&mut self) {
        self.parameters.retain(|p| p.key != HELP_KEY);
        self.parameters.push(ParameterSpec::help());
    }
}

/// Parsed values keyed by canonical name
///
/// Switches and keys without a following value map to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: HashMap<String, String>,
}

impl ParsedArguments {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any earlier one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get a value by canonical name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether the parameter was given at all
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether help was requested
    pub fn help_requested(&self) -> bool {
        self.contains(HELP_NAME)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume into a plain map
    pub fn into_map(self) -> HashMap<String, String> {
        self.values
    }
}
