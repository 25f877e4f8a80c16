//! Core configuration types
//!
//! This module defines the data structures that represent an argvault.yml
//! command table.

use crate::engine::{CommandDescriptor, ParameterKind, ParameterSpec};
use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Commands, in the order they are registered and listed
    #[serde(default)]
    pub commands: Vec<CommandConfig>,

    /// Global interpreter to use for run lines (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,
}

/// A command definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandConfig {
    /// Name typed on the command line
    pub name: String,

    /// One-line description for the command listing
    #[serde(default)]
    pub description: String,

    /// Accepted parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterConfig>,

    /// Lines to execute
    #[serde(default, deserialize_with = "deserialize_run_items")]
    pub run: Vec<Run>,

    /// Working directory, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

/// A parameter definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParameterConfig {
    /// Short key (`-k`)
    pub key: String,

    /// Canonical name (`--Name`), also the interpolation variable
    pub name: String,

    /// Help text
    #[serde(default)]
    pub description: String,

    /// Required parameter
    #[serde(default)]
    pub mandatory: bool,

    /// `value` (default) or `switch`
    #[serde(default)]
    pub kind: Kind,
}

/// Parameter kind as written in YAML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Value,
    Switch,
}

/// A run line - a plain string or a detailed entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Run {
    /// Simple string command
    Simple(String),

    /// Command with additional options
    Detail(RunDetail),
}

/// Detailed run line
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunDetail {
    /// The line to execute
    pub exec: String,

    /// What to print when running (defaults to exec)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print: Option<String>,

    /// Whether to suppress the `[RUN]` echo
    #[serde(default)]
    pub quiet: bool,
}

impl From<Kind> for ParameterKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Value => ParameterKind::Value,
            Kind::Switch => ParameterKind::Switch,
        }
    }
}

impl From<&ParameterConfig> for ParameterSpec {
    fn from(param: &ParameterConfig) -> Self {
        let spec = ParameterSpec::new(&param.key, &param.name)
            .with_description(&param.description)
            .with_kind(param.kind.into());
        if param.mandatory {
            spec.mandatory()
        } else {
            spec
        }
    }
}

impl CommandConfig {
    /// Engine descriptor for this command
    pub fn descriptor(&self) -> CommandDescriptor {
        self.parameters.iter().fold(
            CommandDescriptor::new(&self.name, &self.description),
            |descriptor, param| descriptor.with_parameter(param.into()),
        )
    }
}

/// Custom deserializer for run items that handles both single values and arrays
fn deserialize_run_items<'de, D>(deserializer: D) -> Result<Vec<Run>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Single string or detailed line
        Value::String(s) => Ok(vec![Run::Simple(s)]),
        Value::Mapping(_) => {
            let run = Run::deserialize(value).map_err(D::Error::custom)?;
            Ok(vec![run])
        }
        // Array of run items
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| Run::deserialize(item).map_err(D::Error::custom))
            .collect(),
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("run must be a string, object, or array")),
    }
}
