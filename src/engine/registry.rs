//! Command registry
//!
//! Holds every registered command in registration order and builds fresh
//! instances on lookup.

use crate::engine::{Command, CommandDescriptor, CommandFactory, FnCommand, ParsedArguments};
use crate::engine::{HELP_KEY, HELP_NAME};
use crate::error::{RegistryError, RegistryResult};
use std::collections::HashSet;
use std::io::Write;

struct Entry {
    descriptor: CommandDescriptor,
    factory: CommandFactory,
}

/// Registered commands, in registration order
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<Entry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command
    ///
    /// The help switch is merged into the descriptor, replacing any `h` entry.
    pub fn register<F>(&mut self, descriptor: CommandDescriptor, factory: F) -> RegistryResult<()>
    where
        F: Fn() -> Box<dyn Command> + 'static,
    {
        let mut descriptor = descriptor;
        validate_descriptor(&descriptor)?;

        if self.position(&descriptor.name).is_some() {
            return Err(RegistryError::DuplicateCommand(descriptor.name));
        }

        descriptor.inject_help();
        self.entries.push(Entry {
            descriptor,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Register a stateless closure as a command
    pub fn register_fn<F>(&mut self, descriptor: CommandDescriptor, f: F) -> RegistryResult<()>
    where
        F: Fn(&ParsedArguments, &mut dyn Write) -> anyhow::Result<()> + Clone + 'static,
    {
        self.register(descriptor, move || {
            Box::new(FnCommand::new(f.clone())) as Box<dyn Command>
        })
    }

    /// Build a new instance of the named command (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<Box<dyn Command>> {
        self.position(name).map(|i| (self.entries[i].factory)())
    }

    /// Descriptor of the named command (case-insensitive)
    pub fn descriptor(&self, name: &str) -> Option<&CommandDescriptor> {
        self.position(name).map(|i| &self.entries[i].descriptor)
    }

    /// All descriptors in registration order
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.descriptor.name.eq_ignore_ascii_case(name))
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check name and parameter uniqueness before the help switch is merged
fn validate_descriptor(descriptor: &CommandDescriptor) -> RegistryResult<()> {
    let command = &descriptor.name;
    if command.trim().is_empty() {
        return Err(RegistryError::EmptyCommandName);
    }

    let mut keys = HashSet::new();
    let mut names = HashSet::new();

    // The `h` entry is replaced by the help switch, so it is never checked
    for param in descriptor.parameters.iter().filter(|p| p.key != HELP_KEY) {
        for token in [&param.key, &param.canonical_name] {
            if !is_token(token) {
                return Err(RegistryError::InvalidToken {
                    command: command.clone(),
                    token: token.clone(),
                });
            }
        }

        if param.canonical_name == HELP_NAME {
            return Err(RegistryError::ReservedName {
                command: command.clone(),
                key: param.key.clone(),
            });
        }

        if param.key.eq_ignore_ascii_case(HELP_KEY) || !keys.insert(param.key.to_ascii_lowercase()) {
            return Err(RegistryError::DuplicateKey {
                command: command.clone(),
                key: param.key.clone(),
            });
        }

        if !names.insert(param.canonical_name.as_str()) {
            return Err(RegistryError::DuplicateCanonicalName {
                command: command.clone(),
                name: param.canonical_name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ParameterSpec;
    use std::cell::Cell;
    use std::rc::Rc;

    fn noop(_: &ParsedArguments, _: &mut dyn Write) -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn test_register_injects_help() {
        let mut registry = CommandRegistry::new();
        registry
            .register_fn(
                CommandDescriptor::new("build", "Build it")
                    .with_parameter(ParameterSpec::new("t", "Target")),
                noop,
            )
            .unwrap();

        let descriptor = registry.descriptor("build").unwrap();
        let help = descriptor.by_key("h").unwrap();
        assert_eq!(help.canonical_name, "help");
        assert!(help.is_switch());
        assert_eq!(descriptor.parameters.len(), 2);
    }

    #[test]
    fn test_register_overwrites_existing_h() {
        let mut registry = CommandRegistry::new();
        registry
            .register_fn(
                CommandDescriptor::new("connect", "")
                    .with_parameter(ParameterSpec::new("h", "Host").mandatory()),
                noop,
            )
            .unwrap();

        let descriptor = registry.descriptor("connect").unwrap();
        assert!(descriptor.by_canonical_name("Host").is_none());
        assert_eq!(descriptor.mandatory_parameters().count(), 0);
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry
            .register_fn(CommandDescriptor::new("testCommand", ""), noop)
            .unwrap();

        assert!(registry.find_by_name("testcommand").is_some());
        assert!(registry.find_by_name("TESTCOMMAND").is_some());
        assert!(registry.find_by_name("other").is_none());
    }

    #[test]
    fn test_find_by_name_builds_fresh_instances() {
        let built = Rc::new(Cell::new(0));
        let counter = Rc::clone(&built);

        let mut registry = CommandRegistry::new();
        registry
            .register(CommandDescriptor::new("count", ""), move || {
                counter.set(counter.get() + 1);
                Box::new(FnCommand::new(noop)) as Box<dyn Command>
            })
            .unwrap();

        registry.find_by_name("count");
        registry.find_by_name("count");
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = CommandRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry
                .register_fn(CommandDescriptor::new(name, ""), noop)
                .unwrap();
        }

        let names: Vec<_> = registry.descriptors().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_command_rejected() {
        let mut registry = CommandRegistry::new();
        registry
            .register_fn(CommandDescriptor::new("run", ""), noop)
            .unwrap();
        let err = registry
            .register_fn(CommandDescriptor::new("RUN", ""), noop)
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCommand("RUN".to_string()));
    }

    #[test]
    fn test_duplicate_key_case_insensitive() {
        let descriptor = CommandDescriptor::new("x", "")
            .with_parameter(ParameterSpec::new("p", "Path"))
            .with_parameter(ParameterSpec::new("P", "Port"));
        let err = CommandRegistry::new().register_fn(descriptor, noop).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
    }

    #[test]
    fn test_uppercase_h_collides_with_help() {
        let descriptor =
            CommandDescriptor::new("x", "").with_parameter(ParameterSpec::new("H", "Host"));
        let err = CommandRegistry::new().register_fn(descriptor, noop).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
    }

    #[test]
    fn test_duplicate_canonical_name_rejected() {
        let descriptor = CommandDescriptor::new("x", "")
            .with_parameter(ParameterSpec::new("a", "Path"))
            .with_parameter(ParameterSpec::new("b", "Path"));
        let err = CommandRegistry::new().register_fn(descriptor, noop).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCanonicalName { .. }));
    }

    #[test]
    fn test_non_alphanumeric_token_rejected() {
        let descriptor =
            CommandDescriptor::new("x", "").with_parameter(ParameterSpec::new("d", "dry-run"));
        let err = CommandRegistry::new().register_fn(descriptor, noop).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidToken {
                command: "x".to_string(),
                token: "dry-run".to_string(),
            }
        );
    }

    #[test]
    fn test_reserved_help_name_rejected() {
        let descriptor =
            CommandDescriptor::new("x", "").with_parameter(ParameterSpec::new("x", "help"));
        let err = CommandRegistry::new().register_fn(descriptor, noop).unwrap_err();
        assert!(matches!(err, RegistryError::ReservedName { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = CommandRegistry::new()
            .register_fn(CommandDescriptor::new("  ", ""), noop)
            .unwrap_err();
        assert_eq!(err, RegistryError::EmptyCommandName);
    }
}
