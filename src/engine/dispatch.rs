//! Command dispatch
//!
//! Resolves the command named by `argv[0]`, parses the rest of the vector,
//! short-circuits to help or validation diagnostics, and finally invokes the
//! command. Every problem is reported on the output sink; only failures of
//! the sink itself are returned as errors.

use crate::engine::{
    confirm_mandatory, parse_arguments, render_app_help, render_command_help, CommandRegistry,
    ParsedArguments,
};
use crate::ui::{self, Verbosity};
use std::io::{self, Write};

/// Fixed message printed when no command is given
pub const USAGE_MESSAGE: &str =
    "Command is not set. Please provide a valid command. Usage: <myApp> [command] -p|--parameter";

/// Where a dispatch ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No command token; usage and application help were printed
    NoCommand,
    /// `argv[0]` is not registered; nothing was printed
    NotFound(String),
    /// An unknown key token was given; command help was printed
    InvalidArgument(String),
    /// Help was requested and printed
    HelpShown,
    /// Mandatory parameters were missing; command help was printed
    MissingMandatory,
    /// The command ran to completion
    Invoked,
    /// The command failed; its error was printed
    Failed,
}

impl Outcome {
    /// Whether the host should report success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Invoked | Outcome::HelpShown)
    }
}

/// Drives one argument vector through a registry
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
    verbosity: Verbosity,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Dispatcher {
            registry,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set verbosity of the stderr trace
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print the usage message, a blank line and application help
    pub fn print_usage(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{USAGE_MESSAGE}")?;
        writeln!(out)?;
        render_app_help(self.registry, out)
    }

    /// Dispatch one argument vector (`argv[0]` is the command name)
    pub fn dispatch(&self, argv: &[String], out: &mut dyn Write) -> io::Result<Outcome> {
        let Some(name) = argv.first() else {
            self.print_usage(out)?;
            return Ok(Outcome::NoCommand);
        };

        let (Some(descriptor), Some(command)) = (
            self.registry.descriptor(name),
            self.registry.find_by_name(name),
        ) else {
            ui::debug(self.verbosity, &format!("No command registered as '{}'", name));
            return Ok(Outcome::NotFound(name.clone()));
        };
        ui::debug(self.verbosity, &format!("Resolved command '{}'", descriptor.name));

        let (parsed, invalid) = match parse_arguments(descriptor, argv) {
            Ok(parsed) => (parsed, None),
            Err(err) => {
                writeln!(out, "{err}")?;
                (ParsedArguments::new(), Some(err))
            }
        };

        if parsed.help_requested() {
            render_command_help(descriptor, out)?;
            return Ok(Outcome::HelpShown);
        }

        let complete = confirm_mandatory(descriptor, &parsed, out)?;
        if let Some(err) = invalid {
            render_command_help(descriptor, out)?;
            return Ok(Outcome::InvalidArgument(err.token().to_string()));
        }
        if !complete {
            render_command_help(descriptor, out)?;
            return Ok(Outcome::MissingMandatory);
        }

        ui::debug(
            self.verbosity,
            &format!("Invoking '{}' with {} argument(s)", descriptor.name, parsed.len()),
        );
        match command.invoke(&parsed, out) {
            Ok(()) => Ok(Outcome::Invoked),
            Err(err) => {
                writeln!(out, "{err:?}")?;
                Ok(Outcome::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CommandDescriptor, ParameterSpec};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    /// Registry with one recording command; returns what it was invoked with
    fn recording_registry() -> (CommandRegistry, Rc<RefCell<Vec<ParsedArguments>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);

        let mut registry = CommandRegistry::new();
        registry
            .register_fn(
                CommandDescriptor::new("testCommand", "Test command").with_parameter(
                    ParameterSpec::new("param1", "Parameter1")
                        .with_description("First parameter")
                        .mandatory(),
                ),
                move |args, _| {
                    seen.borrow_mut().push(args.clone());
                    Ok(())
                },
            )
            .unwrap();
        (registry, calls)
    }

    fn run(registry: &CommandRegistry, tokens: &[&str]) -> (Outcome, String) {
        let mut out: Vec<u8> = Vec::new();
        let outcome = Dispatcher::new(registry)
            .with_verbosity(Verbosity::Silent)
            .dispatch(&argv(tokens), &mut out)
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_argv_prints_usage() {
        let (registry, _) = recording_registry();
        let (outcome, text) = run(&registry, &[]);

        assert_eq!(outcome, Outcome::NoCommand);
        assert!(text.starts_with(&format!("{USAGE_MESSAGE}\n\nCommands:\n")));
        assert!(text.contains("    testCommand  Test command\n"));
    }

    #[test]
    fn test_unknown_command_prints_nothing() {
        let (registry, calls) = recording_registry();
        let (outcome, text) = run(&registry, &["nope", "-x"]);

        assert_eq!(outcome, Outcome::NotFound("nope".to_string()));
        assert!(text.is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_help_short_circuits_validation() {
        let (registry, calls) = recording_registry();
        for flag in ["-h", "--help"] {
            let (outcome, text) = run(&registry, &["testCommand", flag]);
            assert_eq!(outcome, Outcome::HelpShown);
            assert!(text.starts_with("testCommand -param1|--Parameter1 -h|--help\n"));
            assert!(!text.contains("Missing mandatory"));
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_failure_is_caught_and_printed() {
        let mut registry = CommandRegistry::new();
        registry
            .register_fn(CommandDescriptor::new("explode", ""), |_, _| {
                Err(anyhow::anyhow!("disk on fire").context("could not write report"))
            })
            .unwrap();

        let (outcome, text) = run(&registry, &["explode"]);
        assert_eq!(outcome, Outcome::Failed);
        assert!(text.contains("could not write report"));
        assert!(text.contains("Caused by:"));
        assert!(text.contains("disk on fire"));
    }

    #[test]
    fn test_invalid_argument_without_mandatory_still_not_invoked() {
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        let mut registry = CommandRegistry::new();
        registry
            .register_fn(CommandDescriptor::new("plain", ""), move |_, _| {
                *seen.borrow_mut() += 1;
                Ok(())
            })
            .unwrap();

        let (outcome, text) = run(&registry, &["plain", "-zzz"]);
        assert_eq!(outcome, Outcome::InvalidArgument("-zzz".to_string()));
        assert_eq!(text, "Invalid argument: -zzz\nplain -h|--help\n    -h, --help  Displays help information for the specified command.\n");
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_outcome_success() {
        assert!(Outcome::Invoked.is_success());
        assert!(Outcome::HelpShown.is_success());
        assert!(!Outcome::Failed.is_success());
        assert!(!Outcome::NoCommand.is_success());
        assert!(!Outcome::NotFound("x".into()).is_success());
    }
}
