//! The command capability
//!
//! A command is anything that can be invoked with parsed arguments. Output
//! meant for the user goes to the sink handed in by the dispatcher.

use crate::engine::ParsedArguments;
use std::io::Write;

/// An invocable command
pub trait Command {
    /// Run the command with its parsed arguments
    fn invoke(&self, args: &ParsedArguments, out: &mut dyn Write) -> anyhow::Result<()>;
}

/// Adapter that turns a closure into a [`Command`]
pub struct FnCommand<F>(F);

impl<F> FnCommand<F>
where
    F: Fn(&ParsedArguments, &mut dyn Write) -> anyhow::Result<()>,
{
    pub fn new(f: F) -> Self {
        FnCommand(f)
    }
}

impl<F> Command for FnCommand<F>
where
    F: Fn(&ParsedArguments, &mut dyn Write) -> anyhow::Result<()>,
{
    fn invoke(&self, args: &ParsedArguments, out: &mut dyn Write) -> anyhow::Result<()> {
        (self.0)(args, out)
    }
}

/// Builds a fresh command instance for each invocation
pub type CommandFactory = Box<dyn Fn() -> Box<dyn Command>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_command_invokes_closure() {
        let cmd = FnCommand::new(|args, out| {
            writeln!(out, "name={}", args.get("Name").unwrap_or("?"))?;
            Ok(())
        });

        let mut args = ParsedArguments::new();
        args.insert("Name", "Ada");
        let mut out: Vec<u8> = Vec::new();
        cmd.invoke(&args, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "name=Ada\n");
    }

    #[test]
    fn test_fn_command_propagates_failure() {
        let cmd = FnCommand::new(|_, _| anyhow::bail!("boom"));
        let result = cmd.invoke(&ParsedArguments::new(), &mut Vec::<u8>::new());
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }
}
