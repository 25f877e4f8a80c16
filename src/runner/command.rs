//! Shell execution
//!
//! Runs interpolated lines through the interpreter and adapts a configured
//! command to the engine's [`Command`](crate::engine::Command) trait.

use crate::config::{CommandConfig, Run};
use crate::engine::{Command, ParsedArguments};
use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{interpolate, Context};
use crate::ui;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command as StdCommand, Stdio};

impl Run {
    /// The line to execute
    pub fn exec(&self) -> &str {
        match self {
            Run::Simple(line) => line,
            Run::Detail(detail) => &detail.exec,
        }
    }

    /// The line to echo
    pub fn print(&self) -> &str {
        match self {
            Run::Simple(line) => line,
            Run::Detail(detail) => detail.print.as_deref().unwrap_or(&detail.exec),
        }
    }

    /// Whether the echo is suppressed
    pub fn is_quiet(&self) -> bool {
        matches!(self, Run::Detail(detail) if detail.quiet)
    }
}

/// Execute one run line in the given context
pub fn execute_line(run: &Run, ctx: &Context) -> ExecutionResult<()> {
    let exec_str = interpolate(run.exec(), &ctx.vars);

    if !run.is_quiet() {
        ui::run_line(ctx.verbosity, &interpolate(run.print(), &ctx.vars));
    }

    let (program, args) = ctx
        .interpreter
        .split_first()
        .ok_or(ExecutionError::EmptyInterpreter)?;

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .arg(&exec_str)
        .current_dir(&ctx.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .envs(&ctx.vars);

    let status = command.status().map_err(|e| ExecutionError::Spawn {
        program: program.clone(),
        error: e.to_string(),
    })?;

    if !status.success() {
        return Err(ExecutionError::CommandFailed(status.code()));
    }

    Ok(())
}

/// A configured command that runs shell lines
#[derive(Debug, Clone)]
pub struct ShellCommand {
    name: String,
    run: Vec<Run>,
    context: Context,
}

impl ShellCommand {
    /// Build from configuration
    ///
    /// `base_dir` is the directory of the config file; a command `dir` is
    /// resolved against it.
    pub fn from_config(config: &CommandConfig, base_dir: PathBuf, context: Context) -> Self {
        let working_dir = match &config.dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir,
        };

        ShellCommand {
            name: config.name.clone(),
            run: config.run.clone(),
            context: context.with_working_dir(working_dir),
        }
    }
}

impl Command for ShellCommand {
    fn invoke(&self, args: &ParsedArguments, _out: &mut dyn Write) -> anyhow::Result<()> {
        let ctx = self.context.clone().with_args(args);
        ui::info(ctx.verbosity, &format!("Running command: {}", self.name));
        ui::debug(ctx.verbosity, &format!("Working directory: {}", ctx.working_dir.display()));

        for run in &self.run {
            execute_line(run, &ctx)?;
        }
        Ok(())
    }
}
