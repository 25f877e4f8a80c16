//! Main CLI application
//!
//! Outer flags (`-f`, `-q`, `-s`, `-v`, `--completions`) are parsed with clap
//! and must come before the command name. Everything from the command name on
//! is handed to the dispatcher untouched.

use crate::config::{load_env_file, parse_config_auto, parse_config_file, validate_config, Config};
use crate::engine::{
    render_app_help, Command as EngineCommand, CommandRegistry, Dispatcher, Outcome,
};
use crate::error::ArgvaultError;
use crate::runner::{Context, ShellCommand};
use crate::ui::{self, Verbosity};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// CLI application
pub struct App {
    /// Parsed configuration
    config: Config,
    /// Commands built from the configuration
    registry: CommandRegistry,
    /// Trace level
    verbosity: Verbosity,
}

impl App {
    /// Create an app from a configuration file, discovering it when `path` is `None`
    pub fn load(path: Option<PathBuf>, verbosity: Verbosity) -> Result<Self, ArgvaultError> {
        let (config, config_path) = match path {
            Some(path) => (parse_config_file(&path)?, path),
            None => parse_config_auto()?,
        };
        Self::from_config(config, config_path, verbosity)
    }

    /// Create an app from an already parsed configuration
    pub fn from_config(
        config: Config,
        config_path: PathBuf,
        verbosity: Verbosity,
    ) -> Result<Self, ArgvaultError> {
        validate_config(&config)?;
        ui::debug(verbosity, &format!("Using config {}", config_path.display()));

        if load_env_file(&config_path)? {
            ui::debug(verbosity, "Loaded .env");
        }

        let registry = build_registry(&config, &config_path, verbosity)?;

        Ok(App {
            config,
            registry,
            verbosity,
        })
    }

    /// The registered commands
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatch an argument vector, reporting unknown commands with the usage block
    ///
    /// A leading `-h` or `--help` prints the application help.
    pub fn dispatch(&self, argv: &[String], out: &mut dyn Write) -> Result<Outcome, ArgvaultError> {
        if matches!(argv.first().map(String::as_str), Some("-h") | Some("--help")) {
            render_app_help(&self.registry, out)?;
            return Ok(Outcome::HelpShown);
        }

        let dispatcher = Dispatcher::new(&self.registry).with_verbosity(self.verbosity);
        let outcome = dispatcher.dispatch(argv, out)?;

        if let Outcome::NotFound(name) = &outcome {
            ui::error(self.verbosity, &format!("Unknown command '{}'", name));
            dispatcher.print_usage(out)?;
        }

        Ok(outcome)
    }

    /// Write a completion script for the registered commands
    pub fn completions(&self, shell: Shell, out: &mut dyn Write) {
        let bin_name = self.bin_name();
        let mut cmd = build_completion_command(&self.registry, &bin_name);
        clap_complete::generate(shell, &mut cmd, bin_name, out);
    }

    fn bin_name(&self) -> String {
        self.config
            .name
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
    }
}

/// Directory holding the config file, `.` for a bare file name
fn config_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Register one shell command per configured command, in file order
pub fn build_registry(
    config: &Config,
    config_path: &Path,
    verbosity: Verbosity,
) -> Result<CommandRegistry, ArgvaultError> {
    let base_dir = config_dir(config_path);

    let mut context = Context::new().with_verbosity(verbosity);
    if let Some(interpreter) = &config.interpreter {
        context = context.with_interpreter(interpreter.clone());
    }

    let mut registry = CommandRegistry::new();
    for command_config in &config.commands {
        let shell = ShellCommand::from_config(command_config, base_dir.clone(), context.clone());
        registry.register(command_config.descriptor(), move || {
            Box::new(shell.clone()) as Box<dyn EngineCommand>
        })?;
    }

    Ok(registry)
}

/// Flags shared by the outer command line and the completion script
fn outer_args() -> Vec<Arg> {
    vec![
        Arg::new("file")
            .short('f')
            .long("file")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Path to argvault.yml config file"),
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .help("Only print command output and errors")
            .action(ArgAction::SetTrue),
        Arg::new("silent")
            .short('s')
            .long("silent")
            .help("Print no diagnostics")
            .action(ArgAction::SetTrue),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Print verbose output")
            .action(ArgAction::SetTrue),
        Arg::new("completions")
            .long("completions")
            .value_name("SHELL")
            .value_parser(value_parser!(Shell))
            .help("Print a completion script for the configured commands"),
    ]
}

/// Build the outer clap command
///
/// clap's own `-h` is disabled: help belongs to the dispatched commands.
fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run commands declared in argvault.yml")
        .disable_help_flag(true)
        .args(outer_args())
        .arg(
            Arg::new("argv")
                .value_name("COMMAND")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

/// Build a clap command mirroring the registry, for completion scripts
fn build_completion_command(registry: &CommandRegistry, bin_name: &str) -> Command {
    let mut cmd = Command::new(bin_name.to_string())
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .args(outer_args());

    for descriptor in registry.descriptors() {
        let mut sub = Command::new(descriptor.name.clone())
            .about(descriptor.description.clone())
            .disable_help_flag(true);

        for param in &descriptor.parameters {
            let mut arg = Arg::new(param.canonical_name.clone())
                .long(param.canonical_name.clone())
                .help(param.description.clone());

            // Multi-character keys have no clap equivalent
            let mut chars = param.key.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                arg = arg.short(c);
            }

            arg = if param.is_switch() {
                arg.action(ArgAction::SetTrue)
            } else {
                arg.value_name(param.canonical_name.to_uppercase())
            };
            sub = sub.arg(arg);
        }

        cmd = cmd.subcommand(sub);
    }

    cmd
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run with an explicit argument list (including the program name)
///
/// Returns `None` when a completion script was printed instead of a dispatch.
pub fn run_from<I, T>(args: I, out: &mut dyn Write) -> Result<Option<Outcome>, ArgvaultError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    let verbosity = get_verbosity(&matches);

    let app = App::load(matches.get_one::<PathBuf>("file").cloned(), verbosity)?;

    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        app.completions(shell, out);
        return Ok(None);
    }

    let argv: Vec<String> = matches
        .get_many::<String>("argv")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    app.dispatch(&argv, out).map(Some)
}

/// Run the CLI application with the process arguments
///
/// Returns whether the process should exit successfully.
pub fn run() -> Result<bool, ArgvaultError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_from(std::env::args_os(), &mut out) {
        Ok(outcome) => Ok(outcome.map_or(true, |o| o.is_success())),
        Err(ArgvaultError::Cli(e)) => e.exit(),
        Err(e) => Err(e),
    }
}
