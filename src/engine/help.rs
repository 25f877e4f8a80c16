//! Help rendering
//!
//! Application-level help lists every registered command; command-level help
//! lists one command's parameters. Both align their description column.

use crate::engine::{CommandDescriptor, CommandRegistry, ParameterSpec, HELP_DESCRIPTION};
use std::io::{self, Write};

const INDENT: &str = "    ";

/// Write the command listing followed by the global options block
pub fn render_app_help(registry: &CommandRegistry, out: &mut dyn Write) -> io::Result<()> {
    let width = registry
        .descriptors()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    writeln!(out, "Commands:")?;
    for descriptor in registry.descriptors() {
        writeln!(
            out,
            "{INDENT}{:<width$}{}",
            descriptor.name, descriptor.description
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Global Options:")?;
    writeln!(out, "{INDENT}-h, --help  {HELP_DESCRIPTION}")?;
    Ok(())
}

/// Parameters in help order: values by key, then switches by key
pub fn help_order(descriptor: &CommandDescriptor) -> Vec<&ParameterSpec> {
    let mut values: Vec<_> = descriptor.parameters.iter().filter(|p| !p.is_switch()).collect();
    let mut switches: Vec<_> = descriptor.parameters.iter().filter(|p| p.is_switch()).collect();
    values.sort_by(|a, b| a.key.cmp(&b.key));
    switches.sort_by(|a, b| a.key.cmp(&b.key));
    values.extend(switches);
    values
}

fn label(param: &ParameterSpec) -> String {
    if param.canonical_name.eq_ignore_ascii_case(&param.key) {
        format!("--{}", param.canonical_name)
    } else {
        format!("-{}, --{}", param.key, param.canonical_name)
    }
}

/// Write the usage line and parameter table for one command
pub fn render_command_help(descriptor: &CommandDescriptor, out: &mut dyn Write) -> io::Result<()> {
    let params = help_order(descriptor);

    let mut header = descriptor.name.clone();
    for param in &params {
        header.push_str(&format!(" -{}|--{}", param.key, param.canonical_name));
    }
    writeln!(out, "{header}")?;

    let labels: Vec<String> = params.iter().map(|p| label(p)).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for (param, label) in params.iter().zip(&labels) {
        writeln!(out, "{INDENT}{label:<width$}  {}", param.description)?;
    }
    Ok(())
}
