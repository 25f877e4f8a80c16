//! Mandatory-parameter validation

use crate::engine::{CommandDescriptor, ParsedArguments};
use std::io::{self, Write};

/// Canonical names of mandatory parameters absent from `parsed`, in
/// declaration order
pub fn missing_mandatory<'a>(
    descriptor: &'a CommandDescriptor,
    parsed: &ParsedArguments,
) -> Vec<&'a str> {
    descriptor
        .mandatory_parameters()
        .filter(|p| !parsed.contains(&p.canonical_name))
        .map(|p| p.canonical_name.as_str())
        .collect()
}

/// Check that every mandatory parameter was given
///
/// Presence is what counts: an empty value satisfies the check. On failure
/// a single diagnostic line is written and `false` is returned.
pub fn confirm_mandatory(
    descriptor: &CommandDescriptor,
    parsed: &ParsedArguments,
    out: &mut dyn Write,
) -> io::Result<bool> {
    let missing = missing_mandatory(descriptor, parsed);
    if missing.is_empty() {
        return Ok(true);
    }

    writeln!(
        out,
        "Missing mandatory parameters for command '{}': {}",
        descriptor.name,
        missing.join(", ")
    )?;
    Ok(false)
}
