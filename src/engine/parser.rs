//! Argument tokenization
//!
//! Turns the tokens after the command name into a canonical-name → value
//! mapping, using the command's descriptor to resolve keys.

use crate::engine::{CommandDescriptor, ParsedArguments};
use crate::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

fn key_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-{1,2}[a-zA-Z0-9]+$").expect("valid key token pattern"))
}

/// Whether a token names a parameter (`-p1`, `--Parameter1`)
pub fn is_key_token(token: &str) -> bool {
    key_token_regex().is_match(token)
}

/// Resolve a key token to the canonical name it refers to
fn resolve_key(descriptor: &CommandDescriptor, token: &str) -> Result<String, ParseError> {
    // Exactly one hyphen comes off first, so `--p1` is looked up as `-p1`
    let candidate = &token[1..];
    if let Some(spec) = descriptor.by_key(candidate) {
        return Ok(spec.canonical_name.clone());
    }

    if let Some(long) = token.strip_prefix("--") {
        if let Some(spec) = descriptor.by_canonical_name(long) {
            return Ok(spec.canonical_name.clone());
        }
    }

    Err(ParseError::InvalidArgument(token.to_string()))
}

/// Parse an argument vector against a descriptor
///
/// `argv[0]` is the command name and is skipped. Tokens that are not keys
/// are ignored unless they directly follow a key, in which case they become
/// its value. Parsing is all-or-nothing: the first unknown key fails the
/// whole vector.
pub fn parse_arguments(
    descriptor: &CommandDescriptor,
    argv: &[String],
) -> Result<ParsedArguments, ParseError> {
    let mut parsed = ParsedArguments::new();
    let mut i = 1;

    while i < argv.len() {
        let token = argv[i].as_str();
        i += 1;

        if !is_key_token(token) {
            continue;
        }

        let name = resolve_key(descriptor, token)?;

        let value = match argv.get(i) {
            Some(next) if !is_key_token(next) => {
                i += 1;
                next.clone()
            }
            _ => String::new(),
        };

        parsed.insert(name, value);
    }

    Ok(parsed)
}
