//! Variable interpolation for run lines
//!
//! `${Name}` is replaced by the parsed value of the parameter with that
//! canonical name, or by the environment variable of that name. Unknown
//! references are left in place. Only the configured line is scanned;
//! substituted values are inserted as raw text.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

fn variable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid interpolation pattern"))
}

fn lookup(name: &str, vars: &HashMap<String, String>) -> Option<String> {
    vars.get(name).cloned().or_else(|| env::var(name).ok())
}

/// Interpolate variables in a string
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> String {
    variable_regex()
        .replace_all(s, |caps: &Captures| {
            lookup(&caps[1], vars).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
