//! Variable interpolation for exec templates
//!
//! Replaces `${name}` references with invocation values.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("interpolation pattern is valid"))
}

/// Interpolate variables in a string
///
/// Only invocation variables are substituted; unknown names are left as-is
/// for the interpreter. Substituted values are not expanded again.
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> String {
    var_pattern()
        .replace_all(s, |caps: &Captures| {
            let var_name = &caps[1];
            match vars.get(var_name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
