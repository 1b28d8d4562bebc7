use super::error::PatternError;
use super::parser::Pattern;
use crate::extract::{extract_field, render_value};
use regex::Regex;
use serde_json::Value;

/// A match rule tested against the rendered field value of each line.
///
/// Built once at startup, immutable afterwards. Both variants share the
/// `matches` contract: total, side-effect free, and never failing; a line
/// that is not valid JSON or lacks the field simply does not match.
#[derive(Debug)]
pub enum Matcher {
    /// Case-sensitive substring match
    Literal { field: String, value: String },
    /// Unanchored regex search over the rendered value
    Regex { field: String, pattern: Regex },
}

impl Matcher {
    /// Build a matcher from a raw `FIELD=VALUE` pattern.
    ///
    /// Pattern parse errors propagate unchanged; with `use_regex` set, the
    /// value half is compiled and a syntax error surfaces as
    /// [`PatternError::RegexCompile`].
    pub fn new(use_regex: bool, raw_pattern: &str) -> Result<Self, PatternError> {
        let Pattern { field, value } = Pattern::parse(raw_pattern)?;

        if use_regex {
            let pattern =
                Regex::new(&value).map_err(|source| PatternError::RegexCompile { source })?;
            Ok(Matcher::Regex { field, pattern })
        } else {
            Ok(Matcher::Literal { field, value })
        }
    }

    /// Test one input line against the rule.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::Literal { field, value } => rendered_field(line, field).contains(value),
            Matcher::Regex { field, pattern } => pattern.is_match(&rendered_field(line, field)),
        }
    }
}

/// Render the value at `field` within a JSON line, or `""` on any miss
fn rendered_field(line: &str, field: &str) -> String {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|root| extract_field(&root, field).map(render_value))
        .unwrap_or_default()
}
