use thiserror::Error;

/// Errors that can occur when building a matcher from a raw pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern '{raw}' [field empty: {field_empty}, value empty: {value_empty}]")]
    Invalid {
        raw: String,
        field_empty: bool,
        value_empty: bool,
    },

    #[error("failed to compile regexp pattern: {source}")]
    RegexCompile {
        #[source]
        source: regex::Error,
    },
}
