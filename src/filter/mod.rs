//! Pattern parsing and matching
//!
//! This module provides the `FIELD=VALUE` pattern language used to filter
//! JSON log lines: the pattern names a field inside each JSON record and
//! the text (or regex) its value must contain.
//!
//! # Syntax
//!
//! ```text
//! field=value           Match lines whose field contains value
//! a.b.c=value           Dotted paths traverse nested objects
//! items.0=value         Numeric segments index into arrays
//! a\=b=value            Backslash escapes the separator (and itself)
//! ```
//!
//! Only the first unescaped `=` splits the pattern; later ones are literal
//! content of the value. With regex mode enabled the value half is compiled
//! as a regular expression and searched against the extracted field.
//!
//! # Examples
//!
//! ```text
//! level=ERROR                  # field "level" contains "ERROR"
//! request.status=503           # nested field equals-ish match
//! msg=^conn.*refused$          # with -e: regex search on "msg"
//! ```

pub mod error;
pub mod matcher;
pub mod parser;

pub use error::PatternError;
pub use matcher::Matcher;
pub use parser::Pattern;
