use super::error::PatternError;

/// A raw `FIELD=VALUE` pattern split into its two halves.
///
/// Both halves are guaranteed non-empty after parsing; a pattern that
/// resolves to an empty field or value is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Dotted path naming the JSON field to extract from each line
    pub field: String,
    /// Text (or regex source) the extracted value is tested against
    pub value: String,
}

impl Pattern {
    /// Parse a raw pattern string into a `(field, value)` pair.
    ///
    /// The first unescaped `=` separates field from value. A backslash
    /// escapes the next character, taking it literally (including `=` and
    /// `\` itself) and excluding it from the separator search. Later `=`
    /// characters are ordinary content of the value. A trailing backslash
    /// is consumed without producing a character.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let mut field: Option<String> = None;
        let mut token = String::new();
        let mut escaped = false;

        for c in raw.chars() {
            if escaped {
                token.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '=' && field.is_none() {
                field = Some(std::mem::take(&mut token));
            } else {
                token.push(c);
            }
        }

        let field = field.unwrap_or_default();
        let value = token;

        if field.is_empty() || value.is_empty() {
            return Err(PatternError::Invalid {
                raw: raw.to_string(),
                field_empty: field.is_empty(),
                value_empty: value.is_empty(),
            });
        }

        Ok(Pattern { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pattern() {
        let pattern = Pattern::parse("a=b").unwrap();
        assert_eq!(pattern.field, "a");
        assert_eq!(pattern.value, "b");
    }

    #[test]
    fn test_first_separator_wins() {
        let pattern = Pattern::parse("a=b=c").unwrap();
        assert_eq!(pattern.field, "a");
        assert_eq!(pattern.value, "b=c");
    }

    #[test]
    fn test_escaped_separator_is_literal() {
        let pattern = Pattern::parse(r"a\=b=c").unwrap();
        assert_eq!(pattern.field, "a=b");
        assert_eq!(pattern.value, "c");
    }

    #[test]
    fn test_escaped_backslash_is_literal() {
        let pattern = Pattern::parse(r"a\\=b").unwrap();
        assert_eq!(pattern.field, r"a\");
        assert_eq!(pattern.value, "b");
    }

    #[test]
    fn test_escape_applies_to_one_character() {
        let pattern = Pattern::parse(r"a\bc=d").unwrap();
        assert_eq!(pattern.field, "abc");
        assert_eq!(pattern.value, "d");
    }

    #[test]
    fn test_trailing_backslash_is_consumed() {
        let pattern = Pattern::parse("a=b\\").unwrap();
        assert_eq!(pattern.field, "a");
        assert_eq!(pattern.value, "b");
    }

    #[test]
    fn test_no_separator_is_rejected() {
        let err = Pattern::parse("plaintext").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("plaintext"), "got: {msg}");
        assert!(msg.contains("field empty: true"), "got: {msg}");
    }

    #[test]
    fn test_empty_field_is_rejected() {
        assert!(Pattern::parse("=value").is_err());
    }

    #[test]
    fn test_empty_value_is_rejected() {
        assert!(Pattern::parse("field=").is_err());
        assert!(Pattern::parse("").is_err());
    }

    #[test]
    fn test_round_trip_of_plain_halves() {
        for (field, value) in [("msg", "timeout"), ("a.b.0", "503"), ("k", " v ")] {
            let pattern = Pattern::parse(&format!("{field}={value}")).unwrap();
            assert_eq!(pattern.field, field);
            assert_eq!(pattern.value, value);
        }
    }
}
