use serde_json::Value;

/// Resolve a dotted field path against a JSON value.
///
/// Path segments are separated by unescaped `.` characters; a backslash
/// escapes the next character, so `a\.b` names the single key "a.b". A
/// segment that parses as a non-negative integer indexes into an array
/// (against an object it is an ordinary key). Any missing key, out-of-range
/// index, type mismatch, or empty segment resolves to `None`.
pub fn extract_field<'a>(value: &'a Value, field_path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in split_path(field_path) {
        if segment.is_empty() {
            return None;
        }

        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => {
                let index = segment.parse::<usize>().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }

    Some(current)
}

/// Render an extracted JSON value as the string used for matching.
///
/// Strings render as their content without quotes; numbers and booleans in
/// their canonical text form; null, objects, and arrays render empty.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Object(_) | Value::Array(_) => String::new(),
    }
}

/// Split a field path on unescaped dots, resolving backslash escapes
fn split_path(field_path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut segment = String::new();
    let mut escaped = false;

    for c in field_path.chars() {
        if escaped {
            segment.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '.' {
            segments.push(std::mem::take(&mut segment));
        } else {
            segment.push(c);
        }
    }
    segments.push(segment);

    segments
}

#[cfg(test)]
mod tests {
    use super::{extract_field, render_value, split_path};
    use serde_json::json;

    #[test]
    fn extracts_nested_object_and_array_paths() {
        let payload = json!({
            "settings": {
                "retries": [
                    { "timeout": 1000 },
                    { "timeout": 2000 }
                ]
            }
        });

        assert_eq!(
            extract_field(&payload, "settings.retries.1.timeout"),
            Some(&json!(2000))
        );
        assert_eq!(extract_field(&payload, "settings.missing"), None);
        assert_eq!(extract_field(&payload, "settings.retries.9.timeout"), None);
    }

    #[test]
    fn numeric_segment_is_a_plain_key_on_objects() {
        let payload = json!({ "0": "zero" });
        assert_eq!(extract_field(&payload, "0"), Some(&json!("zero")));
    }

    #[test]
    fn scalar_in_the_middle_of_a_path_is_a_miss() {
        let payload = json!({ "a": 1 });
        assert_eq!(extract_field(&payload, "a.b"), None);
    }

    #[test]
    fn escaped_dot_names_a_single_key() {
        let payload = json!({ "a.b": { "c": "hit" } });
        assert_eq!(extract_field(&payload, r"a\.b.c"), Some(&json!("hit")));
        assert_eq!(split_path(r"a\.b.c"), vec!["a.b", "c"]);
    }

    #[test]
    fn empty_segment_is_a_miss() {
        let payload = json!({ "a": { "b": 1 } });
        assert_eq!(extract_field(&payload, "a..b"), None);
        assert_eq!(extract_field(&payload, ""), None);
    }

    #[test]
    fn renders_scalars_and_blanks_containers() {
        assert_eq!(render_value(&json!("text")), "text");
        assert_eq!(render_value(&json!(503)), "503");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(null)), "");
        assert_eq!(render_value(&json!({ "k": 1 })), "");
        assert_eq!(render_value(&json!([1, 2])), "");
    }
}
