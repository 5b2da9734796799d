use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ApiError;

/// Deepest array/object nesting accepted in a request body
pub const MAX_DEPTH: usize = 1024;

/// Decode a complete JSON document, rejecting trailing data
///
/// serde_json's own recursion limit (128) is disabled; depth is bounded by
/// `MAX_DEPTH` instead and the parser grows its stack on demand.
pub fn decode(bytes: &[u8]) -> Result<JsonValue, ApiError> {
    if exceeds_depth(bytes, MAX_DEPTH) {
        return Err(ApiError::TooDeep(MAX_DEPTH));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

pub fn encode(value: &JsonValue) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::new(&mut out);
    value.serialize(serde_stacker::Serializer::new(&mut ser))?;
    Ok(out)
}

// Brackets inside string literals do not count. Malformed input is left for
// the parser to report.
fn exceeds_depth(bytes: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &b in bytes {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_arrays(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn test_decodes_beyond_serde_json_default_depth() {
        let input = nested_arrays(200);

        let value = decode(input.as_bytes()).unwrap();
        assert_eq!(encode(&value).unwrap(), input.as_bytes());
    }

    #[test]
    fn test_decodes_at_max_depth() {
        let input = nested_arrays(MAX_DEPTH);

        let value = decode(input.as_bytes()).unwrap();
        assert_eq!(encode(&value).unwrap(), input.as_bytes());
    }

    #[test]
    fn test_rejects_past_max_depth() {
        let input = nested_arrays(MAX_DEPTH + 1);

        let err = decode(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ApiError::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn test_mixed_objects_and_arrays_count_together() {
        let input = format!("{}{}", r#"{"a":["#.repeat(MAX_DEPTH / 2 + 1), "]}".repeat(MAX_DEPTH / 2 + 1));

        assert!(matches!(decode(input.as_bytes()), Err(ApiError::TooDeep(_))));
    }

    #[test]
    fn test_brackets_in_strings_do_not_count() {
        let input = format!(r#"{{"s":"{}\"{}"}}"#, "[".repeat(MAX_DEPTH * 2), "{".repeat(10));

        let value = decode(input.as_bytes()).unwrap();
        assert!(value["s"].as_str().unwrap().starts_with("[[["));
    }

    #[test]
    fn test_rejects_trailing_data() {
        let err = decode(b"[1] [2]").unwrap_err();
        assert!(matches!(err, ApiError::JsonError(_)));
    }

    #[test]
    fn test_exponent_numbers_keep_value() {
        let value = decode(b"[1e400,12345678901234567890123]").unwrap();
        assert_eq!(
            String::from_utf8(encode(&value).unwrap()).unwrap(),
            "[1e+400,12345678901234567890123]"
        );
    }

    #[test]
    fn test_lone_surrogate_is_rejected() {
        let err = decode(br#""\ud800""#).unwrap_err();
        assert!(matches!(err, ApiError::JsonError(_)));
    }
}
