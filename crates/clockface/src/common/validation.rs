//! Type and shape predicates over dynamic JSON values.

use serde_json::Value;

/// Returns `true` if the value is a JSON number.
///
/// # Examples
///
/// ```
/// use clockface::common::is_number;
/// use serde_json::json;
///
/// assert!(is_number(&json!(12)));
/// assert!(is_number(&json!(1.5)));
/// assert!(!is_number(&json!("12")));
/// ```
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Returns `true` if the value is numeric with no fractional part.
pub fn is_integer(value: &Value) -> bool {
    value.as_f64().is_some_and(is_whole)
}

/// Returns `true` if the value is an integer `>= 0`.
///
/// # Examples
///
/// ```
/// use clockface::common::is_non_negative_integer;
/// use serde_json::json;
///
/// assert!(is_non_negative_integer(&json!(0)));
/// assert!(!is_non_negative_integer(&json!(-12)));
/// assert!(!is_non_negative_integer(&json!(2.5)));
/// ```
pub fn is_non_negative_integer(value: &Value) -> bool {
    value.as_f64().is_some_and(is_non_negative_whole)
}

/// Returns `true` if the value is a JSON string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Finite with zero fractional part.
pub fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

pub fn is_non_negative_whole(n: f64) -> bool {
    is_whole(n) && n >= 0.0
}

/// Left-pads the decimal form of `value` with zeros to at least `width` characters.
///
/// Values with more digits than `width` are returned unpadded, never truncated.
///
/// # Examples
///
/// ```
/// use clockface::common::pad;
///
/// assert_eq!(pad(7, 2), "07");
/// assert_eq!(pad(24, 3), "024");
/// assert_eq!(pad(1234, 2), "1234");
/// ```
pub fn pad(value: u32, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}

/// Renders a value the way error messages quote it: strings without quotes,
/// numbers in their shortest form.
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Name of the JSON kind of a value, used when rejecting construction input.
pub fn describe_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_number() {
        assert!(is_number(&json!(0)));
        assert!(is_number(&json!(-3)));
        assert!(is_number(&json!(2.75)));
        assert!(!is_number(&json!("two")));
        assert!(!is_number(&json!(null)));
        assert!(!is_number(&json!(true)));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(&json!(12)));
        assert!(is_integer(&json!(-12)));
        assert!(is_integer(&json!(12.0)));
        assert!(!is_integer(&json!(12.5)));
        assert!(!is_integer(&json!("12")));
    }

    #[test]
    fn test_is_non_negative_integer() {
        assert!(is_non_negative_integer(&json!(0)));
        assert!(is_non_negative_integer(&json!(999)));
        assert!(!is_non_negative_integer(&json!(-1)));
        assert!(!is_non_negative_integer(&json!(0.5)));
        assert!(!is_non_negative_integer(&json!([1])));
    }

    #[test]
    fn test_is_string() {
        assert!(is_string(&json!("10:00")));
        assert!(!is_string(&json!(10)));
    }

    #[test]
    fn test_whole_number_predicates() {
        assert!(is_whole(3.0));
        assert!(!is_whole(3.1));
        assert!(!is_whole(f64::NAN));
        assert!(!is_whole(f64::INFINITY));
        assert!(is_non_negative_whole(0.0));
        assert!(!is_non_negative_whole(-4.0));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(0, 2), "00");
        assert_eq!(pad(5, 3), "005");
        assert_eq!(pad(59, 2), "59");
        assert_eq!(pad(999, 3), "999");
        assert_eq!(pad(12345, 3), "12345");
        assert_eq!(pad(8, 0), "8");
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(&json!(-12)), "-12");
        assert_eq!(describe_value(&json!(1.5)), "1.5");
        assert_eq!(describe_value(&json!("two")), "two");
        assert_eq!(describe_value(&json!(true)), "true");
    }

    #[test]
    fn test_describe_kind() {
        assert_eq!(describe_kind(&json!("x")), "string");
        assert_eq!(describe_kind(&json!([])), "array");
        assert_eq!(describe_kind(&json!(false)), "boolean");
    }
}
