//! Classify [Value]s by kind.
//!
//! Every guard is total: it inspects the variant and never fails.

use crate::Value;

/// Returns `true` if the value is an ordered sequence.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns `true` if the value can be called.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Returns `true` if the value is a non-null, non-callable reference.
pub fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_) | Value::Pattern(_))
}

/// Returns `true` if the value is a plain keyed object.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` if the value is a pattern matcher.
pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::Pattern(_))
}

/// Returns `true` if the value is text.
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}
