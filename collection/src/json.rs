//! Conversions between [Value] and [serde_json::Value].

use crate::{Error, Value};
use serde_json::{Number, Value as Json};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::Text(s),
            Json::Array(items) => Self::array(items),
            Json::Object(map) => Self::object(map),
        }
    }
}

impl TryFrom<&Value> for Json {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Undefined => Err(Error::Unrepresentable("undefined")),
            Value::Null => Ok(Json::Null),
            Value::Bool(b) => Ok(Json::Bool(*b)),
            Value::Number(n) => Number::from_f64(*n)
                .map(Json::Number)
                .ok_or(Error::Unrepresentable("non-finite number")),
            Value::Text(s) => Ok(Json::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Json::try_from)
                .collect::<Result<_, _>>()
                .map(Json::Array),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| Ok((key.clone(), Json::try_from(value)?)))
                .collect::<Result<_, Error>>()
                .map(Json::Object),
            Value::Function(_) => Err(Error::Unrepresentable("function")),
            Value::Pattern(_) => Err(Error::Unrepresentable("pattern")),
        }
    }
}
