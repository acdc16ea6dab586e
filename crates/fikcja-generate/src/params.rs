//! JSON parameter access shared by the generators.

use serde_json::{Map, Value};

use crate::errors::GenerationError;

/// Accepts `None` or a JSON object; anything else is an error.
pub fn params_object<'a>(
    params: Option<&'a Value>,
    ctx: &'static str,
) -> Result<Option<&'a Map<String, Value>>, GenerationError> {
    match params {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(GenerationError::InvalidParams(format!(
            "{ctx}: params must be a JSON object"
        ))),
    }
}

pub fn get_i64(map: Option<&Map<String, Value>>, key: &str) -> Option<i64> {
    map.and_then(|map| map.get(key)).and_then(|value| value.as_i64())
}

pub fn get_str<'a>(map: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a str> {
    map.and_then(|map| map.get(key)).and_then(|value| value.as_str())
}

pub fn get_bool(map: Option<&Map<String, Value>>, key: &str) -> Option<bool> {
    map.and_then(|map| map.get(key)).and_then(|value| value.as_bool())
}
