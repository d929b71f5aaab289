//! Deserializers for LLM-produced JSON, where keys may be present but `null`
//! or carry numbers as strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` reads as `T::default()`; any other value must parse as `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A finite number, or a string holding one (`"3.75"`, `"3.75/4.0"`).
/// Anything else is `None`.
pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .split('/')
            .next()
            .and_then(|head| head.trim().parse::<f64>().ok()),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}
