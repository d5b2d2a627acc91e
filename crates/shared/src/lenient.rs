//! Coercing deserializers for loosely typed stored rows.
//!
//! Invalid numbers fall back to a safe default instead of failing the
//! whole document: quantity 0, servings 2, time 0, id unassigned.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_SERVINGS: u32 = 2;

fn as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

pub fn quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).filter(|v| *v >= 0.0).unwrap_or(0.0))
}

pub fn servings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value)
        .filter(|v| *v >= 1.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
        .unwrap_or(DEFAULT_SERVINGS))
}

pub fn minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value)
        .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
        .unwrap_or(0))
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(optional_id(deserializer)?.unwrap_or(0))
}

pub fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value)
        .filter(|v| *v >= 1.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64))
}

pub fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}
