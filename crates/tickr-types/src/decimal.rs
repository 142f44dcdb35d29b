//! Decimal deserialisers that accept both JSON strings and JSON numbers
//!
//! The API is not consistent about quoting prices: the same field can arrive
//! as `"0.05005"` in one endpoint and `0.05005` in another. Routing numbers
//! through their textual form keeps every digit that was on the wire.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_decimal<E: Error>(self) -> Result<Decimal, E> {
        match self {
            Self::String(s) => Decimal::from_str(s.trim()).map_err(E::custom),
            Self::Number(n) => {
                let s = n.to_string();
                // Scientific notation (e.g. 5e-6) has no direct Decimal parse
                if s.contains('e') || s.contains('E') {
                    let f = n.as_f64().ok_or_else(|| E::custom("invalid number"))?;
                    Decimal::from_f64(f).ok_or_else(|| E::custom("cannot convert to decimal"))
                } else {
                    Decimal::from_str(&s).map_err(E::custom)
                }
            }
        }
    }
}

/// Deserialize a required decimal from a string or number
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_decimal()
}

/// Deserialize an optional decimal; `null` and `""` both map to `None`
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_decimal().map(Some),
    }
}
