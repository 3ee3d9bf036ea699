//! Serde helpers that keep "field absent" apart from "field is null".
//!
//! Both are used together with `#[serde(default)]`, so a missing key never
//! reaches them and stays `None`.

use serde::{Deserialize, Deserializer};

/// A present key becomes `Some(value)`, where `value` may itself be `None`
/// for an explicit `null`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A present key must carry a value; `null` is an error.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
