//! Deserialization helpers.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating JSON `null` as `T::default()`.
///
/// The API encodes empty lists as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
