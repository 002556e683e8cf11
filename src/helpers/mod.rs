//! Helper functions for front-matter coercion
//!
//! Date and URL handling shared by the collection schemas.

pub mod date;
pub mod url;

pub use date::{parse_date_string, short_date};
pub use url::Url;

use serde::de::{self, Deserialize, Deserializer};

/// `deserialize_with` helper for optional fields; pair with `#[serde(default)]`.
///
/// A missing key falls back to `None` through the default. A key that is
/// present but empty or `null` is an error.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(de::Error::custom(
            "invalid type: null, expected a value (omit the field instead)",
        )),
    }
}
