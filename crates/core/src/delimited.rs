//! Serde adapter storing an [`IntegerList`] as a comma-delimited string.
//!
//! ```rust
//! use ehr_core::IntegerList;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Record {
//!     number: i64,
//!     #[serde(with = "ehr_core::delimited")]
//!     comma_separated_numbers: IntegerList,
//! }
//! ```
//!
//! A `null` or missing string deserialises to an empty list.

use serde::{Deserialize, Deserializer, Serializer};

use crate::{FieldValue, IntegerList, IntegerListCodec};

pub fn serialize<S>(list: &IntegerList, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&IntegerListCodec::default().encode_integers(list.as_slice()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<IntegerList, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    IntegerListCodec::default()
        .decode(&FieldValue::from(raw))
        .map_err(serde::de::Error::custom)
}
