//! Fixed-width character column backed by a [`StorageCodec`].
//!
//! The column is the storage-side collaborator of the codec: it encodes before a write,
//! decodes after a read, and is the only place the configured maximum length is enforced.

use std::collections::BTreeMap;

use crate::constants::CHAR_COLUMN_TYPE;
use crate::{CodecError, CodecResult, FieldConfig, FieldValue, IntegerListCodec, StorageCodec};

#[derive(Clone, Debug)]
pub struct CharColumn<C = IntegerListCodec> {
    config: FieldConfig,
    codec: C,
}

impl CharColumn<IntegerListCodec> {
    /// Creates a delimited integer list column from its configuration.
    pub fn new(config: FieldConfig) -> Self {
        let codec = config.codec();
        Self { config, codec }
    }
}

impl Default for CharColumn<IntegerListCodec> {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl<C: StorageCodec> CharColumn<C> {
    /// Creates a column around an arbitrary codec.
    ///
    /// Only `max_length` is taken from `config`; the codec brings its own separator.
    pub fn with_codec(config: FieldConfig, codec: C) -> Self {
        Self { config, codec }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encodes a value for writing and checks it fits the column.
    ///
    /// # Errors
    ///
    /// Returns the codec's error if the value cannot be encoded, or
    /// [`CodecError::ExceedsMaxLength`] if the encoded text is longer than `max_length`
    /// characters.
    pub fn prep_value(&self, value: &FieldValue) -> CodecResult<String> {
        let encoded = self.codec.to_storage(value)?;
        let length = encoded.chars().count();
        let max_length = self.config.max_length().get();

        if length > max_length {
            tracing::warn!(
                length,
                max_length,
                "encoded list does not fit column, rejecting write"
            );
            return Err(CodecError::ExceedsMaxLength { length, max_length });
        }

        tracing::debug!(length, "prepared list column value");
        Ok(encoded)
    }

    /// Decodes a value read back from the column. A missing value is treated as empty.
    pub fn from_db_value(&self, raw: Option<&str>) -> CodecResult<C::Value> {
        tracing::debug!(present = raw.is_some(), "loading list column value");
        self.codec.from_storage(&FieldValue::from(raw))
    }

    /// Normalises any accepted input shape to the decoded value.
    pub fn to_value(&self, value: &FieldValue) -> CodecResult<C::Value> {
        self.codec.from_storage(value)
    }

    /// Text form used when dumping a record, identical to what would be stored.
    pub fn value_to_string(&self, value: &FieldValue) -> CodecResult<String> {
        self.prep_value(value)
    }

    /// Database column type, e.g. `char(255)`.
    pub fn db_type(&self) -> String {
        format!("{CHAR_COLUMN_TYPE}({})", self.config.max_length())
    }

    /// Options needed to recreate this column, omitting defaults.
    pub fn deconstruct(&self) -> BTreeMap<&'static str, String> {
        self.config.non_default_options()
    }
}
