//! Delimited integer list codec.
//!
//! Converts between an ordered list of integers and a single delimited string suitable for a
//! text column, and back:
//!
//! ```text
//! [1, 2, 3, 4, 5]  <->  "1,2,3,4,5"
//! ```
//!
//! Both directions accept every [`FieldValue`] shape, so the same codec can normalise a value
//! loaded from storage and a list a caller has just assigned. The codec holds no state beyond
//! its separator and never performs I/O.

use ehr_types::Separator;

use crate::value::{parse_integer_token, FieldValue};
use crate::{CodecResult, IntegerList};

/// Two-way conversion between an in-memory value and its stored text.
///
/// A storage adapter calls [`StorageCodec::to_storage`] before writing a column and
/// [`StorageCodec::from_storage`] after reading one.
pub trait StorageCodec {
    /// The decoded in-memory representation.
    type Value;

    fn to_storage(&self, value: &FieldValue) -> CodecResult<String>;

    fn from_storage(&self, value: &FieldValue) -> CodecResult<Self::Value>;
}

/// Codec for a list of integers joined by a configurable separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerListCodec {
    separator: Separator,
}

impl IntegerListCodec {
    pub fn new(separator: Separator) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// Encodes any accepted value shape into its stored string.
    ///
    /// - `Empty` encodes to `""`.
    /// - `Sequence` elements are converted to integers and joined with the separator.
    /// - `Text` is returned unchanged; it is assumed to be in delimited form already.
    /// - `Scalar` is converted to an integer and rendered in decimal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodecError::InvalidLiteral`] if a sequence element or scalar has no
    /// integer meaning.
    pub fn encode(&self, value: &FieldValue) -> CodecResult<String> {
        match value {
            FieldValue::Empty => Ok(String::new()),
            FieldValue::Sequence(items) => {
                let numbers = items
                    .iter()
                    .map(|item| item.to_integer())
                    .collect::<CodecResult<Vec<i64>>>()?;
                Ok(self.encode_integers(&numbers))
            }
            FieldValue::Text(text) => Ok(text.clone()),
            FieldValue::Scalar(scalar) => Ok(scalar.to_integer()?.to_string()),
        }
    }

    /// Joins already-typed integers with the separator.
    pub fn encode_integers(&self, numbers: &[i64]) -> String {
        numbers
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(self.separator.as_str())
    }

    /// Decodes any accepted value shape into an [`IntegerList`].
    ///
    /// - `Empty` and the empty string decode to an empty list.
    /// - Other text is split on the separator and every token parsed as an integer.
    /// - `Sequence` elements are converted to integers in order.
    /// - `Scalar` becomes a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodecError::InvalidLiteral`] on the first token or element that is not
    /// an integer. No partial result is returned.
    pub fn decode(&self, value: &FieldValue) -> CodecResult<IntegerList> {
        match value {
            FieldValue::Empty => Ok(IntegerList::default()),
            FieldValue::Text(text) => self.decode_str(text),
            FieldValue::Sequence(items) => items.iter().map(|item| item.to_integer()).collect(),
            FieldValue::Scalar(scalar) => Ok(IntegerList::new(vec![scalar.to_integer()?])),
        }
    }

    /// Splits a stored string on the separator and parses each token.
    pub fn decode_str(&self, raw: &str) -> CodecResult<IntegerList> {
        if raw.is_empty() {
            return Ok(IntegerList::default());
        }
        raw.split(self.separator.as_str())
            .map(parse_integer_token)
            .collect()
    }
}

impl StorageCodec for IntegerListCodec {
    type Value = IntegerList;

    fn to_storage(&self, value: &FieldValue) -> CodecResult<String> {
        self.encode(value)
    }

    fn from_storage(&self, value: &FieldValue) -> CodecResult<IntegerList> {
        self.decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;
    use crate::CodecError;

    fn pipe_codec() -> IntegerListCodec {
        IntegerListCodec::new(Separator::new("|").expect("valid separator"))
    }

    #[test]
    fn encodes_list_with_default_separator() {
        let codec = IntegerListCodec::default();
        let encoded = codec
            .encode(&FieldValue::integers([1, 2, 3, 4, 5]))
            .expect("encode");
        assert_eq!(encoded, "1,2,3,4,5");
    }

    #[test]
    fn decodes_list_with_default_separator() {
        let codec = IntegerListCodec::default();
        let decoded = codec.decode(&FieldValue::from("1,2,3,4,5")).expect("decode");
        assert_eq!(decoded, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_list_round_trips_through_empty_string() {
        let codec = IntegerListCodec::default();
        let encoded = codec.encode(&FieldValue::integers(Vec::new())).expect("encode");
        assert_eq!(encoded, "");
        assert!(codec.decode(&FieldValue::from("")).expect("decode").is_empty());
    }

    #[test]
    fn empty_value_is_never_an_error() {
        let codec = IntegerListCodec::default();
        assert_eq!(codec.encode(&FieldValue::Empty).expect("encode"), "");
        assert!(codec.decode(&FieldValue::Empty).expect("decode").is_empty());
    }

    #[test]
    fn round_trip_preserves_order_duplicates_and_sign() {
        let codec = IntegerListCodec::default();
        let original: Vec<i64> = vec![5, -3, 0, 5, i64::MAX, i64::MIN];
        let encoded = codec.encode_integers(&original);
        let decoded = codec.decode_str(&encoded).expect("decode");
        assert_eq!(decoded, original);
    }

    #[test]
    fn text_is_passed_through_on_encode() {
        let codec = IntegerListCodec::default();
        assert_eq!(codec.encode(&FieldValue::from("6,7,8")).expect("encode"), "6,7,8");
        // Not validated either.
        assert_eq!(codec.encode(&FieldValue::from("6,x")).expect("encode"), "6,x");
    }

    #[test]
    fn respects_configured_separator() {
        let codec = pipe_codec();
        assert_eq!(codec.decode_str("6|7|8").expect("decode"), [6, 7, 8]);
        assert_eq!(codec.encode_integers(&[6, 7, 8]), "6|7|8");
    }

    #[test]
    fn does_not_split_on_other_delimiters() {
        let err = pipe_codec().decode_str("6,7,8").expect_err("should reject");
        assert!(matches!(err, CodecError::InvalidLiteral { token } if token == "6,7,8"));
    }

    #[test]
    fn multi_character_separator() {
        let codec = IntegerListCodec::new(Separator::new(", ").expect("valid separator"));
        assert_eq!(codec.encode_integers(&[1, 2]), "1, 2");
        assert_eq!(codec.decode_str("1, 2").expect("decode"), [1, 2]);
    }

    #[test]
    fn malformed_token_fails_whole_decode() {
        let err = IntegerListCodec::default()
            .decode_str("6,x,8")
            .expect_err("should reject");
        assert!(matches!(err, CodecError::InvalidLiteral { token } if token == "x"));
    }

    #[test]
    fn trailing_separator_is_an_empty_token() {
        let err = IntegerListCodec::default()
            .decode_str("1,2,")
            .expect_err("should reject");
        assert!(matches!(err, CodecError::InvalidLiteral { token } if token.is_empty()));
    }

    #[test]
    fn scalar_is_wrapped_on_decode() {
        let decoded = IntegerListCodec::default()
            .decode(&FieldValue::from(5_i64))
            .expect("decode");
        assert_eq!(decoded, [5]);
    }

    #[test]
    fn scalar_is_validated_on_encode() {
        let codec = IntegerListCodec::default();
        assert_eq!(codec.encode(&FieldValue::from(5_i64)).expect("encode"), "5");
        assert_eq!(codec.encode(&FieldValue::from(2.5_f64)).expect("encode"), "2");

        let err = codec
            .encode(&FieldValue::Scalar(Scalar::from("five")))
            .expect_err("should reject");
        assert!(matches!(err, CodecError::InvalidLiteral { .. }));
    }

    #[test]
    fn sequence_elements_are_normalised() {
        let codec = IntegerListCodec::default();
        let value = FieldValue::Sequence(vec![
            Scalar::from("1"),
            Scalar::Int(2),
            Scalar::Float(3.0),
            Scalar::Bool(true),
        ]);
        assert_eq!(codec.decode(&value).expect("decode"), [1, 2, 3, 1]);
        assert_eq!(codec.encode(&value).expect("encode"), "1,2,3,1");
    }

    #[test]
    fn sequence_with_bad_element_fails_encode() {
        let value = FieldValue::Sequence(vec![Scalar::Int(1), Scalar::from("two")]);
        let err = IntegerListCodec::default()
            .encode(&value)
            .expect_err("should reject");
        assert!(matches!(err, CodecError::InvalidLiteral { token } if token == "two"));
    }

    #[test]
    fn codec_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntegerListCodec>();
    }
}
