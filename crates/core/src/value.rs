//! Input shapes accepted by the integer list codec.
//!
//! A field can be handed a stored string, a list that a caller has just assigned, a single
//! number, or nothing at all. [`FieldValue`] names each of those shapes so the codec can
//! dispatch on them explicitly.

use crate::{CodecError, CodecResult};

/// A single loosely typed value that may be convertible to an integer.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Converts the scalar to an integer.
    ///
    /// - `Int` is returned as is.
    /// - `Bool` becomes `0` or `1`.
    /// - `Float` is truncated toward zero; NaN, infinities and values outside the `i64`
    ///   range are rejected.
    /// - `Text` is trimmed of surrounding whitespace and parsed as a base-10 integer with an
    ///   optional sign.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLiteral`] if the value has no integer meaning.
    pub fn to_integer(&self) -> CodecResult<i64> {
        match self {
            Scalar::Int(n) => Ok(*n),
            Scalar::Bool(b) => Ok(i64::from(*b)),
            Scalar::Float(f) => float_to_integer(*f),
            Scalar::Text(s) => parse_integer_token(s),
        }
    }
}

// 2^63 is exactly representable; i64::MAX is not, so the upper bound is exclusive.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn float_to_integer(f: f64) -> CodecResult<i64> {
    let truncated = f.trunc();
    if !truncated.is_finite() || truncated < -I64_UPPER_BOUND || truncated >= I64_UPPER_BOUND {
        return Err(CodecError::invalid_literal(f.to_string()));
    }
    Ok(truncated as i64)
}

/// Parses one delimited token as a base-10 integer.
///
/// Surrounding whitespace is ignored. The error carries the token as it was given.
pub(crate) fn parse_integer_token(token: &str) -> CodecResult<i64> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| CodecError::invalid_literal(token))
}

/// Any of the value shapes a list field can receive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value at all. Treated as the empty list.
    #[default]
    Empty,
    /// An already materialised list whose elements still need integer conversion.
    Sequence(Vec<Scalar>),
    /// A pre-formatted delimited string, as read from storage.
    Text(String),
    /// A lone value that is not a list or a string.
    Scalar(Scalar),
}

impl FieldValue {
    /// Builds a sequence value from integers.
    pub fn integers<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        FieldValue::Sequence(values.into_iter().map(Scalar::Int).collect())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<Vec<i64>> for FieldValue {
    fn from(values: Vec<i64>) -> Self {
        FieldValue::integers(values)
    }
}

impl From<&[i64]> for FieldValue {
    fn from(values: &[i64]) -> Self {
        FieldValue::integers(values.iter().copied())
    }
}

impl From<Vec<Scalar>> for FieldValue {
    fn from(values: Vec<Scalar>) -> Self {
        FieldValue::Sequence(values)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(Scalar::Bool(value))
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Empty, Into::into)
    }
}
