//! Constants used throughout the EHR core crate.

pub use ehr_types::{DEFAULT_COLUMN_WIDTH, DEFAULT_SEPARATOR};

/// Environment variable overriding the field separator.
pub const SEPARATOR_ENV_VAR: &str = "EHR_FIELD_SEPARATOR";

/// Environment variable overriding the column width.
pub const MAX_LENGTH_ENV_VAR: &str = "EHR_FIELD_MAX_LENGTH";

/// Column type prefix used when rendering the database type of a field.
pub const CHAR_COLUMN_TYPE: &str = "char";
