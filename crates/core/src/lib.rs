//! # EHR Core
//!
//! Storage field support for the EHR record system.
//!
//! This crate turns an ordered list of integers into a single delimited string for a
//! fixed-width text column and back again:
//! - [`IntegerListCodec`]: the pure encode/decode pair, configurable by separator
//! - [`CharColumn`]: the storage adapter that calls the codec around reads and writes and
//!   enforces the column's maximum length
//! - [`FieldConfig`]: per-field separator and length settings
//! - [`delimited`]: a serde adapter for records that embed a list field
//!
//! **No storage engine**: schema management, queries and transactions belong to whatever
//! database layer drives [`CharColumn`].
//!
//! ```rust
//! use ehr_core::{CharColumn, FieldValue};
//!
//! let column: CharColumn = CharColumn::default();
//! let stored = column.prep_value(&FieldValue::integers([1, 2, 3]))?;
//! assert_eq!(stored, "1,2,3");
//! assert_eq!(column.from_db_value(Some(&*stored))?, [1, 2, 3]);
//! # Ok::<(), ehr_core::CodecError>(())
//! ```

pub mod codec;
pub mod column;
pub mod config;
pub mod constants;
pub mod delimited;
pub mod error;
pub mod integer_list;
pub mod value;

pub use codec::{IntegerListCodec, StorageCodec};
pub use column::CharColumn;
pub use config::FieldConfig;
pub use ehr_types::{ColumnWidth, Separator};
pub use error::{CodecError, CodecResult};
pub use integer_list::IntegerList;
pub use value::{FieldValue, Scalar};
