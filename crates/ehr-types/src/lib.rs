//! Validated configuration types shared by the EHR field crates.

/// Default separator used to join and split list tokens.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default width of the character column holding an encoded list.
pub const DEFAULT_COLUMN_WIDTH: usize = 255;

/// Errors that can occur when creating a [`Separator`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeparatorError {
    /// The separator was the empty string
    #[error("Separator cannot be empty")]
    Empty,
}

/// Errors that can occur when creating a [`ColumnWidth`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColumnWidthError {
    /// The width was zero
    #[error("Column width must be greater than zero")]
    Zero,
    /// The width could not be parsed as a number
    #[error("Column width is not a valid number: '{0}'")]
    NotANumber(String),
}

/// A list separator that is guaranteed to be non-empty.
///
/// Unlike free text, a separator is not trimmed: `" "` and `"\t"` are valid
/// separators and are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator(String);

impl Separator {
    /// Creates a new `Separator` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `Err(SeparatorError::Empty)` if the input is the empty string.
    pub fn new(input: impl Into<String>) -> Result<Self, SeparatorError> {
        let value = input.into();
        if value.is_empty() {
            return Err(SeparatorError::Empty);
        }
        Ok(Self(value))
    }

    /// Returns the separator as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the default `","` separator.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_SEPARATOR
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.to_owned())
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Separator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Separator {
    type Err = SeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for Separator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Separator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Separator::new(s).map_err(serde::de::Error::custom)
    }
}

/// Maximum number of characters a fixed-width text column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnWidth(usize);

impl ColumnWidth {
    /// Creates a new `ColumnWidth`.
    ///
    /// # Errors
    ///
    /// Returns `Err(ColumnWidthError::Zero)` if `width` is zero.
    pub fn new(width: usize) -> Result<Self, ColumnWidthError> {
        if width == 0 {
            return Err(ColumnWidthError::Zero);
        }
        Ok(Self(width))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_COLUMN_WIDTH
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self(DEFAULT_COLUMN_WIDTH)
    }
}

impl std::fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ColumnWidth {
    type Err = ColumnWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let width = trimmed
            .parse::<usize>()
            .map_err(|_| ColumnWidthError::NotANumber(trimmed.to_owned()))?;
        Self::new(width)
    }
}

impl serde::Serialize for ColumnWidth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> serde::Deserialize<'de> for ColumnWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let width = usize::deserialize(deserializer)?;
        ColumnWidth::new(width).map_err(serde::de::Error::custom)
    }
}
