#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid literal for integer: '{token}'")]
    InvalidLiteral { token: String },
    #[error("encoded value is {length} characters, exceeding the column limit of {max_length}")]
    ExceedsMaxLength { length: usize, max_length: usize },
    #[error("invalid field configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read field configuration file: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
}

impl CodecError {
    pub(crate) fn invalid_literal(token: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            token: token.into(),
        }
    }
}

impl From<ehr_types::SeparatorError> for CodecError {
    fn from(err: ehr_types::SeparatorError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl From<ehr_types::ColumnWidthError> for CodecError {
    fn from(err: ehr_types::ColumnWidthError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
