//! Field configuration.
//!
//! A [`FieldConfig`] is resolved once (from defaults, an optional YAML file, and environment
//! values read by the caller) and then handed to each column. Nothing in this module reads
//! process environment variables directly.

use std::collections::BTreeMap;
use std::path::Path;

use ehr_types::{ColumnWidth, Separator};
use serde::{Deserialize, Serialize};

use crate::{CodecError, CodecResult, IntegerListCodec};

/// Per-field options for a delimited list column.
///
/// Serialising a config omits options that are still at their defaults, so a stored config
/// only records what was deliberately changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Separator::is_default")]
    separator: Separator,
    #[serde(default, skip_serializing_if = "ColumnWidth::is_default")]
    max_length: ColumnWidth,
}

impl FieldConfig {
    pub fn new(separator: Separator, max_length: ColumnWidth) -> Self {
        Self {
            separator,
            max_length,
        }
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    pub fn max_length(&self) -> ColumnWidth {
        self.max_length
    }

    /// Builds the codec this configuration describes.
    pub fn codec(&self) -> IntegerListCodec {
        IntegerListCodec::new(self.separator.clone())
    }

    /// Options that differ from the defaults, keyed by option name.
    pub fn non_default_options(&self) -> BTreeMap<&'static str, String> {
        let mut options = BTreeMap::new();
        if !self.separator.is_default() {
            options.insert("separator", self.separator.to_string());
        }
        if !self.max_length.is_default() {
            options.insert("max_length", self.max_length.to_string());
        }
        options
    }

    /// Parses a config from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> CodecResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(CodecError::YamlDeserialization)
    }

    /// Reads and parses a YAML config file.
    pub fn load_yaml(path: &Path) -> CodecResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(CodecError::ConfigRead)?;
        Self::from_yaml_str(&contents)
    }

    /// Renders the non-default options as YAML.
    pub fn to_yaml(&self) -> CodecResult<String> {
        serde_yaml::to_string(self).map_err(CodecError::YamlSerialization)
    }

    /// Applies optional override values, typically taken from the environment at startup.
    ///
    /// `None` and empty values leave the current setting untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] if `max_length` is not a positive integer.
    pub fn with_overrides(
        mut self,
        separator: Option<String>,
        max_length: Option<String>,
    ) -> CodecResult<Self> {
        if let Some(separator) = separator.filter(|v| !v.is_empty()) {
            self.separator = Separator::new(separator)?;
        }

        let max_length = max_length
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(max_length) = max_length {
            self.max_length = max_length.parse::<ColumnWidth>()?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_matches_column_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.separator().as_str(), ",");
        assert_eq!(config.max_length().get(), 255);
        assert!(config.non_default_options().is_empty());
    }

    #[test]
    fn yaml_omits_default_options() {
        let config = FieldConfig::new(
            Separator::new(";").expect("valid separator"),
            ColumnWidth::default(),
        );
        let yaml = config.to_yaml().expect("render yaml");
        assert!(yaml.contains("separator"));
        assert!(!yaml.contains("max_length"));

        let reparsed = FieldConfig::from_yaml_str(&yaml).expect("reparse yaml");
        assert_eq!(reparsed, config);
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        let err = FieldConfig::from_yaml_str("separator: \";\"\nwidth: 10\n")
            .expect_err("should reject unknown key");
        match err {
            CodecError::YamlDeserialization(e) => assert!(e.to_string().contains("width")),
            other => panic!("expected YamlDeserialization error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_rejects_zero_width() {
        assert!(FieldConfig::from_yaml_str("max_length: 0\n").is_err());
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(
            FieldConfig::from_yaml_str("").expect("empty yaml"),
            FieldConfig::default()
        );
    }

    #[test]
    fn load_yaml_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "separator: \"|\"\nmax_length: 64").expect("write config");

        let config = FieldConfig::load_yaml(file.path()).expect("load config");
        assert_eq!(config.separator().as_str(), "|");
        assert_eq!(config.max_length().get(), 64);
        assert_eq!(config.non_default_options().len(), 2);
    }

    #[test]
    fn load_yaml_reports_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = FieldConfig::load_yaml(&dir.path().join("missing.yaml"))
            .expect_err("should fail");
        assert!(matches!(err, CodecError::ConfigRead(_)));
    }

    #[test]
    fn overrides_replace_settings() {
        let config = FieldConfig::default()
            .with_overrides(Some("|".into()), Some(" 32 ".into()))
            .expect("valid overrides");
        assert_eq!(config.separator().as_str(), "|");
        assert_eq!(config.max_length().get(), 32);
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let config = FieldConfig::default()
            .with_overrides(Some(String::new()), Some("  ".into()))
            .expect("empty overrides");
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn invalid_width_override_is_rejected() {
        let err = FieldConfig::default()
            .with_overrides(None, Some("wide".into()))
            .expect_err("should reject");
        assert!(matches!(err, CodecError::InvalidConfig(msg) if msg.contains("wide")));
    }
}
