//! Generation settings: where files go and how the keys body is indented.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = ".";
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Paths and formatting options for a generation run.
///
/// Can be embedded in a larger pipeline config; every field is optional in
/// serialized form.
///
/// ```rust
/// use stringsgen::GenerationConfig;
///
/// let config = GenerationConfig::from_json_str(r#"{ "keys_file_path": "Keys.swift" }"#)?;
/// assert_eq!(config.indent_width, 2);
/// # Ok::<(), stringsgen::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Directory receiving one `<locale>.lproj` subdirectory per locale.
    pub output_directory: PathBuf,

    /// Destination of the keys file. Required whenever the catalog is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_file_path: Option<PathBuf>,

    /// Locale whose keys populate the keys file. Falls back to the first
    /// locale of the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,

    /// Indentation unit of the keys body.
    pub indent_width: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            keys_file_path: None,
            default_locale: None,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl GenerationConfig {
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        serde_json::from_str(s).map_err(Error::Parse)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Reads a JSON config file.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.output_directory, PathBuf::from("."));
        assert_eq!(config.keys_file_path, None);
        assert_eq!(config.default_locale, None);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GenerationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_full_json() {
        let config = GenerationConfig::from_json_str(
            r#"{
                "output_directory": "./Resources",
                "keys_file_path": "Keys.swift",
                "default_locale": "en",
                "indent_width": 4
            }"#,
        )
        .unwrap();
        assert_eq!(config.output_directory, PathBuf::from("./Resources"));
        assert_eq!(config.keys_file_path, Some(PathBuf::from("Keys.swift")));
        assert_eq!(config.default_locale.as_deref(), Some("en"));
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let err = GenerationConfig::from_json_str(r#"{ "indent_width": "wide" }"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stringsgen.json");
        std::fs::write(&path, r#"{ "keys_file_path": "Keys.swift" }"#).unwrap();

        let config = GenerationConfig::read_from(&path).unwrap();
        assert_eq!(config.keys_file_path, Some(PathBuf::from("Keys.swift")));
        assert_eq!(config.output_directory, PathBuf::from("."));
    }

    #[test]
    fn test_read_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GenerationConfig::read_from(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_serialize_skips_unset_options() {
        let json = serde_json::to_string(&GenerationConfig::default()).unwrap();
        assert!(!json.contains("keys_file_path"));
        assert!(!json.contains("default_locale"));
        assert!(json.contains("\"indent_width\":2"));
    }
}
