//! Optional TOML settings for the CLI.
//!
//! ```toml
//! [output]
//! pretty = false
//!
//! [import]
//! delimiter = ";"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    pub output: OutputSettings,
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print result JSON
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// CSV field delimiter (single ASCII character)
    pub delimiter: char,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl ImportSettings {
    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("import.delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}

impl CliSettings {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid settings file")
    }

    /// Load settings from `path`. No path, or a path that does not exist,
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::warn!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let settings = Self::from_toml(&content).with_context(|| format!("in {}", path.display()))?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CliSettings::load(None).unwrap();
        assert!(settings.output.pretty);
        assert_eq!(settings.import.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_partial_file() {
        let settings = CliSettings::from_toml("[import]\ndelimiter = \";\"\n").unwrap();
        assert!(settings.output.pretty);
        assert_eq!(settings.import.delimiter, ';');
    }

    #[test]
    fn test_full_file() {
        let settings = CliSettings::from_toml("[output]\npretty = false\n\n[import]\ndelimiter = \"\\t\"\n").unwrap();
        assert!(!settings.output.pretty);
        assert_eq!(settings.import.delimiter_byte().unwrap(), b'\t');
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = CliSettings::load(Some(Path::new("/nonexistent/vertex-settings.toml"))).unwrap();
        assert!(settings.output.pretty);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let settings = CliSettings::from_toml("[import]\ndelimiter = \"§\"\n").unwrap();
        assert!(settings.import.delimiter_byte().is_err());
    }

    #[test]
    fn test_malformed_file() {
        assert!(CliSettings::from_toml("[output]\npretty = \"yes\"\n").is_err());
    }
}
