//! Configuration for word frequency analysis.
//!
//! Configuration is layered: [`AnalysisConfig::default`], optionally replaced
//! by a JSON file ([`AnalysisConfig::from_file`]), then adjusted by command
//! line flags. Missing JSON fields fall back to their defaults.
//!
//! ```
//! use wordtally::config::{AnalysisConfig, Decoding};
//! use wordtally::ranking::TieBreak;
//!
//! let config: AnalysisConfig =
//!     serde_json::from_str(r#"{ "top_k": 5, "tie_break": "alphabetical" }"#).unwrap();
//!
//! assert_eq!(config.top_k, 5);
//! assert_eq!(config.tie_break, TieBreak::Alphabetical);
//! assert_eq!(config.decoding, Decoding::Strict);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordTallyError};
use crate::ranking::{DEFAULT_TOP_K, TieBreak};

/// Default destination of the saved report.
pub const DEFAULT_REPORT_PATH: &str = "report.txt";

/// How source bytes are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    /// UTF-8; invalid input is a decode error
    #[default]
    Strict,
    /// UTF-8 with invalid sequences replaced by U+FFFD
    Lossy,
}

/// Configuration for a word frequency analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of entries in the ranked summary.
    pub top_k: usize,

    /// Ordering of words with equal counts.
    pub tie_break: TieBreak,

    /// Source decoding policy.
    pub decoding: Decoding,

    /// Where the file report is written when saving is requested.
    pub report_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            tie_break: TieBreak::FirstAppearance,
            decoding: Decoding::Strict,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl AnalysisConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WordTallyError::from_read(e, path))?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(WordTallyError::config("top_k must be at least 1"));
        }
        if self.report_path.as_os_str().is_empty() {
            return Err(WordTallyError::config("report_path must not be empty"));
        }
        Ok(())
    }

    /// Set the number of ranked entries.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the decoding policy.
    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Set the report destination.
    pub fn with_report_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.report_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();

        assert_eq!(config.top_k, 10);
        assert_eq!(config.tie_break, TieBreak::FirstAppearance);
        assert_eq!(config.decoding, Decoding::Strict);
        assert_eq!(config.report_path, PathBuf::from("report.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordtally.json");
        fs::write(&path, r#"{ "top_k": 3, "decoding": "lossy" }"#).unwrap();

        let config = AnalysisConfig::from_file(&path).unwrap();

        assert_eq!(config.top_k, 3);
        assert_eq!(config.decoding, Decoding::Lossy);
        assert_eq!(config.tie_break, TieBreak::FirstAppearance);
    }

    #[test]
    fn test_from_file_rejects_zero_top_k() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordtally.json");
        fs::write(&path, r#"{ "top_k": 0 }"#).unwrap();

        assert!(matches!(
            AnalysisConfig::from_file(&path),
            Err(WordTallyError::Config(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        assert!(matches!(
            AnalysisConfig::from_file(&path),
            Err(WordTallyError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = AnalysisConfig::default()
            .with_top_k(25)
            .with_tie_break(TieBreak::Alphabetical)
            .with_decoding(Decoding::Lossy)
            .with_report_path("out/summary.txt");

        assert_eq!(config.top_k, 25);
        assert_eq!(config.tie_break, TieBreak::Alphabetical);
        assert_eq!(config.decoding, Decoding::Lossy);
        assert_eq!(config.report_path, PathBuf::from("out/summary.txt"));
    }
}
