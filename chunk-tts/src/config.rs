//! chunk-tts configuration: length budget and the word lists driving the splitters.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default maximum chunk length in characters.
pub const DEFAULT_MAX_LEN: usize = 200;

/// Default fraction of the fallback window a conjunction cut must lie beyond.
pub const DEFAULT_CONJ_SPLIT_RATIO: f64 = 0.3;

/// Words that usually open a subordinate clause.
pub const SUBORDINATORS: &[&str] = &[
    "when", "while", "where", "with", "before", "until", "because", "although", "though", "since",
    "after", "as", "if",
];

/// Words that, right after a dash, mark a clause break rather than a compound.
pub const DISCOURSE_MARKERS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "instead",
    "nevertheless",
    "nonetheless",
    "furthermore",
    "meanwhile",
    "particularly",
    "especially",
    "otherwise",
    "similarly",
    "consequently",
    "thus",
    "indeed",
    "additionally",
    "though",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum characters per chunk
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Minimum position of a conjunction cut, as a fraction of the window
    #[serde(default = "default_conj_split_ratio")]
    pub conj_split_ratio: f64,

    /// Clause-opening words for subordinator splitting
    #[serde(default = "default_subordinators")]
    pub subordinators: Vec<String>,

    /// Right-hand words that turn `word-word` into `word, word`
    #[serde(default = "default_discourse_markers")]
    pub discourse_markers: Vec<String>,
}

fn default_max_len() -> usize {
    DEFAULT_MAX_LEN
}

fn default_conj_split_ratio() -> f64 {
    DEFAULT_CONJ_SPLIT_RATIO
}

fn default_subordinators() -> Vec<String> {
    SUBORDINATORS.iter().map(|w| w.to_string()).collect()
}

fn default_discourse_markers() -> Vec<String> {
    DISCOURSE_MARKERS.iter().map(|w| w.to_string()).collect()
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            conj_split_ratio: default_conj_split_ratio(),
            subordinators: default_subordinators(),
            discourse_markers: default_discourse_markers(),
        }
    }
}

impl ChunkerConfig {
    /// Default config path: <config_dir>/cli-programs/chunk-tts.toml
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cli-programs")
            .join("chunk-tts.toml")
    }

    /// Load config from the default path, returning defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Load and validate config from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ChunkerConfig = toml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Return a copy with `max_len` replaced.
    pub fn with_max_len(mut self, max_len: usize) -> Result<Self> {
        self.max_len = max_len;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_len == 0 {
            return Err(ConfigError::InvalidMaxLen);
        }

        if !(0.0..=1.0).contains(&self.conj_split_ratio) {
            return Err(ConfigError::InvalidRatio(self.conj_split_ratio));
        }

        check_words("subordinators", &self.subordinators)?;
        check_words("discourse_markers", &self.discourse_markers)?;
        Ok(())
    }
}

fn check_words(list: &'static str, words: &[String]) -> Result<()> {
    match words
        .iter()
        .find(|w| w.is_empty() || !w.chars().all(char::is_alphanumeric))
    {
        Some(word) => Err(ConfigError::InvalidWord {
            list,
            word: word.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ChunkerConfig::default();
        assert_eq!(config.max_len, 200);
        assert_eq!(config.conj_split_ratio, 0.3);
        assert_eq!(config.subordinators.len(), 13);
        assert!(config.subordinators.contains(&"because".to_string()));
        assert!(config.discourse_markers.contains(&"particularly".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_path() {
        let path = ChunkerConfig::config_path();
        assert!(path.ends_with("cli-programs/chunk-tts.toml"));
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
max_len = 80
conj_split_ratio = 0.5
subordinators = ["when", "unless"]
"#;
        let config: ChunkerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_len, 80);
        assert_eq!(config.conj_split_ratio, 0.5);
        assert_eq!(config.subordinators, vec!["when", "unless"]);
        assert_eq!(config.discourse_markers.len(), DISCOURSE_MARKERS.len());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: ChunkerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ChunkerConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_len = 42").unwrap();

        let config = ChunkerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_len, 42);
    }

    #[test]
    fn test_from_file_missing() {
        let err = ChunkerConfig::from_file(Path::new("/nonexistent/chunk-tts.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_len = 0").unwrap();

        let err = ChunkerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxLen));
    }

    #[test]
    fn test_validate_ratio() {
        for ratio in [-0.1, 1.5, f64::NAN] {
            let config = ChunkerConfig {
                conj_split_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidRatio(_))
            ));
        }
    }

    #[test]
    fn test_validate_ratio_bounds_inclusive() {
        for ratio in [0.0, 1.0] {
            let config = ChunkerConfig {
                conj_split_ratio: ratio,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_words() {
        let config = ChunkerConfig {
            subordinators: vec!["even though".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWord {
                list: "subordinators",
                ..
            })
        ));
    }

    #[test]
    fn test_with_max_len() {
        let config = ChunkerConfig::default().with_max_len(60).unwrap();
        assert_eq!(config.max_len, 60);
        assert!(ChunkerConfig::default().with_max_len(0).is_err());
    }
}
