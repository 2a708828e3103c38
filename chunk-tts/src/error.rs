use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("max_len must be at least 1")]
    InvalidMaxLen,

    #[error("conj_split_ratio must be within [0, 1], got {0}")]
    InvalidRatio(f64),

    #[error("Failed to compile subordinator pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid {list} entry {word:?}: expected a single word")]
    InvalidWord { list: &'static str, word: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
