//! Split prose into bounded-length text chunks for speech synthesis.
//!
//! The pipeline normalizes dashes and whitespace, splits paragraphs and
//! sentences, and breaks sentences over `max_len` characters on commas,
//! then subordinating words, then a length-bounded fallback. Every chunk
//! carries the rule that produced it.

pub mod config;
pub mod error;
pub mod output;
pub mod text;

pub use config::ChunkerConfig;
pub use error::{ConfigError, Result};
pub use text::{Chunk, Chunker, RuleTag, chunk_text};
