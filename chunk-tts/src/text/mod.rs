//! Text processing for TTS: normalization, splitting, and chunk assembly.

pub mod chunker;
pub mod decomposer;
pub mod normalizer;
pub mod rule;
pub mod splitter;

pub use chunker::{Chunker, chunk_text};
pub use normalizer::{Normalizer, normalize_for_tts};
pub use rule::{BaseRule, FallbackCut, RuleTag};
pub use splitter::{split_into_paragraphs, split_into_sentences};

use serde::Serialize;

/// An intermediate span with the rule that produced it, before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub rule: RuleTag,
}

impl Segment {
    pub fn new(text: impl Into<String>, rule: RuleTag) -> Self {
        Self {
            text: text.into(),
            rule,
        }
    }
}

/// A chunk of text ready for TTS processing.
///
/// Always non-empty and trimmed; `length` is its character count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    #[serde(rename = "chunk")]
    text: String,
    rule: RuleTag,
    length: usize,
}

impl Chunk {
    /// Create a chunk, or `None` if `text` is blank.
    pub fn new(text: &str, rule: RuleTag) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            rule,
            length: text.chars().count(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rule(&self) -> RuleTag {
        self.rule
    }

    /// Character count of the text.
    pub fn length(&self) -> usize {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_creation() {
        let chunk = Chunk::new("  Hello world ", RuleTag::SENTENCE).unwrap();
        assert_eq!(chunk.text(), "Hello world");
        assert_eq!(chunk.rule(), RuleTag::SENTENCE);
        assert_eq!(chunk.length(), 11);
    }

    #[test]
    fn test_chunk_blank_is_none() {
        assert!(Chunk::new("", RuleTag::SENTENCE).is_none());
        assert!(Chunk::new(" \n\t", RuleTag::COMMA_FIRST).is_none());
    }

    #[test]
    fn test_chunk_length_is_chars() {
        let chunk = Chunk::new("naïve café", RuleTag::SENTENCE).unwrap();
        assert_eq!(chunk.length(), 10);
    }

    #[test]
    fn test_chunk_json_shape() {
        let chunk = Chunk::new("Hi.", RuleTag::SENTENCE).unwrap();
        let json = serde_json::to_string(&chunk).unwrap();
        assert_eq!(json, r#"{"chunk":"Hi.","rule":"sentence","length":3}"#);
    }
}
