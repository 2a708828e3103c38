//! Text chunking for TTS processing.

use super::decomposer::Decomposer;
use super::normalizer::Normalizer;
use super::splitter::{split_into_paragraphs, split_into_sentences};
use super::{Chunk, RuleTag, Segment};
use crate::config::ChunkerConfig;
use crate::error::Result;

/// Split text into TTS-friendly chunks using the default word lists.
///
/// # Arguments
/// * `text` - The raw text to chunk
/// * `max_len` - Maximum chunk length in characters (default: 200)
///
/// # Returns
/// Chunks in source order, each tagged with the rule that produced it.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<Chunk> {
    Chunker::with_max_len(max_len).chunk(text)
}

/// The full pipeline: normalize, split paragraphs and sentences, decompose
/// long sentences, assemble chunks.
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    normalizer: Normalizer,
    decomposer: Decomposer,
}

impl Chunker {
    /// Build a chunker from a config's budget and word lists.
    pub fn new(config: &ChunkerConfig) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(&config.discourse_markers),
            decomposer: Decomposer::new(
                config.max_len,
                config.conj_split_ratio,
                &config.subordinators,
            )?,
        })
    }

    /// Default word lists with a different length budget.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            normalizer: Normalizer::default(),
            decomposer: Decomposer::with_max_len(max_len),
        }
    }

    pub fn max_len(&self) -> usize {
        self.decomposer.max_len()
    }

    /// Chunk raw text. Never fails; blank input gives no chunks.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let normalized = self.normalizer.normalize(text);
        let paragraphs = split_into_paragraphs(&normalized);

        let segments: Vec<Segment> = paragraphs
            .iter()
            .flat_map(|paragraph| self.process_paragraph(paragraph))
            .collect();

        let chunks = assemble(segments);
        log::debug!(
            "Chunked {} paragraph(s) into {} chunk(s) (max_len {})",
            paragraphs.len(),
            chunks.len(),
            self.max_len()
        );
        chunks
    }

    /// Split one paragraph into tagged segments. Sentences within budget are
    /// kept whole; longer ones are decomposed.
    pub fn process_paragraph(&self, paragraph: &str) -> Vec<Segment> {
        let mut segments = Vec::new();

        for sentence in split_into_sentences(paragraph) {
            if self.decomposer.is_too_long(&sentence) {
                log::trace!(
                    "Decomposing {}-char sentence",
                    sentence.chars().count()
                );
                segments.extend(self.decomposer.decompose(&sentence));
            } else {
                segments.push(Segment::new(sentence, RuleTag::SENTENCE));
            }
        }

        segments
    }
}

/// Turn raw segments into chunks: trim, drop blanks, record lengths.
pub fn assemble(segments: impl IntoIterator<Item = Segment>) -> Vec<Chunk> {
    segments
        .into_iter()
        .filter_map(|segment| Chunk::new(&segment.text, segment.rule))
        .collect()
}
