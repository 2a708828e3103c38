//! Paragraph and sentence splitting.

use once_cell::sync::Lazy;
use regex::Regex;

/// A newline, optional whitespace, and at least one more newline.
pub(crate) static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n+").expect("valid paragraph break regex"));

/// Terminal punctuation followed by whitespace.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence end regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Split text into paragraphs on blank lines.
///
/// Paragraphs are hard boundaries: nothing downstream merges or splits across them.
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a paragraph into sentences after `.`, `!` or `?` followed by whitespace.
///
/// The punctuation stays with the preceding sentence.
pub fn split_into_sentences(paragraph: &str) -> Vec<String> {
    let paragraph = WHITESPACE_RUN.replace_all(paragraph.trim(), " ");
    if paragraph.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(&paragraph) {
        // Punctuation is ASCII, so the cut is one byte into the match
        let end = m.start() + 1;
        push_trimmed(&mut sentences, &paragraph[start..end]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &paragraph[start..]);

    if sentences.is_empty() {
        vec![paragraph.into_owned()]
    } else {
        sentences
    }
}

fn push_trimmed(out: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}
