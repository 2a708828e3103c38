//! Dash and whitespace normalization for TTS processing.

use super::splitter::PARAGRAPH_BREAK;
use crate::config::DISCOURSE_MARKERS;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;

/// Characters treated as dashes: hyphen, en dash, em dash.
const DASHES: &[char] = &['-', '\u{2013}', '\u{2014}'];

/// A dash, a run of non-dash characters, another dash.
static BRACKETED_ASIDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[-\u{2013}\u{2014}]([^\u{2013}\u{2014}\n]*?)[-\u{2013}\u{2014}]")
        .expect("valid bracketed aside regex")
});

static WORD_DASH_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new("\\b([A-Za-z]+)[-\u{2013}\u{2014}]([A-Za-z]+)\\b").expect("valid word dash regex")
});

static SPACE_BEFORE_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+,").expect("valid comma spacing regex"));

static SPACE_AFTER_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*").expect("valid comma spacing regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::default);

/// Normalize text with the default discourse markers.
pub fn normalize_for_tts(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Rewrites dash-like punctuation into commas or hyphens and tidies whitespace.
#[derive(Debug, Clone)]
pub struct Normalizer {
    discourse_markers: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DISCOURSE_MARKERS.iter().copied())
    }
}

impl Normalizer {
    /// Create a normalizer that treats `markers` (case-insensitive) as clause-break words.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            discourse_markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Normalize text for TTS.
    ///
    /// Passes, in order:
    /// - `-some words-` asides become `, some words, `
    /// - `Word-however` becomes `Word, however` for discourse markers
    /// - remaining dashes between alphanumerics stay hyphens, others become commas
    /// - whitespace is collapsed within each paragraph; blank-line breaks survive
    pub fn normalize(&self, text: &str) -> String {
        let text = rewrite_bracketed_asides(text);
        let text = self.rewrite_discourse_dashes(&text);
        let text = reclassify_dashes(&text);
        normalize_whitespace(&text)
    }

    fn rewrite_discourse_dashes(&self, text: &str) -> String {
        WORD_DASH_WORD
            .replace_all(text, |caps: &Captures| {
                let (left, right) = (&caps[1], &caps[2]);
                if self.discourse_markers.contains(&right.to_lowercase()) {
                    format!("{left}, {right}")
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

fn rewrite_bracketed_asides(text: &str) -> String {
    BRACKETED_ASIDE
        .replace_all(text, |caps: &Captures| {
            let inner = caps[1].trim();
            // Single-word spans are compounds like "sweet-tart-ish"
            if inner.contains(' ') {
                format!(", {inner}, ")
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// What the last emitted character was, as far as dash handling cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    AfterSpace,
    AfterComma,
}

impl ScanState {
    fn after(c: char) -> Self {
        match c {
            ' ' => ScanState::AfterSpace,
            ',' => ScanState::AfterComma,
            _ => ScanState::Normal,
        }
    }
}

/// Keep dashes flanked by alphanumerics as hyphens; turn the rest into `, `.
fn reclassify_dashes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut state = ScanState::Normal;

    for (i, &c) in chars.iter().enumerate() {
        if !DASHES.contains(&c) {
            out.push(c);
            state = ScanState::after(c);
            continue;
        }

        let prev = if i > 0 { chars[i - 1] } else { ' ' };
        let next = chars.get(i + 1).copied().unwrap_or(' ');

        if prev.is_alphanumeric() && next.is_alphanumeric() {
            out.push('-');
            state = ScanState::Normal;
            continue;
        }

        match state {
            ScanState::AfterSpace => {
                out.pop();
                out.push_str(", ");
                state = ScanState::AfterSpace;
            }
            ScanState::AfterComma => {
                if next != ' ' {
                    out.push(' ');
                    state = ScanState::AfterSpace;
                }
            }
            ScanState::Normal => {
                out.push_str(", ");
                state = ScanState::AfterSpace;
            }
        }
    }

    out
}

/// Collapse whitespace and fix comma spacing inside each paragraph.
fn normalize_whitespace(text: &str) -> String {
    PARAGRAPH_BREAK
        .split(text)
        .map(collapse_paragraph)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collapse_paragraph(text: &str) -> String {
    let text = SPACE_BEFORE_COMMA.replace_all(text, ",");
    let text = SPACE_AFTER_COMMA.replace_all(&text, ", ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
