//! Long-sentence decomposition: comma split, then subordinator split, then
//! a length-bounded fallback.

use super::Segment;
use super::rule::{BaseRule, FallbackCut, RuleTag};
use crate::config::{DEFAULT_CONJ_SPLIT_RATIO, DEFAULT_MAX_LEN, SUBORDINATORS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Conjunctions the fallback may cut before, in order of preference.
const CONJUNCTIONS: &[&[char]] = &[&[' ', 'a', 'n', 'd', ' '], &[' ', 'o', 'r', ' ']];

static DEFAULT_SUBORDINATORS: Lazy<Regex> = Lazy::new(|| {
    subordinator_regex(SUBORDINATORS.iter().copied())
        .expect("valid subordinator regex")
        .expect("non-empty subordinator list")
});

/// Build a case-insensitive whole-word matcher; `None` for an empty word list.
fn subordinator_regex<I, S>(words: I) -> Result<Option<Regex>, regex::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let alternatives: Vec<String> = words
        .into_iter()
        .map(|w| regex::escape(w.as_ref()))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&pattern).map(Some)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Splits sentences longer than `max_len` characters into tagged segments.
#[derive(Debug, Clone)]
pub struct Decomposer {
    max_len: usize,
    conj_split_ratio: f64,
    subordinators: Option<Regex>,
}

impl Default for Decomposer {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            conj_split_ratio: DEFAULT_CONJ_SPLIT_RATIO,
            subordinators: Some(DEFAULT_SUBORDINATORS.clone()),
        }
    }
}

impl Decomposer {
    /// Create a decomposer with custom subordinators.
    ///
    /// `max_len` is raised to at least 1 and the ratio clamped to `[0, 1]`,
    /// the same range `ChunkerConfig::validate` accepts; 1 disables
    /// conjunction cuts.
    pub fn new<I, S>(
        max_len: usize,
        conj_split_ratio: f64,
        subordinators: I,
    ) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            max_len: max_len.max(1),
            conj_split_ratio: conj_split_ratio.clamp(0.0, 1.0),
            subordinators: subordinator_regex(subordinators)?,
        })
    }

    /// Default rule-sets with a different length budget.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
            ..Self::default()
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether `text` is over the length budget.
    pub fn is_too_long(&self, text: &str) -> bool {
        char_len(text) > self.max_len
    }

    /// Split an over-long sentence on commas, handing still-long pieces to
    /// the subordinator splitter. Without commas, go straight there.
    pub fn decompose(&self, sentence: &str) -> Vec<Segment> {
        if !sentence.contains(',') {
            log::trace!("no commas, splitting by subordinators");
            return self.split_by_subordinators(sentence);
        }

        let mut segments = Vec::new();
        for piece in sentence
            .split_inclusive(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            if self.is_too_long(piece) {
                segments.extend(self.split_by_subordinators(piece));
            } else {
                segments.push(Segment::new(piece, RuleTag::COMMA_FIRST));
            }
        }
        segments
    }

    /// Byte offsets where a subordinator starts a whole word, ascending.
    fn subordinator_starts(&self, text: &str) -> Vec<usize> {
        let Some(re) = &self.subordinators else {
            return Vec::new();
        };
        let mut starts: Vec<usize> = re.find_iter(text).map(|m| m.start()).collect();
        starts.dedup();
        starts
    }

    /// Split text into clauses, each starting at a subordinator.
    fn split_by_subordinators(&self, text: &str) -> Vec<Segment> {
        let mut starts = self.subordinator_starts(text);
        if starts.is_empty() {
            log::trace!("no subordinators, using length fallback");
            return self.fallback_split(text, BaseRule::LengthFallback);
        }

        // Keep the clause leading up to the first subordinator
        if starts[0] != 0 {
            starts.insert(0, 0);
        }

        let mut segments = Vec::new();
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            let clause = text[start..end].trim();
            if clause.is_empty() {
                continue;
            }

            if self.is_too_long(clause) {
                segments.extend(self.fallback_split(clause, BaseRule::ClauseSubordinator));
            } else {
                segments.push(Segment::new(clause, RuleTag::CLAUSE_SUBORDINATOR));
            }
        }
        segments
    }

    /// Last resort: walk the text in `max_len` windows, cutting after the
    /// first comma, before a late conjunction, or hard at the window end.
    fn fallback_split(&self, text: &str, base: BaseRule) -> Vec<Segment> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut segments = Vec::new();
        let mut start = 0;

        while start < len {
            while start < len && chars[start].is_whitespace() {
                start += 1;
            }
            if start >= len {
                break;
            }

            if len - start <= self.max_len {
                push_span(&mut segments, &chars[start..], base, FallbackCut::Tail);
                break;
            }

            let window_end = (start + self.max_len).min(len);
            let window = &chars[start..window_end];

            let (cut_at, cut) = if let Some(pos) = window.iter().position(|&c| c == ',') {
                (start + pos + 1, FallbackCut::CommaSplit)
            } else if let Some(pos) = self.conjunction_cut(window) {
                (start + pos, FallbackCut::ConjSplit)
            } else {
                (window_end, FallbackCut::LengthLimit)
            };

            push_span(&mut segments, &chars[start..cut_at], base, cut);
            start = cut_at;
        }

        segments
    }

    /// Offset of the last conjunction in the window, if it lies past the ratio.
    fn conjunction_cut(&self, window: &[char]) -> Option<usize> {
        let min_pos = window.len() as f64 * self.conj_split_ratio;
        CONJUNCTIONS.iter().find_map(|&conj| {
            window
                .windows(conj.len())
                .rposition(|w| w == conj)
                .filter(|&pos| pos as f64 > min_pos)
        })
    }
}

fn push_span(segments: &mut Vec<Segment>, span: &[char], base: BaseRule, cut: FallbackCut) {
    let text: String = span.iter().collect();
    let text = text.trim();
    if !text.is_empty() {
        segments.push(Segment::new(text, RuleTag::fallback(base, cut)));
    }
}
