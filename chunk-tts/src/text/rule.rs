//! Provenance tags recording which splitting rule produced a chunk.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The splitting strategy a span was produced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseRule {
    /// A whole sentence that fit the length budget.
    Sentence,
    /// A comma-delimited segment of an over-long sentence.
    CommaFirst,
    /// A clause starting at a subordinating word.
    ClauseSubordinator,
    /// Length-bounded splitting of text with no subordinators.
    LengthFallback,
}

impl BaseRule {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseRule::Sentence => "sentence",
            BaseRule::CommaFirst => "comma_first",
            BaseRule::ClauseSubordinator => "clause_subordinator",
            BaseRule::LengthFallback => "length_fallback",
        }
    }
}

/// How the length-bounded fallback cut a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackCut {
    /// The remainder fit within the budget.
    Tail,
    /// Cut just after the first comma in the window.
    CommaSplit,
    /// Cut before the last " and " / " or " in the window.
    ConjSplit,
    /// Hard cut at the window end.
    LengthLimit,
}

impl FallbackCut {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackCut::Tail => "tail",
            FallbackCut::CommaSplit => "comma_split",
            FallbackCut::ConjSplit => "conj_split",
            FallbackCut::LengthLimit => "length_limit",
        }
    }
}

/// A rule tag such as `sentence` or `length_fallback+comma_split`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTag {
    pub base: BaseRule,
    pub cut: Option<FallbackCut>,
}

impl RuleTag {
    pub const SENTENCE: RuleTag = RuleTag::plain(BaseRule::Sentence);
    pub const COMMA_FIRST: RuleTag = RuleTag::plain(BaseRule::CommaFirst);
    pub const CLAUSE_SUBORDINATOR: RuleTag = RuleTag::plain(BaseRule::ClauseSubordinator);

    pub const fn plain(base: BaseRule) -> Self {
        Self { base, cut: None }
    }

    pub const fn fallback(base: BaseRule, cut: FallbackCut) -> Self {
        Self {
            base,
            cut: Some(cut),
        }
    }

    /// Whether this chunk came out of the length-bounded fallback.
    pub fn is_fallback(&self) -> bool {
        self.cut.is_some()
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cut {
            Some(cut) => write!(f, "{}+{}", self.base.as_str(), cut.as_str()),
            None => f.write_str(self.base.as_str()),
        }
    }
}

/// Error returned when a string is not a known rule tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule tag: {0}")]
pub struct ParseRuleTagError(String);

impl FromStr for RuleTag {
    type Err = ParseRuleTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseRuleTagError(s.to_string());
        let (base, cut) = match s.split_once('+') {
            Some((base, cut)) => (base, Some(cut)),
            None => (s, None),
        };

        let base = match base {
            "sentence" => BaseRule::Sentence,
            "comma_first" => BaseRule::CommaFirst,
            "clause_subordinator" => BaseRule::ClauseSubordinator,
            "length_fallback" => BaseRule::LengthFallback,
            _ => return Err(unknown()),
        };

        let cut = match cut {
            None => None,
            Some("tail") => Some(FallbackCut::Tail),
            Some("comma_split") => Some(FallbackCut::CommaSplit),
            Some("conj_split") => Some(FallbackCut::ConjSplit),
            Some("length_limit") => Some(FallbackCut::LengthLimit),
            Some(_) => return Err(unknown()),
        };

        // length_fallback never appears without a cut
        if base == BaseRule::LengthFallback && cut.is_none() {
            return Err(unknown());
        }

        Ok(RuleTag { base, cut })
    }
}

impl Serialize for RuleTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RuleTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
