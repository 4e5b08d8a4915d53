//! Keyword-driven emotion tagging

use crate::nlp::KeywordTable;
use crate::types::{EmotionClass, EmotionMatch};
use crate::Result;

/// Default emotion keywords in priority order
pub const DEFAULT_EMOTION_KEYWORDS: &[(EmotionClass, &[&str])] = &[
    (
        EmotionClass::Anxiety,
        &["anxious", "worried", "nervous", "scared", "fear", "panic", "stress"],
    ),
    (
        EmotionClass::Depression,
        &["sad", "depressed", "hopeless", "worthless", "empty", "tired", "exhausted"],
    ),
    (
        EmotionClass::Anger,
        &["angry", "mad", "furious", "irritated", "frustrated", "hate"],
    ),
    (
        EmotionClass::Happiness,
        &["happy", "joy", "excited", "pleased", "content", "grateful"],
    ),
    (
        EmotionClass::Loneliness,
        &["alone", "lonely", "isolated", "abandoned", "left out"],
    ),
    (
        EmotionClass::Suicidal,
        &["suicide", "kill myself", "end it all", "want to die", "better off dead"],
    ),
];

/// Tags normalized text with the emotion whose keywords hit most often
///
/// Matching is by substring, so "panicking" counts for "panic". Ties go to the
/// category listed first; no hits at all gives [`EmotionClass::Neutral`].
#[derive(Debug, Clone)]
pub struct EmotionTagger {
    table: KeywordTable<EmotionClass>,
}

impl EmotionTagger {
    /// Tagger over [`DEFAULT_EMOTION_KEYWORDS`]
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(KeywordTable::from_static(DEFAULT_EMOTION_KEYWORDS)?))
    }

    /// Tagger over a custom table
    pub fn new(table: KeywordTable<EmotionClass>) -> Self {
        Self { table }
    }

    /// The keyword table in use
    pub fn table(&self) -> &KeywordTable<EmotionClass> {
        &self.table
    }

    /// Dominant emotion of normalized text
    pub fn tag(&self, normalized: &str) -> EmotionClass {
        self.table.best_match(normalized).unwrap_or_default()
    }

    /// Matched keywords per emotion, in priority order
    pub fn matches(&self, normalized: &str) -> Vec<EmotionMatch> {
        self.table
            .matches(normalized)
            .into_iter()
            .map(|(emotion, keywords)| EmotionMatch { emotion, keywords })
            .collect()
    }
}
