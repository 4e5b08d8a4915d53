//! Sentiment scoring and classification
//!
//! Two scorers run over the same normalized text:
//! - [`VaderScorer`]: compound score plus neg/neu/pos proportions
//! - [`SubjectivityScorer`]: polarity and subjectivity of adjectives
//!
//! Only the compound score drives the discrete class and the confidence.

pub mod subjectivity;
pub mod vader;

pub use subjectivity::SubjectivityScorer;
pub use vader::VaderScorer;

use crate::config::EngineConfig;
use crate::types::{PolarityScores, SentimentClass, Subjectivity};
use crate::Result;

/// Maps a compound score onto a [`SentimentClass`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentClassifier {
    positive_threshold: f32,
    negative_threshold: f32,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(0.05, -0.05)
    }
}

impl SentimentClassifier {
    /// Classifier with explicit thresholds
    pub fn new(positive_threshold: f32, negative_threshold: f32) -> Self {
        Self {
            positive_threshold,
            negative_threshold,
        }
    }

    /// Classifier using the thresholds of a config
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.positive_threshold, config.negative_threshold)
    }

    /// Thresholds are inclusive on both sides
    pub fn classify(&self, compound: f32) -> SentimentClass {
        if compound >= self.positive_threshold {
            SentimentClass::Positive
        } else if compound <= self.negative_threshold {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }
}

/// Magnitude of the compound score as a percentage
///
/// This is how far the text is from neutral, not a calibrated probability.
pub fn confidence_from_compound(compound: f32) -> f32 {
    (compound.abs() * 100.0).min(100.0)
}

/// Scores from both strategies for one text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LexiconScores {
    /// Compound scorer output
    pub scores: PolarityScores,
    /// Polarity/subjectivity scorer output
    pub subjectivity: Subjectivity,
}

/// Runs both scoring strategies
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    vader: VaderScorer,
    subjectivity: SubjectivityScorer,
}

impl LexiconScorer {
    /// Scorer over the bundled lexicons
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(VaderScorer::builtin()?, SubjectivityScorer::new()))
    }

    /// Scorer over caller-provided strategies
    pub fn new(vader: VaderScorer, subjectivity: SubjectivityScorer) -> Self {
        Self {
            vader,
            subjectivity,
        }
    }

    /// Number of entries in the compound lexicon
    pub fn lexicon_len(&self) -> usize {
        self.vader.len()
    }

    /// Score normalized text with both strategies
    pub fn score(&self, normalized: &str) -> LexiconScores {
        LexiconScores {
            scores: self.vader.polarity_scores(normalized),
            subjectivity: self.subjectivity.score(normalized),
        }
    }
}
