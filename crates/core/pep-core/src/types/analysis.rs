//! Per-text analysis output

use super::{EmotionClass, SentimentClass};
use serde::{Deserialize, Serialize};

/// Breakdown produced by the compound (VADER-style) scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Share of negative intensity (0.0 to 1.0)
    pub neg: f32,
    /// Share of neutral tokens (0.0 to 1.0)
    pub neu: f32,
    /// Share of positive intensity (0.0 to 1.0)
    pub pos: f32,
    /// Normalized aggregate polarity (-1.0 to 1.0)
    pub compound: f32,
}

/// Output of the polarity/subjectivity scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Subjectivity {
    /// Mean polarity of assessed words (-1.0 to 1.0)
    pub polarity: f32,
    /// Mean subjectivity of assessed words (0.0 to 1.0)
    pub subjectivity: f32,
}

/// Keywords of one emotion category found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionMatch {
    /// Category the keywords belong to
    pub emotion: EmotionClass,
    /// Matched keywords in table order
    pub keywords: Vec<String>,
}

/// Result of analyzing one piece of text
///
/// Created fresh by `SentimentEngine::analyze` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Text as received
    pub raw_text: String,
    /// Lowercased letters-and-spaces form every scorer ran on
    pub normalized_text: String,
    /// Discrete sentiment from the compound score
    pub sentiment: SentimentClass,
    /// Keyword-tagged emotion
    pub emotion: EmotionClass,
    /// Compound score (-1.0 to 1.0)
    pub compound_score: f32,
    /// Magnitude-based confidence (0.0 to 100.0)
    pub confidence: f32,
    /// Full compound scorer breakdown
    pub scores: PolarityScores,
    /// Polarity from the subjectivity scorer (-1.0 to 1.0)
    pub polarity: f32,
    /// Subjectivity from the subjectivity scorer (0.0 to 1.0)
    pub subjectivity: f32,
    /// Emotion keywords that fired, in priority order
    pub emotion_keywords: Vec<EmotionMatch>,
}

impl AnalysisResult {
    /// Human-readable one or two line summary
    ///
    /// ```text
    /// Sentiment: Negative (Confidence: 75.0%)
    /// Detected Emotion: Depression
    /// ```
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Sentiment: {} (Confidence: {:.1}%)",
            self.sentiment.title(),
            self.confidence
        );
        if self.emotion != EmotionClass::Neutral {
            summary.push_str(&format!("\nDetected Emotion: {}", self.emotion.title()));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::analysis_with;

    #[test]
    fn test_summary_without_emotion() {
        let analysis = analysis_with(SentimentClass::Positive, EmotionClass::Neutral, 75.0);
        assert_eq!(analysis.summary(), "Sentiment: Positive (Confidence: 75.0%)");
    }

    #[test]
    fn test_summary_with_emotion() {
        let analysis = analysis_with(SentimentClass::Negative, EmotionClass::Depression, 76.88);
        assert_eq!(
            analysis.summary(),
            "Sentiment: Negative (Confidence: 76.9%)\nDetected Emotion: Depression"
        );
    }

    #[test]
    fn test_serializes_snake_case_classes() {
        let analysis = analysis_with(SentimentClass::Negative, EmotionClass::Loneliness, 40.0);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["sentiment"], "negative");
        assert_eq!(json["emotion"], "loneliness");
        assert_eq!(json["scores"]["compound"], 0.0);
    }
}
