//! Conversation turns and trend summaries

use super::{AnalysisResult, Distribution, EmotionClass, Sender, SentimentClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who wrote the message
    pub sender: Sender,
    /// Raw message text
    pub text: String,
    /// Sentiment of the message
    pub sentiment: SentimentClass,
    /// Emotion of the message
    pub emotion: EmotionClass,
    /// Intent tag assigned to the message
    pub intent: String,
    /// Analysis confidence, when the turn was analyzed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// When the turn was recorded
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// Build a user turn from its analysis
    pub fn user(analysis: &AnalysisResult, intent: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: analysis.raw_text.clone(),
            sentiment: analysis.sentiment,
            emotion: analysis.emotion,
            intent: intent.into(),
            confidence: Some(analysis.confidence),
            timestamp: Utc::now(),
        }
    }

    /// Build an unanalyzed bot turn
    pub fn bot(text: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            sentiment: SentimentClass::Neutral,
            emotion: EmotionClass::Neutral,
            intent: intent.into(),
            confidence: None,
            timestamp: Utc::now(),
        }
    }
}

/// Sentiment and emotion trend over the user turns of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Count per sentiment, first-seen order
    pub sentiment_distribution: Distribution<SentimentClass>,
    /// Count per emotion, first-seen order
    pub emotion_distribution: Distribution<EmotionClass>,
    /// Most frequent sentiment (neutral when empty)
    pub dominant_sentiment: SentimentClass,
    /// Most frequent emotion (neutral when empty)
    pub dominant_emotion: EmotionClass,
    /// Number of user turns aggregated
    pub total_turns: usize,
    /// Mean confidence of the aggregated turns that carry one (0 when none)
    pub average_confidence: f32,
}

impl Default for TrendSummary {
    fn default() -> Self {
        Self {
            sentiment_distribution: Distribution::new(),
            emotion_distribution: Distribution::new(),
            dominant_sentiment: SentimentClass::Neutral,
            dominant_emotion: EmotionClass::Neutral,
            total_turns: 0,
            average_confidence: 0.0,
        }
    }
}

/// Everything produced for one user message by `SentimentEngine::respond`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    /// Personalized reply
    pub reply: String,
    /// Intent tag from the predictor
    pub intent: String,
    /// Analysis of the user message
    pub analysis: AnalysisResult,
    /// Trend over the conversation, once it is long enough
    pub trend: Option<TrendSummary>,
}
