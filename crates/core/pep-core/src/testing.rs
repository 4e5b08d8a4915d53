//! Fixtures for tests and benches

use crate::catalog::ReplyCatalog;
use crate::types::{AnalysisResult, ConversationTurn, EmotionClass, SentimentClass};
use crate::Result;

/// Intents document shaped like the chatbot's training data
pub const SAMPLE_INTENTS_JSON: &str = r#"{
    "intents": [
        {
            "tag": "greeting",
            "patterns": ["Hi", "Hello", "How are you?"],
            "responses": ["Hello! How are you feeling today?", "Hi there. What's on your mind?"]
        },
        {
            "tag": "help_request",
            "patterns": ["I need help", "I'm struggling"],
            "responses": ["I'm here for you. Can you tell me more about what's going on?"]
        },
        {
            "tag": "gratitude",
            "patterns": ["Thank you", "Thanks"],
            "responses": ["You're welcome. I'm glad I could help."]
        },
        {
            "tag": "meditation",
            "patterns": ["Help me relax", "Breathing exercise"],
            "responses": ["Let's try a breathing exercise: breathe in for four counts, hold, and breathe out slowly."]
        },
        {
            "tag": "sleep",
            "patterns": ["I can't sleep"],
            "responses": ["A steady bedtime routine can help. Would you like some tips?"]
        },
        {
            "tag": "general",
            "patterns": ["Let's talk"],
            "responses": ["I'm listening.", "Tell me more."]
        }
    ]
}"#;

/// Catalog parsed from [`SAMPLE_INTENTS_JSON`]
pub fn sample_catalog() -> Result<ReplyCatalog> {
    ReplyCatalog::from_json(SAMPLE_INTENTS_JSON)
}

/// Analysis with only the fields the personalizer reads filled in
pub fn analysis_with(
    sentiment: SentimentClass,
    emotion: EmotionClass,
    confidence: f32,
) -> AnalysisResult {
    let compound = match sentiment {
        SentimentClass::Negative => -confidence / 100.0,
        SentimentClass::Positive => confidence / 100.0,
        SentimentClass::Neutral => 0.0,
    };
    AnalysisResult {
        raw_text: String::new(),
        normalized_text: String::new(),
        sentiment,
        emotion,
        compound_score: compound,
        confidence,
        scores: Default::default(),
        polarity: 0.0,
        subjectivity: 0.0,
        emotion_keywords: Vec::new(),
    }
}

/// User turn with the given labels and 50% confidence
pub fn user_turn(sentiment: SentimentClass, emotion: EmotionClass) -> ConversationTurn {
    ConversationTurn::user(&analysis_with(sentiment, emotion, 50.0), "general")
}

/// Bot turn with the given text
pub fn bot_turn(text: &str) -> ConversationTurn {
    ConversationTurn::bot(text, "general")
}
