//! Intent prediction
//!
//! The engine only needs `text -> tag`. A trained classifier can be plugged in
//! through [`IntentPredictor`]; [`KeywordIntentPredictor`] is the bundled
//! keyword fallback.

use crate::nlp::{normalize, KeywordTable};
use crate::Result;

/// Tag returned when no intent keyword matches
pub const DEFAULT_INTENT: &str = "general";

/// Default intent keywords in priority order
pub const DEFAULT_INTENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "help_request",
        &["help", "support", "need", "struggling", "crisis"],
    ),
    ("greeting", &["hello", "hi", "how are you", "feeling", "doing"]),
    ("gratitude", &["thank", "thanks", "appreciate", "grateful"]),
    (
        "meditation",
        &["meditate", "breathing", "calm", "relax", "mindfulness"],
    ),
    ("sleep", &["sleep", "insomnia", "tired", "rest", "bed"]),
    ("general", &["general", "talk", "chat", "conversation"]),
];

/// Maps raw user text to an intent tag
#[cfg_attr(test, mockall::automock)]
pub trait IntentPredictor: Send + Sync {
    /// Predict the intent tag of raw text
    fn predict(&self, text: &str) -> String;
}

/// Keyword-count intent tagger
///
/// Same rule as emotion tagging: substring hits per tag, strict maximum wins,
/// ties go to the tag listed first, nothing matched gives [`DEFAULT_INTENT`].
#[derive(Debug, Clone)]
pub struct KeywordIntentPredictor {
    table: KeywordTable<&'static str>,
}

impl KeywordIntentPredictor {
    /// Predictor over [`DEFAULT_INTENT_KEYWORDS`]
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(KeywordTable::from_static(DEFAULT_INTENT_KEYWORDS)?))
    }

    /// Predictor over a custom table
    pub fn new(table: KeywordTable<&'static str>) -> Self {
        Self { table }
    }

    /// The keyword table in use
    pub fn table(&self) -> &KeywordTable<&'static str> {
        &self.table
    }
}

impl IntentPredictor for KeywordIntentPredictor {
    fn predict(&self, text: &str) -> String {
        let normalized = normalize(text);
        self.table
            .best_match(&normalized)
            .unwrap_or(DEFAULT_INTENT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictor() -> KeywordIntentPredictor {
        KeywordIntentPredictor::builtin().unwrap()
    }

    #[test]
    fn test_help_request() {
        assert_eq!(predictor().predict("I need some support"), "help_request");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(predictor().predict("Hello there!"), "greeting");
    }

    #[test]
    fn test_gratitude() {
        assert_eq!(predictor().predict("Thanks so much"), "gratitude");
    }

    #[test]
    fn test_sleep() {
        assert_eq!(predictor().predict("I suffer from insomnia"), "sleep");
    }

    #[test]
    fn test_no_hits_is_general() {
        assert_eq!(predictor().predict("xyz"), DEFAULT_INTENT);
        assert_eq!(predictor().predict(""), DEFAULT_INTENT);
    }

    #[test]
    fn test_deterministic() {
        let predictor = predictor();
        let text = "I need help, I can't sleep and I'm so tired";
        let first = predictor.predict(text);
        for _ in 0..10 {
            assert_eq!(predictor.predict(text), first);
        }
        assert_eq!(first, "help_request");
    }

    #[test]
    fn test_mock_predictor() {
        let mut mock = MockIntentPredictor::new();
        mock.expect_predict()
            .returning(|_| "meditation".to_string());
        let predictor: &dyn IntentPredictor = &mock;
        assert_eq!(predictor.predict("anything"), "meditation");
    }
}
