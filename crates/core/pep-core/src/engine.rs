//! Sentiment engine
//!
//! Owns every table, lexicon and policy knob and exposes the per-message
//! operations. All of them are synchronous and total: once construction
//! succeeds, nothing here returns an error.

use crate::catalog::ReplyCatalog;
use crate::config::EngineConfig;
use crate::conversation::Conversation;
use crate::emotion::EmotionTagger;
use crate::intent::{IntentPredictor, KeywordIntentPredictor};
use crate::nlp::normalize;
use crate::personalizer::ResponsePersonalizer;
use crate::sentiment::{confidence_from_compound, LexiconScorer, SentimentClassifier};
use crate::trend;
use crate::types::{AnalysisResult, ChatExchange, ConversationTurn, TrendSummary};
use crate::utils::Logger;
use crate::Result;
use rand::Rng;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

/// Sentiment analysis, reply generation and trend aggregation
///
/// `Send + Sync`; share it behind an `Arc` across request handlers. Each
/// caller keeps its own [`Conversation`].
pub struct SentimentEngine {
    scorer: LexiconScorer,
    classifier: SentimentClassifier,
    emotions: EmotionTagger,
    predictor: Box<dyn IntentPredictor>,
    personalizer: ResponsePersonalizer,
    config: EngineConfig,
}

impl fmt::Debug for SentimentEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentEngine")
            .field("lexicon_entries", &self.scorer.lexicon_len())
            .field("emotion_keywords", &self.emotions.table().keyword_count())
            .field("catalog_intents", &self.personalizer.catalog().len())
            .field("config", &self.config)
            .finish()
    }
}

impl SentimentEngine {
    /// Build an engine over the bundled lexicons and emotion table
    ///
    /// Fails when `config` is invalid or a bundled table does not load.
    pub fn new<P>(catalog: ReplyCatalog, predictor: P, config: EngineConfig) -> Result<Self>
    where
        P: IntentPredictor + 'static,
    {
        Self::with_components(
            LexiconScorer::builtin()?,
            EmotionTagger::builtin()?,
            catalog,
            Box::new(predictor),
            config,
        )
    }

    /// Engine with the keyword intent predictor and default config
    pub fn with_defaults(catalog: ReplyCatalog) -> Result<Self> {
        Self::new(
            catalog,
            KeywordIntentPredictor::builtin()?,
            EngineConfig::default(),
        )
    }

    /// Build an engine from explicit parts
    pub fn with_components(
        scorer: LexiconScorer,
        emotions: EmotionTagger,
        catalog: ReplyCatalog,
        predictor: Box<dyn IntentPredictor>,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;

        let logger = Logger::new("engine");
        info!(
            lexicon_entries = scorer.lexicon_len(),
            emotion_categories = emotions.table().len(),
            emotion_keywords = emotions.table().keyword_count(),
            catalog_intents = catalog.len(),
            positive_threshold = config.positive_threshold,
            negative_threshold = config.negative_threshold,
            "Sentiment engine configured"
        );

        let engine = Self {
            scorer,
            classifier: SentimentClassifier::from_config(&config),
            emotions,
            predictor,
            personalizer: ResponsePersonalizer::new(catalog, &config)?,
            config,
        };
        logger.success("Sentiment engine ready");
        Ok(engine)
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reply catalog in use
    pub fn catalog(&self) -> &ReplyCatalog {
        self.personalizer.catalog()
    }

    /// Classify sentiment and emotion of raw text
    ///
    /// Pure: the same text always gives the same result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let normalized_text = normalize(text);
        let scores = self.scorer.score(&normalized_text);
        let compound = scores.scores.compound;
        let sentiment = self.classifier.classify(compound);
        let emotion = self.emotions.tag(&normalized_text);
        let confidence = confidence_from_compound(compound);

        debug!(
            sentiment = %sentiment,
            emotion = %emotion,
            compound,
            confidence,
            "Analyzed text"
        );

        AnalysisResult {
            raw_text: text.to_string(),
            emotion_keywords: self.emotions.matches(&normalized_text),
            normalized_text,
            sentiment,
            emotion,
            compound_score: compound,
            confidence,
            scores: scores.scores,
            polarity: scores.subjectivity.polarity,
            subjectivity: scores.subjectivity.subjectivity,
        }
    }

    /// Intent tag for raw text from the configured predictor
    pub fn predict_intent(&self, text: &str) -> String {
        self.predictor.predict(text)
    }

    /// Catalog reply for `intent`, personalized by `analysis` when given
    pub fn generate_reply<R: Rng + ?Sized>(
        &self,
        intent: &str,
        analysis: Option<&AnalysisResult>,
        rng: &mut R,
    ) -> String {
        self.personalizer.generate(intent, analysis, rng)
    }

    /// Trend over the user turns of `turns`
    pub fn summarize_trend(&self, turns: &[ConversationTurn]) -> TrendSummary {
        trend::summarize_trend(turns)
    }

    /// Trend over stored turn records, skipping malformed ones
    pub fn summarize_records(&self, records: &[Value]) -> TrendSummary {
        trend::summarize_records(records)
    }

    /// Trend over raw message records, re-analyzing the text of each user message
    ///
    /// Only `sender` and `text` are read. Records without them are ignored.
    pub fn summarize_history(&self, records: &[Value]) -> TrendSummary {
        let turns: Vec<ConversationTurn> = records
            .iter()
            .filter(|record| record.get("sender").and_then(Value::as_str) == Some("user"))
            .filter_map(|record| record.get("text").and_then(Value::as_str))
            .map(|text| {
                let analysis = self.analyze(text);
                ConversationTurn::user(&analysis, self.predict_intent(text))
            })
            .collect();
        trend::summarize_trend(&turns)
    }

    /// Handle one user message end to end
    ///
    /// Analyzes the text, predicts its intent, builds the reply and appends the
    /// user turn to `conversation`. The trend is attached once the conversation
    /// holds at least `trend_min_turns` user turns.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        conversation: &mut Conversation,
        text: &str,
        rng: &mut R,
    ) -> ChatExchange {
        let analysis = self.analyze(text);
        let intent = self.predict_intent(text);
        let reply = self.generate_reply(&intent, Some(&analysis), rng);

        conversation.push(ConversationTurn::user(&analysis, intent.clone()));

        let user_turns = conversation.user_turn_count();
        let trend = (user_turns >= self.config.trend_min_turns).then(|| conversation.trend());
        debug!(
            conversation_id = %conversation.id,
            intent = %intent,
            user_turns,
            with_trend = trend.is_some(),
            "Responded to message"
        );

        ChatExchange {
            reply,
            intent,
            analysis,
            trend,
        }
    }

    /// One or two line human-readable summary of an analysis
    pub fn sentiment_summary(&self, analysis: &AnalysisResult) -> String {
        analysis.summary()
    }
}
