//! Reply selection and personalization
//!
//! A base reply is drawn uniformly from the catalog entry of the intent. When
//! an analysis is available and confident enough, it is wrapped in a prefix
//! picked by this table (first row that applies wins):
//!
//! | sentiment | emotion                  | template   |
//! |-----------|--------------------------|------------|
//! | negative  | suicidal                 | Suicidal   |
//! | negative  | depression or loneliness | Distress   |
//! | negative  | anxiety                  | Anxiety    |
//! | negative  | anything else            | Negative   |
//! | positive  | any                      | Positive   |
//! | neutral   | any                      | unchanged  |

use crate::catalog::ReplyCatalog;
use crate::config::EngineConfig;
use crate::templates::{ReplyTemplate, TemplateEngine};
use crate::types::{AnalysisResult, EmotionClass, SentimentClass};
use crate::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Template for a sentiment/emotion pair, or `None` to leave the reply as is
pub fn select_template(sentiment: SentimentClass, emotion: EmotionClass) -> Option<ReplyTemplate> {
    match (sentiment, emotion) {
        (SentimentClass::Negative, EmotionClass::Suicidal) => Some(ReplyTemplate::Suicidal),
        (SentimentClass::Negative, EmotionClass::Depression | EmotionClass::Loneliness) => {
            Some(ReplyTemplate::Distress)
        }
        (SentimentClass::Negative, EmotionClass::Anxiety) => Some(ReplyTemplate::Anxiety),
        (SentimentClass::Negative, _) => Some(ReplyTemplate::Negative),
        (SentimentClass::Positive, _) => Some(ReplyTemplate::Positive),
        (SentimentClass::Neutral, _) => None,
    }
}

/// Chooses and augments canned replies
#[derive(Debug, Clone)]
pub struct ResponsePersonalizer {
    catalog: ReplyCatalog,
    templates: TemplateEngine,
    personalization_threshold: f32,
    fallback_reply: String,
}

impl ResponsePersonalizer {
    /// Personalizer over a catalog, using thresholds and fallback from `config`
    pub fn new(catalog: ReplyCatalog, config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            catalog,
            templates: TemplateEngine::new()?,
            personalization_threshold: config.personalization_threshold,
            fallback_reply: config.fallback_reply.clone(),
        })
    }

    /// The catalog replies are drawn from
    pub fn catalog(&self) -> &ReplyCatalog {
        &self.catalog
    }

    fn pick<R: Rng + ?Sized>(&self, intent: &str, rng: &mut R) -> Option<&str> {
        let reply = self
            .catalog
            .get(intent)
            .and_then(|replies| replies.choose(rng))
            .map(String::as_str);
        if reply.is_none() {
            warn!(intent, "No catalog replies for intent, using fallback");
        }
        reply
    }

    /// Uniformly chosen catalog reply, or the fallback for unknown/empty intents
    pub fn base_reply<R: Rng + ?Sized>(&self, intent: &str, rng: &mut R) -> String {
        self.pick(intent, rng)
            .unwrap_or(self.fallback_reply.as_str())
            .to_string()
    }

    /// Full reply for an intent
    ///
    /// The fallback reply is never personalized.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        intent: &str,
        analysis: Option<&AnalysisResult>,
        rng: &mut R,
    ) -> String {
        let Some(base) = self.pick(intent, rng) else {
            return self.fallback_reply.clone();
        };
        match analysis {
            Some(analysis) => self.personalize(base, analysis),
            None => base.to_string(),
        }
    }

    /// Wrap `base` according to the decision table
    pub fn personalize(&self, base: &str, analysis: &AnalysisResult) -> String {
        if analysis.confidence <= self.personalization_threshold {
            return base.to_string();
        }
        let Some(template) = select_template(analysis.sentiment, analysis.emotion) else {
            return base.to_string();
        };

        debug!(
            template = template.name(),
            sentiment = %analysis.sentiment,
            emotion = %analysis.emotion,
            confidence = analysis.confidence,
            "Personalizing reply"
        );
        match self.templates.render_reply(template, base) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Failed to render reply template");
                base.to_string()
            }
        }
    }
}
