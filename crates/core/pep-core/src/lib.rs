//! PEP Core
//!
//! Sentiment and emotion analysis for a supportive chat assistant. It
//! includes:
//!
//! - Text normalization and a VADER-style compound sentiment scorer
//! - A polarity/subjectivity scorer over an adjective lexicon
//! - Keyword-driven emotion and intent tagging with stable tie-breaks
//! - Reply selection from a canned catalog, personalized by the analysis
//! - On-demand trend aggregation over caller-owned conversations
//!
//! Everything is synchronous and performs no network I/O.
//!
//! # Example
//!
//! ```no_run
//! use pep_core::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!     let catalog = ReplyCatalog::from_path("intents.json")?;
//!     let engine = SentimentEngine::with_defaults(catalog)?;
//!
//!     let mut conversation = Conversation::new();
//!     let mut rng = rand::thread_rng();
//!     let exchange = engine.respond(&mut conversation, "I feel so alone lately", &mut rng);
//!     println!("{}", exchange.reply);
//!     println!("{}", engine.sentiment_summary(&exchange.analysis));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export commonly used types
pub use uuid::Uuid;

// Core modules
pub mod catalog;
pub mod config;
pub mod conversation;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod intent;
pub mod nlp;
pub mod personalizer;
pub mod sentiment;
pub mod templates;
pub mod testing;
pub mod trend;
pub mod types;
pub mod utils;

// Re-export main types
pub use catalog::ReplyCatalog;
pub use config::{
    get_env_float, get_env_int, get_env_or, load_env, load_env_from_path, EngineConfig,
    DEFAULT_FALLBACK_REPLY,
};
pub use conversation::Conversation;
pub use emotion::{EmotionTagger, DEFAULT_EMOTION_KEYWORDS};
pub use engine::SentimentEngine;
pub use error::{PepError, Result};
pub use intent::{IntentPredictor, KeywordIntentPredictor, DEFAULT_INTENT};
pub use nlp::{normalize, KeywordTable};
pub use personalizer::{select_template, ResponsePersonalizer};
pub use sentiment::{
    confidence_from_compound, LexiconScorer, SentimentClassifier, SubjectivityScorer, VaderScorer,
};
pub use templates::{ReplyTemplate, TemplateEngine};
pub use trend::{summarize_records, summarize_trend, summarize_window};
pub use types::*;
pub use utils::{init_logging, Logger};
