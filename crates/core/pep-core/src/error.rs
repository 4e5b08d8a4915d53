//! Error types for PEP core
//!
//! Per-request operations (`analyze`, `generate_reply`, `summarize_trend`) are
//! total and never return these. Errors only surface while loading lexicons,
//! keyword tables, reply catalogs and configuration.

use thiserror::Error;

/// Main error type for PEP operations
#[derive(Debug, Error)]
pub enum PepError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed lexicon line
    #[error("Lexicon error at line {line}: {message}")]
    Lexicon {
        /// 1-based line number in the lexicon source
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Invalid keyword table
    #[error("Keyword table error: {0}")]
    KeywordTable(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type using PepError
pub type Result<T> = std::result::Result<T, PepError>;

impl PepError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        PepError::Config(msg.into())
    }

    /// Create a lexicon error
    pub fn lexicon(line: usize, message: impl Into<String>) -> Self {
        PepError::Lexicon {
            line,
            message: message.into(),
        }
    }

    /// Create a keyword table error
    pub fn keyword_table(msg: impl Into<String>) -> Self {
        PepError::KeywordTable(msg.into())
    }

    /// Create a template error
    pub fn template(msg: impl Into<String>) -> Self {
        PepError::Template(msg.into())
    }
}
