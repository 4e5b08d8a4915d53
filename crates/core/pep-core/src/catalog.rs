//! Canned reply catalog

use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Candidate replies per intent tag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyCatalog {
    replies: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct IntentsDocument {
    intents: Vec<IntentEntry>,
}

#[derive(Debug, Deserialize)]
struct IntentEntry {
    tag: String,
    #[serde(default)]
    responses: Responses,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Responses {
    One(String),
    Many(Vec<String>),
}

impl Default for Responses {
    fn default() -> Self {
        Responses::Many(Vec::new())
    }
}

impl From<Responses> for Vec<String> {
    fn from(responses: Responses) -> Self {
        match responses {
            Responses::One(reply) => vec![reply],
            Responses::Many(replies) => replies,
        }
    }
}

impl ReplyCatalog {
    /// Empty catalog; every lookup falls back
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(tag, replies)` pairs; a repeated tag keeps only its last pair
    pub fn from_pairs<I, T, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, R)>,
        T: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let replies = pairs
            .into_iter()
            .map(|(tag, candidates)| {
                (tag.into(), candidates.into_iter().map(Into::into).collect())
            })
            .collect();
        Self { replies }
    }

    /// Parse an intents document
    ///
    /// ```json
    /// {"intents": [{"tag": "greeting", "patterns": ["hi"], "responses": ["Hello!"]}]}
    /// ```
    ///
    /// `responses` may also be a single string. When a tag appears more than
    /// once, the last entry replaces the earlier ones.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: IntentsDocument = serde_json::from_str(json)?;
        let catalog = Self::from_pairs(
            document
                .intents
                .into_iter()
                .map(|entry| (entry.tag, Vec::<String>::from(entry.responses))),
        );
        tracing::debug!(intents = catalog.len(), "Loaded reply catalog");
        Ok(catalog)
    }

    /// Read and parse an intents document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Candidate replies for a tag; `None` when the tag is unknown
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.replies.get(tag).map(Vec::as_slice)
    }

    /// Whether the tag has an entry, even an empty one
    pub fn contains(&self, tag: &str) -> bool {
        self.replies.contains_key(tag)
    }

    /// Tags in the catalog, unordered
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.replies.keys().map(String::as_str)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    /// True when the catalog has no tags
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}
