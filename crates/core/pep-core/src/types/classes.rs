//! Discrete sentiment, emotion and sender classes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete sentiment derived from the compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentClass {
    /// Compound at or above the positive threshold
    Positive,
    /// Between the two thresholds
    Neutral,
    /// Compound at or below the negative threshold
    Negative,
}

impl SentimentClass {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "positive",
            SentimentClass::Neutral => "neutral",
            SentimentClass::Negative => "negative",
        }
    }

    /// Capitalized name for human-readable summaries
    pub fn title(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "Positive",
            SentimentClass::Neutral => "Neutral",
            SentimentClass::Negative => "Negative",
        }
    }
}

impl Default for SentimentClass {
    fn default() -> Self {
        SentimentClass::Neutral
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(SentimentClass::Positive),
            "neutral" => Ok(SentimentClass::Neutral),
            "negative" => Ok(SentimentClass::Negative),
            other => Err(format!("unknown sentiment '{}'", other)),
        }
    }
}

/// Coarse emotional state detected from keywords
///
/// Declaration order of the tagged variants is the tie-break priority used
/// by the emotion tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionClass {
    /// Worry, fear, stress
    Anxiety,
    /// Sadness, hopelessness, exhaustion
    Depression,
    /// Anger and frustration
    Anger,
    /// Joy, excitement, gratitude
    Happiness,
    /// Isolation and abandonment
    Loneliness,
    /// Self-harm ideation
    Suicidal,
    /// No keyword matched
    Neutral,
}

impl EmotionClass {
    /// Keyword-tagged emotions in priority order (excludes `Neutral`)
    pub const TAGGED: [EmotionClass; 6] = [
        EmotionClass::Anxiety,
        EmotionClass::Depression,
        EmotionClass::Anger,
        EmotionClass::Happiness,
        EmotionClass::Loneliness,
        EmotionClass::Suicidal,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionClass::Anxiety => "anxiety",
            EmotionClass::Depression => "depression",
            EmotionClass::Anger => "anger",
            EmotionClass::Happiness => "happiness",
            EmotionClass::Loneliness => "loneliness",
            EmotionClass::Suicidal => "suicidal",
            EmotionClass::Neutral => "neutral",
        }
    }

    /// Capitalized name for human-readable summaries
    pub fn title(&self) -> &'static str {
        match self {
            EmotionClass::Anxiety => "Anxiety",
            EmotionClass::Depression => "Depression",
            EmotionClass::Anger => "Anger",
            EmotionClass::Happiness => "Happiness",
            EmotionClass::Loneliness => "Loneliness",
            EmotionClass::Suicidal => "Suicidal",
            EmotionClass::Neutral => "Neutral",
        }
    }
}

impl Default for EmotionClass {
    fn default() -> Self {
        EmotionClass::Neutral
    }
}

impl fmt::Display for EmotionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmotionClass::TAGGED
            .iter()
            .chain(std::iter::once(&EmotionClass::Neutral))
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown emotion '{}'", s))
    }
}

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person chatting
    User,
    /// The assistant
    Bot,
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("unknown sender '{}'", other)),
        }
    }
}
