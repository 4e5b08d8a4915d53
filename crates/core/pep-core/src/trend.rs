//! Conversation trend aggregation
//!
//! Trends are computed on demand from the turns passed in; nothing is cached
//! between calls. Bot turns never count.

use crate::types::{ConversationTurn, Distribution, Sender, TrendSummary};
use serde_json::Value;
use tracing::warn;

/// Aggregate sentiment and emotion over the user turns
///
/// Accepts any number of turns; an empty or bot-only slice gives the default
/// summary (empty distributions, neutral dominants).
pub fn summarize_trend(turns: &[ConversationTurn]) -> TrendSummary {
    summarize_user_turns(turns.iter().filter(|t| t.sender == Sender::User))
}

/// Aggregate only the last `n` user turns
pub fn summarize_window(turns: &[ConversationTurn], n: usize) -> TrendSummary {
    let user_turns: Vec<&ConversationTurn> =
        turns.iter().filter(|t| t.sender == Sender::User).collect();
    let start = user_turns.len().saturating_sub(n);
    summarize_user_turns(user_turns[start..].iter().copied())
}

/// Aggregate loosely-typed turn records
///
/// Each record needs `sender`, `text`, `sentiment` and `emotion` string fields
/// (`intent` and `confidence` are optional). Records that are not objects,
/// lack a field or carry an unknown enum value are skipped with a warning.
pub fn summarize_records(records: &[Value]) -> TrendSummary {
    let turns: Vec<ConversationTurn> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match turn_from_record(record) {
            Ok(turn) => Some(turn),
            Err(reason) => {
                warn!(index, %reason, "Skipping malformed conversation record");
                None
            }
        })
        .collect();
    summarize_trend(&turns)
}

/// Parse one stored turn record
pub fn turn_from_record(record: &Value) -> std::result::Result<ConversationTurn, String> {
    let object = record
        .as_object()
        .ok_or_else(|| "record is not an object".to_string())?;
    let field = |name: &str| str_field(object, name);

    let mut turn = ConversationTurn {
        sender: field("sender")?.parse()?,
        text: field("text")?.to_string(),
        sentiment: field("sentiment")?.parse()?,
        emotion: field("emotion")?.parse()?,
        intent: field("intent").unwrap_or_default().to_string(),
        confidence: object
            .get("confidence")
            .and_then(Value::as_f64)
            .map(|c| c as f32),
        timestamp: chrono::Utc::now(),
    };
    if let Some(timestamp) = object
        .get("timestamp")
        .and_then(Value::as_str)
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
    {
        turn.timestamp = timestamp.with_timezone(&chrono::Utc);
    }
    Ok(turn)
}

fn str_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    name: &str,
) -> std::result::Result<&'a str, String> {
    object
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing string field '{}'", name))
}

fn summarize_user_turns<'a>(turns: impl Iterator<Item = &'a ConversationTurn>) -> TrendSummary {
    let mut sentiment_distribution = Distribution::new();
    let mut emotion_distribution = Distribution::new();
    let mut total_turns = 0;
    let mut confidence_sum = 0.0_f32;
    let mut confidence_count = 0_usize;

    for turn in turns {
        sentiment_distribution.record(turn.sentiment);
        emotion_distribution.record(turn.emotion);
        total_turns += 1;
        // zero means the turn was never scored
        if let Some(confidence) = turn.confidence.filter(|c| *c != 0.0) {
            confidence_sum += confidence;
            confidence_count += 1;
        }
    }

    let average_confidence = if confidence_count == 0 {
        0.0
    } else {
        confidence_sum / confidence_count as f32
    };

    TrendSummary {
        dominant_sentiment: sentiment_distribution.dominant().unwrap_or_default(),
        dominant_emotion: emotion_distribution.dominant().unwrap_or_default(),
        sentiment_distribution,
        emotion_distribution,
        total_turns,
        average_confidence,
    }
}
