//! Caller-owned conversation sessions

use crate::trend::{summarize_trend, summarize_window};
use crate::types::{ConversationTurn, Sender, TrendSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only list of turns for one chat session
///
/// The engine keeps no history of its own; each caller holds its own
/// `Conversation` and passes it to `SentimentEngine::respond`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Session id
    pub id: Uuid,
    /// When the session was opened
    pub started_at: DateTime<Utc>,
    turns: Vec<ConversationTurn>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Empty conversation with a fresh id
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Empty conversation with a known id
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    /// Append a turn
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// All turns in order
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Turns written by the user
    pub fn user_turns(&self) -> impl Iterator<Item = &ConversationTurn> + '_ {
        self.turns.iter().filter(|t| t.sender == Sender::User)
    }

    /// Number of user turns
    pub fn user_turn_count(&self) -> usize {
        self.user_turns().count()
    }

    /// Most recent turn
    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turn has been added
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Trend over the whole conversation
    pub fn trend(&self) -> TrendSummary {
        summarize_trend(&self.turns)
    }

    /// Trend over the last `n` user turns
    pub fn recent_trend(&self, n: usize) -> TrendSummary {
        summarize_window(&self.turns, n)
    }
}

impl Extend<ConversationTurn> for Conversation {
    fn extend<T: IntoIterator<Item = ConversationTurn>>(&mut self, iter: T) {
        self.turns.extend(iter);
    }
}
