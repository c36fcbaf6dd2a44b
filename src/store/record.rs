//! Persisted journal record types.
//!
//! Field names follow the legacy storage shape exactly (`fullContent`,
//! `userResponse`, optional `quote`, and a `type` marker present only on
//! emergency records), so existing stored data round-trips unchanged.

use crate::core::{Mode, Session, Turn};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default preview length in characters.
pub const PREVIEW_CHARS: usize = 150;

/// One answered turn as persisted inside a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordTurn {
    /// Canned insight shown for this turn.
    pub insight: String,

    /// Canned reframing question shown for this turn.
    pub question: String,

    /// The user's answer.
    #[serde(rename = "userResponse")]
    pub user_response: String,

    /// Opening quote, first turn of a seeded session only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

impl RecordTurn {
    fn from_turn(turn: &Turn) -> Self {
        Self {
            insight: turn.insight.clone(),
            question: turn.question.clone(),
            user_response: turn.user_response.clone().unwrap_or_default(),
            quote: turn.opening_quote.clone(),
        }
    }
}

/// Legacy entry-type marker. Only emergency records carry it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Record written by the emergency-journal flow.
    Emergency,
}

/// A persisted, summarized session. Append-only: never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalRecord {
    /// Unique integer id, derived from the creation timestamp.
    pub id: i64,

    /// When the record was persisted.
    pub date: DateTime<Utc>,

    /// Human label, constant per mode.
    pub title: String,

    /// First ~150 chars of the first answered response.
    pub preview: String,

    /// Answered turns only, in original session order.
    #[serde(rename = "fullContent")]
    pub turns: Vec<RecordTurn>,

    /// Legacy marker, present only for emergency records.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,
}

impl JournalRecord {
    /// Build a record from a session, or `None` if no turn was answered.
    ///
    /// Unanswered turns (including the trailing open turn) are filtered out;
    /// the remaining turns keep their original order.
    #[must_use]
    pub fn from_session(session: &Session, preview_chars: usize) -> Option<Self> {
        let turns: Vec<RecordTurn> = session.answered_turns().map(RecordTurn::from_turn).collect();
        let first = turns.first()?;

        let now = Utc::now();
        Some(Self {
            id: now.timestamp_millis(),
            date: now,
            title: session.mode().title().to_string(),
            preview: preview(&first.user_response, preview_chars),
            turns,
            entry_type: match session.mode() {
                Mode::Emergency => Some(EntryType::Emergency),
                Mode::Reframing => None,
            },
        })
    }

    /// Bump `id` past any id already in `existing`.
    ///
    /// Ids come from millisecond timestamps; two appends inside the same
    /// millisecond would otherwise collide. Uniqueness is the only hard
    /// requirement on ids.
    pub fn ensure_unique_id(&mut self, existing: &[Self]) {
        if let Some(max) = existing.iter().map(|r| r.id).max() {
            if self.id <= max {
                self.id = max + 1;
            }
        }
    }
}

/// Truncate `text` to `limit` characters, appending an ellipsis only when
/// something was cut. Counts chars, not bytes, so multibyte input never
/// splits mid-character.
fn preview(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    if text.chars().count() > limit {
        out.push_str("...");
    }
    out
}
