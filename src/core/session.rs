//! Reflection session state.
//!
//! A session is a turn-based exchange: the system presents an insight and a
//! reframing question, the user answers, and the engine appends the next
//! prompt. Sessions are ephemeral view state; only answered turns reach the
//! journal (see [`crate::store`]).

use crate::core::prompts::{self, PromptPicker};
use chrono::{DateTime, Utc};

/// Which guided-reflection flow a session runs.
///
/// Modes differ only in prompt pools and framing copy; the engine logic is
/// identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// General thought-reframing flow.
    Reframing,

    /// Crisis-oriented flow with higher-urgency framing.
    Emergency,
}

impl Mode {
    /// Journal record title for this mode.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Reframing => "Reframing Session",
            Self::Emergency => "Emergency Journal Session",
        }
    }

    /// Legacy storage key for this mode's journal collection.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Reframing => "reframe-journal-entries",
            Self::Emergency => "emergency-journal-entries",
        }
    }
}

/// One exchange within a session.
///
/// Sessions are view state only; turns reach storage via
/// [`crate::store::JournalRecord`], which has its own persisted shape.
#[derive(Debug, Clone)]
pub struct Turn {
    /// Position within the session, 1-based, strictly increasing.
    pub sequence: u32,

    /// Prior reflection echoed back verbatim. First turn only.
    pub opening_quote: Option<String>,

    /// Canned insight drawn at turn creation.
    pub insight: String,

    /// Canned reframing question drawn at turn creation.
    pub question: String,

    /// The user's answer. Absent until submitted; immutable once set.
    pub user_response: Option<String>,

    /// When the turn was created.
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Whether the user answered this turn with non-whitespace text.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.user_response
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty())
    }
}

/// A guided-reflection session: ordered turns plus a fixed mode.
///
/// Invariant: the last turn is always the single open (unanswered) turn.
/// Completed turns only grow in number and are never edited retroactively;
/// `submit_response` consumes the session and returns the next state.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    turns: Vec<Turn>,
}

impl Session {
    /// Start a session with one open turn.
    ///
    /// The first turn's prompts are drawn from `mode`'s pools; `seed_quote`,
    /// if given, is echoed back as the opening quote.
    #[must_use]
    pub fn start(mode: Mode, seed_quote: Option<&str>, picker: &mut dyn PromptPicker) -> Self {
        let prompt = prompts::draw(mode, picker);
        Self {
            mode,
            turns: vec![Turn {
                sequence: 1,
                opening_quote: seed_quote.map(str::to_string),
                insight: prompt.insight,
                question: prompt.question,
                user_response: None,
                created_at: Utc::now(),
            }],
        }
    }

    /// The session's mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// All turns in order, the trailing one open.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The single open turn awaiting a response.
    #[must_use]
    pub fn open_turn(&self) -> &Turn {
        // Sessions are created with one turn and only ever append.
        &self.turns[self.turns.len() - 1]
    }

    /// Turns with a non-whitespace response, in original order.
    pub fn answered_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.is_answered())
    }

    /// Seal the open turn with `text` and append the next open turn.
    ///
    /// Blank text (after trimming) is a no-op: the UI disables submission,
    /// so the engine just returns the session unchanged rather than erroring.
    /// Follow-up turns never carry an opening quote.
    #[must_use]
    pub fn submit_response(mut self, text: &str, picker: &mut dyn PromptPicker) -> Self {
        if text.trim().is_empty() {
            return self;
        }

        // Sessions always hold at least one turn.
        let last = self.turns.len() - 1;
        let open = &mut self.turns[last];
        open.user_response = Some(text.to_string());
        let next_sequence = open.sequence + 1;

        let prompt = prompts::draw(self.mode, picker);
        self.turns.push(Turn {
            sequence: next_sequence,
            opening_quote: None,
            insight: prompt.insight,
            question: prompt.question,
            user_response: None,
            created_at: Utc::now(),
        });

        self
    }
}
