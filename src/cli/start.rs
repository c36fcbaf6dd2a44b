//! `reframe start` command implementation.
//!
//! Runs an interactive reflection session: prints the opening prompt, reads
//! responses line by line, pauses to simulate thinking, and persists the
//! session to the journal after the first answered turn (the save-once
//! policy the original app exhibited).

use crate::cli::{mode_from_flag, open_journal};
use crate::config::load_config;
use crate::core::prompts::{PromptPicker, RandomPicker};
use crate::core::{Mode, Session, thinking};
use crate::error::Result;
use crate::store::JournalStore;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Command to end the session from the prompt.
const DONE_COMMAND: &str = ".done";

/// Run the start command.
///
/// # Errors
///
/// Returns an error if configuration loading, terminal I/O, or the journal
/// write fails.
pub fn run(emergency: bool, quote: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let journal = open_journal(&config)?;
    let delay = Duration::from_millis(config.engine.thinking_delay_ms);

    let stdin = io::stdin();
    run_session(
        mode_from_flag(emergency),
        quote,
        &journal,
        &mut RandomPicker,
        delay,
        &mut stdin.lock(),
        &mut io::stdout(),
    )
}

/// Drive one session over arbitrary input/output streams.
///
/// Split out from [`run`] so tests can feed scripted input and capture
/// output without touching the real terminal or home directory.
///
/// # Errors
///
/// Returns an error if reading input, writing output, or the journal write
/// fails.
pub fn run_session(
    mode: Mode,
    quote: Option<&str>,
    journal: &dyn JournalStore,
    picker: &mut dyn PromptPicker,
    delay: Duration,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<()> {
    let mut session = Session::start(mode, quote, picker);
    let mut saved = false;

    writeln!(output, "{}", framing_copy(mode))?;
    writeln!(output)?;
    writeln!(output, "{}", format_open_turn(&session))?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF: session abandoned, nothing more to save
        }
        let text = line.trim();

        if text == DONE_COMMAND {
            break;
        }
        if text.is_empty() {
            // Submission stays disabled while the input is blank.
            writeln!(output, "(write something first, or {DONE_COMMAND} to finish)")?;
            continue;
        }

        session = session.submit_response(text, picker);

        // Save-once: the session reaches the journal after its first
        // answered turn; later turns stay in view state only.
        if !saved && journal.append_session(&session)?.is_some() {
            saved = true;
            writeln!(output, "(saved to your journal)")?;
        }

        writeln!(output)?;
        deliver_reply(delay, format_open_turn(&session), output)?;
    }

    writeln!(output)?;
    writeln!(output, "Take care. Your journal is here whenever you need it.")?;
    Ok(())
}

/// Header copy per mode.
fn framing_copy(mode: Mode) -> &'static str {
    match mode {
        Mode::Reframing => "Let's reframe one thought.",
        Mode::Emergency => "This is a safe space. Let it out — no one is judging.",
    }
}

/// The quote (if any), insight, and question of the open turn as one block.
fn format_open_turn(session: &Session) -> String {
    let turn = session.open_turn();
    let mut block = String::new();
    if let Some(quote) = &turn.opening_quote {
        block.push_str(&format!("\u{201c}{quote}\u{201d}\n\n"));
    }
    block.push_str(&turn.insight);
    block.push_str("\n\n");
    block.push_str(&turn.question);
    block
}

/// Show the busy indicator, then deliver the reply as the scheduled task's
/// payload. A cancelled task (handle dropped before `wait`) renders nothing.
fn deliver_reply(delay: Duration, reply: String, output: &mut dyn Write) -> Result<()> {
    if !delay.is_zero() {
        writeln!(output, "...")?;
        output.flush()?;
    }
    if let Some(reply) = thinking::schedule(delay, move || reply).wait() {
        writeln!(output, "{reply}")?;
    }
    Ok(())
}
