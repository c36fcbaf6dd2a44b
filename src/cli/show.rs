//! `reframe show` command implementation.

use crate::cli::{mode_from_flag, open_journal};
use crate::config::load_config;
use crate::error::Result;
use crate::store::{JournalRecord, JournalStore};
use chrono::{DateTime, Local, Utc};
use std::io::{self, Write};

/// Run the show command.
///
/// Prints the full content of one journal record. An unknown id is a normal
/// outcome (stale link, cleared storage) and renders a friendly message
/// rather than an error.
///
/// # Errors
///
/// Returns an error if configuration loading, the storage backend, or
/// terminal output fails.
pub fn run(id: i64, emergency: bool) -> Result<()> {
    let config = load_config()?;
    let journal = open_journal(&config)?;
    let mode = mode_from_flag(emergency);

    let mut stdout = io::stdout();
    match journal.get_record(mode, id)? {
        Some(record) => render_record(&record, &mut stdout),
        None => {
            writeln!(stdout, "Entry not found.")?;
            writeln!(
                stdout,
                "It may have been removed, or it belongs to the other journal."
            )?;
            writeln!(stdout, "See what's saved with: reframe list")?;
            Ok(())
        }
    }
}

/// Print one record's title, date, and turns.
fn render_record(record: &JournalRecord, output: &mut dyn Write) -> Result<()> {
    writeln!(output, "{}", record.title)?;
    writeln!(output, "{}", format_local_date(record.date))?;
    writeln!(output)?;

    for turn in &record.turns {
        if let Some(quote) = &turn.quote {
            writeln!(output, "\u{201c}{quote}\u{201d}")?;
            writeln!(output)?;
        }
        writeln!(output, "{}", turn.insight)?;
        writeln!(output)?;
        writeln!(output, "{}", turn.question)?;
        writeln!(output)?;
        writeln!(output, "You wrote: {}", turn.user_response)?;
        writeln!(output)?;
    }

    Ok(())
}

/// Format UTC time as a local long-form date.
fn format_local_date(utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = utc.into();
    local.format("%B %-d, %Y").to_string()
}
