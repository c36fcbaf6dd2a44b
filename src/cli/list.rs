//! `reframe list` command implementation.

use crate::cli::{mode_from_flag, open_journal};
use crate::config::load_config;
use crate::error::Result;
use crate::store::JournalStore;
use chrono::{DateTime, Local, Utc};

/// Default number of records to show.
const DEFAULT_LIMIT: usize = 20;

/// Maximum length for the preview column.
const PREVIEW_COLUMN_LEN: usize = 50;

/// Run the list command.
///
/// Shows journal records for the selected mode, most recent first.
///
/// # Errors
///
/// Returns an error if configuration loading or the storage backend fails.
pub fn run(emergency: bool, limit: Option<usize>) -> Result<()> {
    let config = load_config()?;
    let journal = open_journal(&config)?;
    let mode = mode_from_flag(emergency);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    let mut records = journal.list_records(mode)?;
    records.truncate(limit);

    if records.is_empty() {
        println!("No journal entries yet.");
        println!("\nStart one with: reframe start");
        return Ok(());
    }

    println!("{:<15} {:<18} {:<12} Preview", "Id", "Date", "Reflections");
    println!("{}", "─".repeat(96));

    for record in &records {
        let date = format_local_time(record.date);
        let reflections = format!(
            "{} turn{}",
            record.turns.len(),
            if record.turns.len() == 1 { "" } else { "s" }
        );
        let preview = format_preview_column(&record.preview);

        println!("{:<15} {:<18} {:<12} {}", record.id, date, reflections, preview);
    }

    println!("{}", "─".repeat(96));
    println!("Showing {} entr{}", records.len(), if records.len() == 1 { "y" } else { "ies" });

    Ok(())
}

/// Format UTC time as local time for display.
fn format_local_time(utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = utc.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Fit a stored preview into the listing column.
fn format_preview_column(preview: &str) -> String {
    // First line only; stored previews may contain the user's line breaks.
    let first_line = preview.lines().next().unwrap_or(preview);
    if first_line.chars().count() > PREVIEW_COLUMN_LEN {
        let cut: String = first_line.chars().take(PREVIEW_COLUMN_LEN).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
