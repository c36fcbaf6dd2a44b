//! `reframe clean` command implementation.

use crate::cli::{mode_from_flag, open_journal};
use crate::config::load_config;
use crate::core::Mode;
use crate::error::Result;
use crate::store::JournalStore;

/// Run the clean command.
///
/// Deletes the selected mode's journal collection, or both collections with
/// `--all`. Records are append-only in normal operation; this is the one
/// deliberate way to remove them.
///
/// # Errors
///
/// Returns an error if configuration loading or the storage backend fails.
pub fn run(emergency: bool, all: bool) -> Result<()> {
    let config = load_config()?;
    let journal = open_journal(&config)?;

    if all {
        journal.clear(Mode::Reframing)?;
        journal.clear(Mode::Emergency)?;
        println!("Cleared both journals.");
        return Ok(());
    }

    let mode = mode_from_flag(emergency);
    journal.clear(mode)?;
    println!("Cleared the {} journal.", match mode {
        Mode::Reframing => "reframing",
        Mode::Emergency => "emergency",
    });

    Ok(())
}
