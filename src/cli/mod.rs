//! CLI command implementations.

pub mod clean;
pub mod list;
pub mod show;
pub mod start;

use crate::config::Config;
use crate::core::Mode;
use crate::error::Result;
use crate::store::{FileBackend, Journal};

/// Mode selected by the shared `--emergency` flag.
#[must_use]
pub fn mode_from_flag(emergency: bool) -> Mode {
    if emergency {
        Mode::Emergency
    } else {
        Mode::Reframing
    }
}

/// Open the configured file-backed journal.
///
/// # Errors
///
/// Returns an error if the journal directory cannot be created.
pub fn open_journal(config: &Config) -> Result<Journal<FileBackend>> {
    let backend = FileBackend::new(config.storage.path.clone())?;
    Ok(Journal::new(backend).with_preview_chars(config.journal.preview_chars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn emergency_flag_selects_mode() {
        assert_eq!(mode_from_flag(false), Mode::Reframing);
        assert_eq!(mode_from_flag(true), Mode::Emergency);
    }

    #[test]
    fn open_journal_uses_configured_storage_path() {
        // Config is the single owner of home resolution; the journal must
        // land under whatever path it says, nothing else.
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.path = temp_dir.path().join("custom-home");

        let _journal = open_journal(&config).unwrap();

        assert!(temp_dir.path().join("custom-home").join("journal").exists());
    }
}
