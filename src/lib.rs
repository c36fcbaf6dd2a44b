//! reframe - Guided CBT reflection sessions with a local journal.
//!
//! The session engine drives a turn-based exchange of canned insights and
//! reframing questions; completed sessions are summarized into an
//! append-only journal persisted through a swappable key/value backend.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
