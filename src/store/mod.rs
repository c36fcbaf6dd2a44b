//! Journal persistence: records, the store interface, and backends.

pub mod file;
pub mod journal;
pub mod memory;
pub mod record;
pub mod traits;

pub use file::FileBackend;
pub use journal::Journal;
pub use memory::MemoryBackend;
pub use record::{EntryType, JournalRecord, RecordTurn};
pub use traits::{JournalStore, KeyValueStorage};
