//! In-memory key/value backend for testing.

use crate::error::Result;
use crate::store::traits::KeyValueStorage;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory backend for testing.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().unwrap();
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().unwrap();
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key() {
        let backend = MemoryBackend::new();
        assert!(backend.get("absent").unwrap().is_none());
    }

    #[test]
    fn set_and_get_key() {
        let backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let backend = MemoryBackend::new();
        backend.set("k", "old").unwrap();
        backend.set("k", "new").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn remove_deletes_key() {
        let backend = MemoryBackend::new();
        backend.set("k", "v").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.get("k").unwrap().is_none());
    }

    #[test]
    fn remove_absent_key_succeeds() {
        let backend = MemoryBackend::new();
        backend.remove("absent").unwrap();
    }

    #[test]
    fn concurrent_reads_and_writes() {
        use std::sync::Arc;
        use std::thread;

        let backend = Arc::new(MemoryBackend::new());
        backend.set("shared", "initial").unwrap();

        let mut handles = vec![];
        for i in 0..5 {
            let backend = Arc::clone(&backend);
            handles.push(thread::spawn(move || {
                for j in 0..50 {
                    backend.set(&format!("key-{i}-{j}"), "v").unwrap();
                    let _ = backend.get("shared").unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().expect("Thread panicked");
        }

        assert!(backend.get("shared").unwrap().is_some());
        assert!(backend.get("key-4-49").unwrap().is_some());
    }
}
