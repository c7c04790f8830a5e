//! In-memory stores for tests.

use std::{cell::RefCell, collections::HashMap, io, rc::Rc};

use super::{KeyValueStore, Result};

/// Key-value store held in memory.
///
/// Clones share the same entries, so a test can keep a handle on the store
/// it passed into a tracker and inspect or reopen it afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of keys written so far.
    pub fn key_count(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store whose every read and write fails, like a full or unavailable disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(io::Error::other("store unavailable").into())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(io::Error::other("quota exceeded").into())
    }
}
