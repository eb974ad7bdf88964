//! Durable storage for the high score
//!
//! A store maps fixed string keys to integers. Backends:
//! - `LocalStorageStore`: browser LocalStorage (wasm32 only)
//! - [`MemoryStore`]: in-process map, used natively and in tests
//! - [`NullStore`]: storage disabled; reads are absent, writes fail

use std::collections::HashMap;
use std::fmt;

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Storage failure. Callers log these; they never interrupt a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No backing storage (disabled, private mode, sandboxed iframe)
    Unavailable,
    /// The backend rejected the write (quota, security error)
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage unavailable"),
            StoreError::Write(reason) => write!(f, "storage write failed: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// Key/value store for durable integers
pub trait ScoreStore {
    /// Read a value; absent or unreadable values are `None`
    fn get(&self, key: &str) -> Option<u32>;
    /// Write a value
    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: &str, value: u32) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}

/// Store with no backing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn get(&self, _key: &str) -> Option<u32> {
        None
    }

    fn set(&mut self, _key: &str, _value: u32) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
