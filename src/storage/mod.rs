//! Storage Layer
//!
//! Durable key-value slot abstraction and implementations.
//! Keys are plain strings, payloads are textual; a corrupt or missing
//! payload reads as absent, never as a fatal error.

mod file_store;
mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::domain::DomainResult;

/// Slot key for the serialized task sequence
pub const TASKS_KEY: &str = "tasks";
/// Slot key for the theme setting
pub const THEME_KEY: &str = "theme";

/// Durable key-value slot
///
/// Implementations must survive process restarts (or deliberately not,
/// for the in-memory test store). Reads never fail: anything that cannot
/// be read is reported as absent.
pub trait KeyValueStore: Send + Sync {
    /// Read the payload stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous payload
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}
