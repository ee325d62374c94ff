//! TaskFlow Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - storage: Durable key-value slot abstraction and implementations
//! - tasks: Persisted task list store
//! - directory: Remote user directory cache, search, and pagination
//! - theme: Shared theme setting with subscribers
//! - app: Explicit wiring in place of a framework lifecycle

pub mod app;
pub mod directory;
pub mod domain;
pub mod storage;
pub mod tasks;
pub mod theme;

pub use app::App;
pub use directory::{
    DirectoryCache, DirectoryClient, DirectoryQuery, HttpDirectoryClient, LoadStatus,
};
pub use domain::{Company, DomainError, DomainResult, Person, Task, TaskCounts, TaskFilter, Theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::TaskStore;
pub use theme::ThemeManager;
