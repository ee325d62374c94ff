//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for serialization).

mod error;
mod person;
mod task;
mod theme;

pub use error::{DomainError, DomainResult};
pub use person::{Company, Person};
pub use task::{Task, TaskCounts, TaskFilter};
pub use theme::Theme;
