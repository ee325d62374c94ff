//! Directory Cache
//!
//! Holds the snapshot for one activation. Created loading, then settles
//! exactly once into ready or failed; both states are terminal until the
//! cache is dropped and a fresh activation begins.

use crate::domain::Person;

use super::DirectoryClient;

/// Fetch lifecycle of one activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch not yet resolved
    Loading,
    /// Snapshot available
    Ready,
    /// Fetch failed; carries the human-readable detail
    Failed(String),
}

/// Cached snapshot of the remote directory
pub struct DirectoryCache {
    records: Vec<Person>,
    status: LoadStatus,
}

impl DirectoryCache {
    /// Fresh activation, nothing fetched yet
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            status: LoadStatus::Loading,
        }
    }

    /// Resolve the one-shot fetch.
    /// Once settled, further calls are silent no-ops; there is no retry
    /// or refresh within an activation.
    pub async fn load(&mut self, client: &dyn DirectoryClient) {
        if self.status != LoadStatus::Loading {
            return;
        }
        match client.fetch().await {
            Ok(records) => {
                self.records = records;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Failure detail, if the activation failed
    pub fn error_detail(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(detail) => Some(detail),
            _ => None,
        }
    }

    /// The full snapshot (empty unless ready)
    pub fn records(&self) -> &[Person] {
        &self.records
    }

    /// Order-preserving case-insensitive search over name, email, and
    /// company name. An empty term returns the whole snapshot.
    pub fn search(&self, term: &str) -> Vec<&Person> {
        self.records.iter().filter(|p| p.matches(term)).collect()
    }
}

impl Default for DirectoryCache {
    fn default() -> Self {
        Self::new()
    }
}
