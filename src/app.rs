//! Application Wiring
//!
//! Explicit construction replaces the original's component lifecycle:
//! build once over a storage backend, then drive the stores by method
//! calls. Directory activations are created per view visit.

use std::path::PathBuf;
use std::sync::Arc;

use crate::directory::DirectoryCache;
use crate::domain::DomainResult;
use crate::storage::{FileStore, KeyValueStore};
use crate::tasks::TaskStore;
use crate::theme::ThemeManager;

/// One running instance of the application core
pub struct App {
    pub tasks: TaskStore,
    pub theme: ThemeManager,
}

impl App {
    /// Build over any slot backend, hydrating both persisted stores
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            tasks: TaskStore::hydrate(storage.clone()),
            theme: ThemeManager::hydrate(storage),
        }
    }

    /// Build over a file-backed slot rooted at `data_dir`
    pub fn open(data_dir: impl Into<PathBuf>) -> DomainResult<Self> {
        let storage = FileStore::new(data_dir)?;
        Ok(Self::new(Arc::new(storage)))
    }

    /// Begin a directory activation: a fresh cache in the loading state
    pub fn activate_directory(&self) -> DirectoryCache {
        DirectoryCache::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::LoadStatus;
    use crate::domain::Theme;

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut app = App::open(dir.path()).unwrap();
            app.tasks.add("buy milk");
            app.theme.set(Theme::Dark);
        }

        let app = App::open(dir.path()).unwrap();
        assert_eq!(app.tasks.tasks().len(), 1);
        assert_eq!(app.tasks.tasks()[0].text, "buy milk");
        assert_eq!(app.theme.theme(), Theme::Dark);
    }

    #[test]
    fn test_activation_starts_loading() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::open(dir.path()).unwrap();
        let cache = app.activate_directory();
        assert_eq!(*cache.status(), LoadStatus::Loading);
    }
}
