//! Theme Manager
//!
//! Process-wide theme setting persisted through the same durable slot as
//! the task list. Explicit subscribers replace the original's context
//! propagation: callbacks run synchronously after every effective change.

use std::sync::Arc;

use log::warn;

use crate::domain::Theme;
use crate::storage::{KeyValueStore, THEME_KEY};

type ThemeListener = Box<dyn Fn(Theme) + Send>;

/// Persisted theme setting with change subscribers
pub struct ThemeManager {
    theme: Theme,
    storage: Arc<dyn KeyValueStore>,
    listeners: Vec<ThemeListener>,
}

impl ThemeManager {
    /// Hydrate from the durable slot.
    /// Absent or unrecognized payloads fall back to the light default.
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .map(|raw| Theme::from_str(raw.trim()))
            .unwrap_or_default();
        Self {
            theme,
            storage,
            listeners: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme, persist best-effort, and notify subscribers.
    /// Setting the current value again does nothing.
    pub fn set(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
        for listener in &self.listeners {
            listener(theme);
        }
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) {
        self.set(self.theme.toggled());
    }

    /// Register a change subscriber for the manager's lifetime
    pub fn on_change(&mut self, listener: impl Fn(Theme) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }
}
