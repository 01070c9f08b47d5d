//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! `ThemeStore` owns the current theme plus two seams: a `PreferenceStorage`
//! backend (browser `localStorage` or in-memory) and a `ThemeSink` that
//! applies the theme to the page. Storage failures never reach callers; the
//! store keeps its in-memory value for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::THEME_STORAGE_KEY;

/// Presentation theme written to the document's `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but `light`/`dark` counts as unset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Message shown in the toast after a manual switch.
    #[must_use]
    pub fn switched_message(self) -> &'static str {
        match self {
            Self::Light => "Switched to light mode",
            Self::Dark => "Switched to dark mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Key-value persistence used by the theme store.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Receives every theme change so it can be reflected in the page.
pub trait ThemeSink {
    fn apply(&mut self, theme: Theme);
}

/// In-memory storage, also usable to simulate an unavailable backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects every read and write.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), unavailable: true }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ThemeStore<S, A> {
    storage: S,
    sink: A,
    current: Theme,
    explicit: bool,
}

impl<S: PreferenceStorage, A: ThemeSink> ThemeStore<S, A> {
    /// Read the persisted preference once and apply it. Defaults to light.
    pub fn load(storage: S, mut sink: A) -> Self {
        let stored = match storage.read(THEME_STORAGE_KEY) {
            Ok(raw) => raw.as_deref().and_then(Theme::parse),
            Err(e) => {
                log::debug!("theme preference unreadable, using default: {e}");
                None
            }
        };
        let current = stored.unwrap_or_default();
        sink.apply(current);
        Self { storage, sink, current, explicit: stored.is_some() }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.current
    }

    /// Whether the user has made a choice this store knows about.
    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.explicit
    }

    /// Persist and apply `theme`.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.explicit = true;
        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, theme.as_str()) {
            log::debug!("theme preference kept in memory only: {e}");
        }
        self.sink.apply(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Follow a system color-scheme change unless the user chose explicitly.
    ///
    /// Returns `true` when the theme was applied.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if self.explicit {
            return false;
        }
        self.current = Theme::from_prefers_dark(prefers_dark);
        self.sink.apply(self.current);
        true
    }

    pub fn into_parts(self) -> (S, A) {
        (self.storage, self.sink)
    }
}
