#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{Theme, ThemeSink, ThemeStore};

struct NoopSink;

impl ThemeSink for NoopSink {
    fn apply(&mut self, _theme: Theme) {}
}

#[test]
fn read_is_unavailable_outside_browser() {
    assert_eq!(BrowserStorage.read("theme"), Err(StorageError::Unavailable));
}

#[test]
fn write_is_unavailable_outside_browser() {
    let mut storage = BrowserStorage;
    assert_eq!(storage.write("theme", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn theme_store_over_browser_storage_stays_in_memory() {
    let mut store = ThemeStore::load(BrowserStorage, NoopSink);
    assert_eq!(store.get(), Theme::Light);
    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.get(), Theme::Dark);
}
