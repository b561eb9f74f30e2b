// Host-side tests for the theme preference store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::{PreferenceStore, Theme, ThemeStore, THEME_STORAGE_KEY};

/// In-memory stand-in for localStorage.
#[derive(Clone, Default)]
struct MemPrefs {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemPrefs {
    fn read(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[test]
fn default_is_dark_when_nothing_stored() {
    let store = ThemeStore::load(MemPrefs::default());
    assert_eq!(store.current(), Theme::Dark);
}

#[test]
fn corrupt_stored_value_parses_as_default() {
    let prefs = MemPrefs::default();
    prefs.write(THEME_STORAGE_KEY, "neon");
    let store = ThemeStore::load(prefs);
    assert_eq!(store.current(), Theme::Dark);
}

#[test]
fn stored_light_preference_is_honored() {
    let prefs = MemPrefs::default();
    prefs.write(THEME_STORAGE_KEY, "light");
    let store = ThemeStore::load(prefs);
    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn toggling_twice_returns_to_the_original_theme() {
    let mut store = ThemeStore::load(MemPrefs::default());
    let original = store.current();
    store.toggle();
    assert_ne!(store.current(), original);
    store.toggle();
    assert_eq!(store.current(), original);
}

#[test]
fn persisted_value_always_matches_last_applied() {
    let prefs = MemPrefs::default();
    let mut store = ThemeStore::load(prefs.clone());
    for _ in 0..5 {
        let applied = store.toggle();
        assert_eq!(
            prefs.read(THEME_STORAGE_KEY).as_deref(),
            Some(applied.as_str())
        );
    }
}

#[test]
fn toggled_is_an_involution() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}
