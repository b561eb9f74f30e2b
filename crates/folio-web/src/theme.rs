//! Theme toggle wiring: localStorage persistence plus the document-level
//! `data-theme` attribute the stylesheet keys off.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{PreferenceStore, Theme, ThemeStore};
use web_sys as web;

use crate::constants::THEME_TOGGLE_ID;
use crate::dom;

pub struct LocalStoragePrefs {
    storage: Option<web::Storage>,
}

impl LocalStoragePrefs {
    pub fn new(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStoragePrefs {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            let _ = s.set_item(key, value);
        }
    }
}

fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    // The toggle shows the theme you would switch to.
    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let glyph = match theme {
            Theme::Dark => "\u{2600}",  // sun
            Theme::Light => "\u{263E}", // moon
        };
        button.set_text_content(Some(glyph));
    }
}

/// Load the persisted preference, apply it, and wire the toggle button.
pub fn wire_theme_toggle(window: &web::Window, document: &web::Document) {
    let store = Rc::new(RefCell::new(ThemeStore::load(LocalStoragePrefs::new(
        window,
    ))));
    apply_theme(document, store.borrow().current());

    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let theme = store.borrow_mut().toggle();
        apply_theme(&doc, theme);
    });
}
