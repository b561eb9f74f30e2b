//! Minimal transient notification, treated as an opaque UI primitive.

use web_sys as web;

use folio_core::TOAST_DURATION_MS;

use crate::dom;

pub fn show(document: &web::Document, text: &str) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name("toast");
    el.set_text_content(Some(text));
    if let Some(body) = document.body() {
        let _ = body.append_child(&el);
    }
    if let Some(window) = web::window() {
        dom::set_timeout(&window, TOAST_DURATION_MS, move || {
            el.remove();
        });
    }
}
