//! Navbar wiring: smooth-scroll link clicks and the active-link highlight
//! driven by the scroll coordinator.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ACTIVE_CLASS, NAV_LINK_SELECTOR};

fn link_target_id(el: &web::Element) -> Option<String> {
    let href = el.get_attribute("href")?;
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

pub fn wire_smooth_scroll(document: &web::Document) {
    let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return;
    };
    for i in 0..links.length() {
        let Some(node) = links.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let Some(target_id) = link_target_id(&el) else {
            continue;
        };
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            if let Some(target) = doc.get_element_by_id(&target_id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Mark the link targeting `section_id` active and clear all others.
pub fn set_active_link(document: &web::Document, section_id: Option<&str>) {
    let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return;
    };
    for i in 0..links.length() {
        let Some(node) = links.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let is_active = matches!((link_target_id(&el), section_id), (Some(t), Some(id)) if t == id);
        if is_active {
            let _ = el.class_list().add_1(ACTIVE_CLASS);
        } else {
            let _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}
