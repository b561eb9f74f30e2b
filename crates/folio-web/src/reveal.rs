//! Reveal-on-scroll wiring: an IntersectionObserver marks elements with a
//! one-shot fade-in class and kicks off skill-bar fills.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    should_reveal, skill_fill_percent, RevealSet, REVEAL_BOTTOM_INSET_PX, REVEAL_THRESHOLD,
    SKILL_FILL_DELAY_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{REVEAL_SELECTOR, SKILL_FILL_SELECTOR, VISIBLE_CLASS};
use crate::dom;

const KEY_ATTR: &str = "data-reveal-key";

pub fn observe_reveal_targets(document: &web::Document) -> anyhow::Result<()> {
    let revealed = Rc::new(RefCell::new(RevealSet::default()));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !should_reveal(entry.intersection_ratio()) {
                    continue;
                }
                let target = entry.target();
                let key = target.get_attribute(KEY_ATTR).unwrap_or_default();
                // Monotonic: a repeat callback for a revealed element is a no-op.
                if !revealed.borrow_mut().mark(&key) {
                    continue;
                }
                let _ = target.class_list().add_1(VISIBLE_CLASS);
                if let Some(level) = target
                    .get_attribute("data-level")
                    .and_then(|v| v.parse::<f64>().ok())
                {
                    schedule_skill_fill(&target, level);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    // Shrink the viewport at the bottom so elements reveal a little late.
    options.set_root_margin(&format!("0px 0px -{REVEAL_BOTTOM_INSET_PX}px 0px"));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    callback.forget();

    let targets = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    for i in 0..targets.length() {
        let Some(node) = targets.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let _ = el.set_attribute(KEY_ATTR, &i.to_string());
        observer.observe(&el);
    }
    log::info!("observing {} reveal targets", targets.length());
    Ok(())
}

/// Fill the bar to the declared level after a fixed delay, so the fade-in
/// and the bar fill visually stagger.
fn schedule_skill_fill(target: &web::Element, level: f64) {
    let Some(window) = web::window() else { return };
    let bar = target.query_selector(SKILL_FILL_SELECTOR).ok().flatten();
    let pct = skill_fill_percent(level);
    dom::set_timeout(&window, SKILL_FILL_DELAY_MS, move || {
        if let Some(el) = bar.and_then(|b| b.dyn_into::<web::HtmlElement>().ok()) {
            let _ = el.style().set_property("width", &format!("{pct}%"));
        }
    });
}
