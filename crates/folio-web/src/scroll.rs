//! Scroll coordinator: every raw scroll event schedules at most one visual
//! update on the next display frame, guarded by the single-slot FrameGate.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{active_section, header_condensed, parallax_offset, FrameGate, SectionSpan};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HEADER_SELECTOR, HERO_ID, SCROLLED_CLASS, SECTION_SELECTOR};
use crate::{dom, nav, scene};

pub fn wire_scroll_coordinator(
    window: &web::Window,
    document: &web::Document,
    scene: scene::SceneHandle,
) {
    let gate = Rc::new(RefCell::new(FrameGate::default()));

    let doc = document.clone();
    let gate_update = gate.clone();
    let update: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new(move || {
        run_throttled_update(&doc, &scene);
        gate_update.borrow_mut().release();
    }) as Box<dyn FnMut()>));

    let on_scroll = Closure::wrap(Box::new(move || {
        // At most one pending frame callback regardless of event rate.
        if !gate.borrow_mut().try_queue() {
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(update.as_ref().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

fn run_throttled_update(document: &web::Document, scene: &scene::SceneHandle) {
    let Some(window) = web::window() else { return };
    let scroll_y = dom::scroll_y(&window);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    // Hero parallax; skipped entirely once the hero is scrolled off screen.
    if let Some(offset) = parallax_offset(scroll_y, viewport_h) {
        if let Some(hero) = document
            .get_element_by_id(HERO_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            let _ = hero
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
    }

    // Header background/blur intensification.
    if let Ok(Some(header)) = document.query_selector(HEADER_SELECTOR) {
        if header_condensed(scroll_y) {
            let _ = header.class_list().add_1(SCROLLED_CLASS);
        } else {
            let _ = header.class_list().remove_1(SCROLLED_CLASS);
        }
    }

    // Active-nav highlight.
    let sections = measure_sections(document);
    nav::set_active_link(document, active_section(&sections, scroll_y));

    // Particle scroll rotation (no-op unless the scene is running).
    scene.set_scroll(scroll_y);
}

fn measure_sections(document: &web::Document) -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    let Ok(sections) = document.query_selector_all(SECTION_SELECTOR) else {
        return spans;
    };
    for i in 0..sections.length() {
        let Some(node) = sections.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        spans.push(SectionSpan {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        });
    }
    spans
}
