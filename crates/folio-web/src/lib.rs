#![cfg(target_arch = "wasm32")]
//! Startup orchestration for the single-page portfolio.
//!
//! Components are wired in a fixed sequence; every failure is local (logged,
//! feature skipped) because nothing on this page is fatal.

mod constants;
mod dom;
mod form;
mod nav;
mod projects;
mod render;
mod reveal;
mod scene;
mod scroll;
mod theme;
mod toast;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    theme::wire_theme_toggle(&window, &document);
    nav::wire_smooth_scroll(&document);

    let scene = scene::SceneHandle::default();
    scroll::wire_scroll_coordinator(&window, &document, scene.clone());

    if let Err(e) = reveal::observe_reveal_targets(&document) {
        log::warn!("reveal observer unavailable: {e:?}");
    }

    projects::load_and_render(document.clone());

    if let Err(e) = form::wire_contact_form(&document) {
        log::warn!("contact form not wired: {e:?}");
    }

    scene::init_scene(&window, &document, scene.clone()).await;
    scene::wire_lifecycle_events(&window, &document, scene);

    wire_global_error_listener(&window);
    Ok(())
}

/// Uncaught runtime errors are logged and the page continues degraded.
fn wire_global_error_listener(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move |ev: web::ErrorEvent| {
        log::error!(
            "uncaught error: {} ({}:{})",
            ev.message(),
            ev.filename(),
            ev.lineno()
        );
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();
}
