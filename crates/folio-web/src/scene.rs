//! Particle scene lifecycle: owns the point cloud, the camera, and the GPU
//! state; runs the per-frame update loop and reacts to resize and tab
//! visibility.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    wide_enough, Camera, ParticleField, SceneState, SceneTransition, PARTICLE_COUNT,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CANVAS_ID;
use crate::{dom, render};

pub struct Scene {
    field: ParticleField,
    state: SceneState,
    camera: Camera,
    gpu: render::GpuState<'static>,
    canvas: web::HtmlCanvasElement,
}

impl Scene {
    fn frame(&mut self) {
        self.field.advance_frame();
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.aspect = self.gpu.aspect();
        let model_view = self.camera.view_matrix() * self.field.model_matrix();
        let proj = self.camera.projection_matrix();
        if let Err(e) = self.gpu.render(model_view, proj) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Shared handle the orchestrator and the scroll coordinator both hold.
/// None until (and unless) initialization succeeds.
#[derive(Clone, Default)]
pub struct SceneHandle {
    inner: Rc<RefCell<Option<Scene>>>,
}

impl SceneHandle {
    /// Scroll position feeds the third rotation axis directly, only while
    /// the scene is running.
    pub fn set_scroll(&self, scroll_y: f64) {
        if let Some(scene) = self.inner.borrow_mut().as_mut() {
            if scene.state.is_running() {
                scene.field.set_scroll(scroll_y);
            }
        }
    }
}

/// Build the point cloud and GPU state. Capability absence (no WebGPU
/// adapter) or a missing canvas skips the decorative feature entirely.
pub async fn init_scene(window: &web::Window, document: &web::Document, handle: SceneHandle) {
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("missing #{CANVAS_ID}; skipping particle background");
        return;
    };
    let Ok(canvas) = canvas_el.dyn_into::<web::HtmlCanvasElement>() else {
        log::warn!("#{CANVAS_ID} is not a canvas; skipping particle background");
        return;
    };
    dom::sync_canvas_backing_size(&canvas);

    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(PARTICLE_COUNT, seed);

    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas, &field).await {
        Ok(g) => g,
        Err(e) => {
            log::warn!("WebGPU unavailable; skipping particle background: {e:?}");
            dom::hide_element(&canvas);
            return;
        }
    };

    let camera = Camera::fixed(gpu.aspect());
    let mut scene = Scene {
        field,
        state: SceneState::new(),
        camera,
        gpu,
        canvas: canvas.clone(),
    };
    let want = wide_enough(dom::viewport_width(window)) && !document.hidden();
    let transition = scene.state.apply(want);
    *handle.inner.borrow_mut() = Some(scene);

    if transition == SceneTransition::Resumed {
        log::info!("particle scene running ({PARTICLE_COUNT} particles)");
        start_loop(handle);
    } else {
        dom::hide_element(&canvas);
    }
}

/// Kick the requestAnimationFrame loop. The loop reschedules itself only
/// while Running; when suspended it marks itself dead and stops, and
/// `evaluate` kicks a fresh chain on resume only if no old one is pending.
fn start_loop(handle: SceneHandle) {
    if let Some(scene) = handle.inner.borrow_mut().as_mut() {
        scene.state.mark_loop_started();
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut keep_going = false;
        if let Some(scene) = handle_tick.inner.borrow_mut().as_mut() {
            if scene.state.is_running() {
                scene.frame();
                keep_going = true;
            } else {
                scene.state.mark_loop_stopped();
            }
        }
        if keep_going {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Resize below the narrow breakpoint or a hidden tab suspends the scene and
/// hides the canvas; widening or becoming visible again resumes it.
pub fn wire_lifecycle_events(window: &web::Window, document: &web::Document, handle: SceneHandle) {
    {
        let h = handle.clone();
        let closure = Closure::wrap(Box::new(move || evaluate(&h)) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let h = handle;
        let closure = Closure::wrap(Box::new(move || evaluate(&h)) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn evaluate(handle: &SceneHandle) {
    let Some((window, document)) = dom::window_document() else {
        return;
    };
    let want = wide_enough(dom::viewport_width(&window)) && !document.hidden();
    let mut kick = false;
    if let Some(scene) = handle.inner.borrow_mut().as_mut() {
        match scene.state.apply(want) {
            SceneTransition::Suspended => {
                dom::hide_element(&scene.canvas);
            }
            SceneTransition::Resumed => {
                dom::show_element(&scene.canvas);
                // Projection picks up the new aspect on the next frame.
                dom::sync_canvas_backing_size(&scene.canvas);
            }
            SceneTransition::None => {
                if scene.state.is_running() {
                    dom::sync_canvas_backing_size(&scene.canvas);
                }
            }
        }
        // A suspend/resume pair can complete before the old tick ever
        // fires; that chain is still queued and will carry on, so kicking
        // another here would double the loop.
        kick = scene.state.needs_kick();
    }
    if kick {
        start_loop(handle.clone());
    }
}
