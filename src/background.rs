//! JS-facing handle that mounts the particle engine on a canvas and drives it
//! from the browser's animation-frame loop.
//!
//! The handle owns every callback it hands to the browser. `stop` cancels the
//! pending frame request, detaches the window listeners and drops the closures;
//! dropping the handle (or calling `free()` from JS) does the same.

use std::cell::RefCell;
use std::rc::Rc;

use particles::config::FieldConfig;
use particles::engine::Engine;
use particles::scheduler::FrameLoop;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, Window};

use crate::listeners::Registrations;
use crate::viewport::{pointer_in_surface, surface_size};

type FrameCallback = Closure<dyn FnMut(f64)>;
type TickSlot = Rc<RefCell<Option<FrameCallback>>>;
type Listener = Closure<dyn FnMut(Event)>;

/// State shared between the handle and its browser callbacks.
struct Shared {
    engine: Engine,
    frame_loop: FrameLoop,
    height_fraction: f64,
}

/// Animated particle backdrop bound to a `<canvas>` element.
#[wasm_bindgen]
pub struct ParticlesBackground {
    canvas: HtmlCanvasElement,
    shared: Rc<RefCell<Shared>>,
    tick: TickSlot,
    listeners: Registrations<Listener>,
}

#[wasm_bindgen]
impl ParticlesBackground {
    /// Bind to `canvas`. `config` is an optional JSON override document,
    /// e.g. `{"preset": "rising"}`. Nothing is drawn until [`Self::start`].
    ///
    /// # Errors
    ///
    /// Returns the validation message when `config` is rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: Option<String>) -> Result<ParticlesBackground, JsValue> {
        let config = match config.as_deref() {
            Some(raw) => FieldConfig::from_json(raw).map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => FieldConfig::default(),
        };
        let height_fraction = config.height_fraction;
        let engine = Engine::new(canvas.clone(), config, js_sys::Math::random().to_bits());
        Ok(Self {
            canvas,
            shared: Rc::new(RefCell::new(Shared { engine, frame_loop: FrameLoop::new(), height_fraction })),
            tick: Rc::new(RefCell::new(None)),
            listeners: Registrations::new(),
        })
    }

    /// Size the surface, attach listeners, and schedule the first frame.
    ///
    /// Calling `start` on a running backdrop does nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err` when there is no window or a listener/frame request is
    /// refused; the backdrop is left stopped.
    pub fn start(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("particles: no window"))?;
        let Some(generation) = self.shared.borrow_mut().frame_loop.start() else {
            return Ok(());
        };

        // A run that died on a refused frame request left its callbacks behind.
        self.release_callbacks(Some(&window));

        sync_viewport(&window, &self.shared);
        if let Err(err) = self.attach_listeners(&window) {
            self.stop();
            return Err(err);
        }

        *self.tick.borrow_mut() = Some(frame_callback(Rc::clone(&self.shared), Rc::clone(&self.tick), generation));
        if let Err(err) = request_frame(&window, &self.shared, &self.tick) {
            self.stop();
            return Err(err);
        }

        log::info!("particle backdrop started: {} particles", self.particle_count());
        Ok(())
    }

    /// Cancel the pending frame and detach from the window. Idempotent.
    pub fn stop(&mut self) {
        let pending = self.shared.borrow_mut().frame_loop.stop();
        let window = web_sys::window();
        if let (Some(window), Some(handle)) = (&window, pending) {
            if let Err(err) = window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        if self.release_callbacks(window.as_ref()) {
            log::debug!("particle backdrop stopped after {} frames", self.shared.borrow().engine.frame_count());
        }
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.shared.borrow().frame_loop.is_running()
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.shared.borrow().engine.particle_count()
    }
}

impl ParticlesBackground {
    fn attach_listeners(&mut self, window: &Window) -> Result<(), JsValue> {
        let shared = Rc::clone(&self.shared);
        let on_resize = Listener::new(move |_ev: Event| {
            if let Some(window) = web_sys::window() {
                sync_viewport(&window, &shared);
            }
        });
        self.attach(window, "resize", on_resize)?;

        let shared = Rc::clone(&self.shared);
        let canvas = self.canvas.clone();
        let on_mouse_move = Listener::new(move |ev: Event| {
            let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let pt = pointer_in_surface(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top());
            shared.borrow_mut().engine.on_pointer_move(pt);
        });
        self.attach(window, "mousemove", on_mouse_move)
    }

    fn attach(&mut self, window: &Window, event: &'static str, callback: Listener) -> Result<(), JsValue> {
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        if let Some(displaced) = self.listeners.insert(event, callback) {
            detach(window, event, &displaced);
        }
        Ok(())
    }

    /// Detach every listener and drop every closure handed to the browser.
    /// Returns whether there was anything to release.
    fn release_callbacks(&mut self, window: Option<&Window>) -> bool {
        let listeners = self.listeners.drain();
        if let Some(window) = window {
            for (event, callback) in &listeners {
                detach(window, event, callback);
            }
        }
        let had_tick = self.tick.borrow_mut().take().is_some();
        had_tick || !listeners.is_empty()
    }
}

fn detach(window: &Window, event: &str, callback: &Listener) {
    if let Err(err) = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("failed to detach {event} listener: {err:?}");
    }
}

impl Drop for ParticlesBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Resize the surface to the current window and regenerate the field.
fn sync_viewport(window: &Window, shared: &RefCell<Shared>) {
    let (Ok(width), Ok(height)) = (window.inner_width(), window.inner_height()) else {
        log::warn!("window dimensions unavailable; keeping current surface");
        return;
    };
    let mut state = shared.borrow_mut();
    let size = surface_size(width.as_f64().unwrap_or(0.0), height.as_f64().unwrap_or(0.0), state.height_fraction);
    state.engine.set_viewport(size.width, size.height);
}

/// The recurring frame body. Reschedules itself through `tick` until the run
/// stamped `generation` ends.
fn frame_callback(shared: Rc<RefCell<Shared>>, tick: TickSlot, generation: u64) -> FrameCallback {
    Closure::new(move |_ts: f64| {
        {
            let mut state = shared.borrow_mut();
            if !state.frame_loop.begin_frame(generation) {
                return;
            }
            if let Err(err) = state.engine.frame() {
                log::warn!("particle frame failed: {err:?}");
            }
        }
        let Some(window) = web_sys::window() else {
            shared.borrow_mut().frame_loop.stop();
            return;
        };
        if let Err(err) = request_frame(&window, &shared, &tick) {
            log::warn!("requestAnimationFrame failed, stopping backdrop: {err:?}");
            shared.borrow_mut().frame_loop.stop();
        }
    })
}

fn request_frame(window: &Window, shared: &RefCell<Shared>, tick: &TickSlot) -> Result<(), JsValue> {
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        return Ok(());
    };
    let handle = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    shared.borrow_mut().frame_loop.scheduled(handle);
    Ok(())
}
