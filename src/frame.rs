use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` callback; receives the frame timestamp in ms.
pub type FrameClosure = Closure<dyn FnMut(f64)>;

pub fn frame_closure(f: impl FnMut(f64) + 'static) -> FrameClosure {
    Closure::wrap(Box::new(f) as Box<dyn FnMut(f64)>)
}

pub fn request(window: &web::Window, cb: &FrameClosure) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

#[inline]
pub fn cancel(window: &web::Window, id: i32) {
    _ = window.cancel_animation_frame(id);
}

/// A single self-rescheduling frame slot: at most one request is pending.
pub struct FrameSlot {
    window: web::Window,
    pending: Option<i32>,
}

impl FrameSlot {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Request a frame unless one is already pending.
    pub fn arm(&mut self, cb: &FrameClosure) {
        if self.pending.is_none() {
            self.pending = request(&self.window, cb);
        }
    }

    /// Mark the pending frame as delivered. Call first thing in the callback.
    #[inline]
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            cancel(&self.window, id);
        }
    }
}
