use crate::dom;
use crate::frame::{self, FrameClosure};
use crate::input;
use glam::Vec2;
use tilt_core::{TiltHost, VisualParams};
use web_sys as web;

/// Browser side of one card: the shell is measured, the wrapper receives the
/// CSS variables, and frames come from `requestAnimationFrame`.
pub struct DomHost {
    window: web::Window,
    wrapper: web::HtmlElement,
    shell: web::HtmlElement,
    tick: FrameClosure,
}

impl DomHost {
    pub fn new(
        window: web::Window,
        wrapper: web::HtmlElement,
        shell: web::HtmlElement,
        tick: FrameClosure,
    ) -> Self {
        Self {
            window,
            wrapper,
            shell,
            tick,
        }
    }
}

impl TiltHost for DomHost {
    type Frame = i32;

    fn surface_size(&self) -> Option<Vec2> {
        input::element_size(&self.shell)
    }

    fn has_focus(&self) -> bool {
        dom::document_has_focus(&self.window)
    }

    fn now_ms(&self) -> f64 {
        dom::now_ms(&self.window)
    }

    fn request_frame(&mut self) -> Option<i32> {
        frame::request(&self.window, &self.tick)
    }

    fn cancel_frame(&mut self, frame: i32) {
        frame::cancel(&self.window, frame);
    }

    fn apply(&mut self, params: &VisualParams) {
        log::trace!(
            "[tilt] px={:.1} py={:.1} rx={:.2} ry={:.2}",
            params.pointer_x,
            params.pointer_y,
            params.rotate_x,
            params.rotate_y
        );
        dom::set_css_vars(&self.wrapper, &params.css_vars());
    }
}
