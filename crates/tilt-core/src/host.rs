use crate::config::TiltConfig;
use crate::engine::{Snapshot, TiltEngine, Wake};
use crate::params::VisualParams;
use glam::Vec2;

/// Platform side of a tilt card: geometry, focus, clock, frame scheduling
/// and style output.
pub trait TiltHost {
    /// Handle for one pending frame request.
    type Frame: Copy + PartialEq;

    /// Surface size in CSS pixels, or `None` when the element is gone.
    fn surface_size(&self) -> Option<Vec2>;
    fn has_focus(&self) -> bool;
    /// Milliseconds on the same timeline as frame timestamps.
    fn now_ms(&self) -> f64;
    fn request_frame(&mut self) -> Option<Self::Frame>;
    fn cancel_frame(&mut self, frame: Self::Frame);
    fn apply(&mut self, params: &VisualParams);
}

/// Couples one [`TiltEngine`] to one host and keeps at most one frame pending.
pub struct TiltDriver<H: TiltHost> {
    engine: TiltEngine,
    host: H,
    pending: Option<H::Frame>,
}

impl<H: TiltHost> TiltDriver<H> {
    pub fn new(config: TiltConfig, host: H) -> Self {
        Self {
            engine: TiltEngine::new(config),
            host,
            pending: None,
        }
    }

    #[inline]
    pub fn engine(&self) -> &TiltEngine {
        &self.engine
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<H::Frame> {
        self.pending
    }

    pub fn current(&self) -> Snapshot {
        self.engine.current()
    }

    pub fn set_immediate(&mut self, x: f32, y: f32) {
        self.engine.set_immediate(Vec2::new(x, y));
        self.emit();
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        let wake = self.engine.set_target(Vec2::new(x, y));
        self.wake(wake);
    }

    pub fn to_center(&mut self) {
        let size = self.host.surface_size();
        let wake = self.engine.to_center(size);
        self.wake(wake);
    }

    pub fn begin_initial(&mut self, duration_ms: f64) {
        let now = self.host.now_ms();
        let wake = self.engine.begin_initial(now, duration_ms);
        self.wake(wake);
    }

    /// Mount-time entrance: start off-center, then drift slowly to rest.
    pub fn play_entrance(&mut self) {
        let width = self.host.surface_size().map_or(0.0, |s| s.x);
        let start = self.engine.config().entrance_point(width);
        let duration = self.engine.config().initial_duration_ms;
        self.set_immediate(start.x, start.y);
        self.to_center();
        self.begin_initial(duration);
    }

    /// Whether a return to center is close enough to drop the active look.
    pub fn is_released(&self) -> bool {
        let distance = self.engine.config().release_distance;
        self.engine.current().is_settled_within(distance)
    }

    /// Stop the loop and drop any queued frame. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.host.cancel_frame(frame);
        }
        if self.engine.cancel() {
            log::debug!("[tilt] loop cancelled");
        }
    }

    /// Frame callback entry point. Only the pending request may step the
    /// engine; a frame cancelled or superseded earlier is dropped.
    pub fn on_frame(&mut self, frame: H::Frame, ts_ms: f64) {
        if self.pending != Some(frame) {
            log::debug!("[tilt] dropping stale frame");
            return;
        }
        self.pending = None;
        let has_focus = self.host.has_focus();
        let Some(step) = self.engine.step(ts_ms, has_focus) else {
            return;
        };
        self.emit();
        if step.keep_running {
            self.schedule();
        }
    }

    fn wake(&mut self, wake: Wake) {
        if wake == Wake::RequestFrame {
            self.schedule();
        }
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("[tilt] frame request failed; stopping loop");
            self.engine.cancel();
        }
    }

    fn emit(&mut self) {
        let Some(size) = self.host.surface_size() else {
            return;
        };
        let params = VisualParams::derive(self.engine.current().current(), size);
        self.host.apply(&params);
    }
}

impl<H: TiltHost> Drop for TiltDriver<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
