use crate::host::{TiltDriver, TiltHost};
use crate::params::VisualParams;
use glam::Vec2;

/// Deterministic host: a manual clock and a single frame slot.
#[derive(Clone, Debug)]
pub struct SimHost {
    pub size: Option<Vec2>,
    pub focused: bool,
    now_ms: f64,
    next_frame: u32,
    queued: Option<u32>,
    frame_requests: u32,
    applied: Vec<VisualParams>,
}

impl SimHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Some(Vec2::new(width, height)),
            focused: false,
            now_ms: 0.0,
            next_frame: 1,
            queued: None,
            frame_requests: 0,
            applied: Vec::new(),
        }
    }

    /// A host whose surface has been removed.
    pub fn detached() -> Self {
        Self {
            size: None,
            ..Self::new(0.0, 0.0)
        }
    }

    #[inline]
    pub fn queued_frame(&self) -> Option<u32> {
        self.queued
    }

    #[inline]
    pub fn frame_requests(&self) -> u32 {
        self.frame_requests
    }

    #[inline]
    pub fn applied(&self) -> &[VisualParams] {
        &self.applied
    }

    #[inline]
    pub fn last_applied(&self) -> Option<&VisualParams> {
        self.applied.last()
    }

    pub fn advance_clock(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl TiltHost for SimHost {
    type Frame = u32;

    fn surface_size(&self) -> Option<Vec2> {
        self.size
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn request_frame(&mut self) -> Option<u32> {
        if let Some(queued) = self.queued {
            log::error!("[sim] frame requested while frame {} is queued", queued);
            return None;
        }
        let id = self.next_frame;
        self.next_frame += 1;
        self.frame_requests += 1;
        self.queued = Some(id);
        Some(id)
    }

    fn cancel_frame(&mut self, frame: u32) {
        if self.queued == Some(frame) {
            self.queued = None;
        }
    }

    fn apply(&mut self, params: &VisualParams) {
        self.applied.push(*params);
    }
}

impl TiltDriver<SimHost> {
    /// Move the clock forward by `frame_ms` and deliver the queued frame, if
    /// any. Returns whether a frame ran.
    pub fn advance_frame(&mut self, frame_ms: f64) -> bool {
        self.host_mut().advance_clock(frame_ms);
        let Some(frame) = self.host_mut().queued.take() else {
            return false;
        };
        let now = self.host().now_ms();
        self.on_frame(frame, now);
        true
    }

    /// Deliver frames until the loop goes idle or `max_frames` have run.
    /// Returns the number of frames delivered.
    pub fn run_until_idle(&mut self, frame_ms: f64, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.advance_frame(frame_ms) {
            frames += 1;
        }
        frames
    }
}
