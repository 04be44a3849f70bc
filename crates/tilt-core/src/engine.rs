use crate::config::TiltConfig;
use glam::Vec2;

/// Loop state. `last_frame_ms` is `None` until the first frame after a start,
/// so that frame sees `dt = 0` instead of the time spent idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopPhase {
    Idle,
    Running { last_frame_ms: Option<f64> },
}

/// What the caller must do after a call that may start the loop.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// The loop just went idle -> running; exactly one frame must be requested.
    RequestFrame,
    /// Nothing to schedule: the loop was already running or the call was a no-op.
    Unchanged,
}

/// Result of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub current: Vec2,
    pub keep_running: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
}

impl Snapshot {
    #[inline]
    pub fn current(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.target_x, self.target_y)
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        (self.target_x - self.x).hypot(self.target_y - self.y)
    }

    /// Host-side completion check for a return to center.
    #[inline]
    pub fn is_settled_within(&self, distance: f32) -> bool {
        self.distance_to_target() < distance
    }
}

/// `1 - e^(-dt/tau)`: fraction of the remaining distance covered in `dt_sec`.
#[inline]
pub fn smoothing_factor(dt_sec: f32, tau_sec: f32) -> f32 {
    1.0 - (-dt_sec / tau_sec).exp()
}

/// Exponentially smoothed pointer offset with an entrance phase.
///
/// The engine is pure state: it never touches the DOM or a clock. Timestamps
/// are milliseconds on the same timeline as the host's frame callbacks.
#[derive(Clone, Debug)]
pub struct TiltEngine {
    config: TiltConfig,
    current: Vec2,
    target: Vec2,
    phase: LoopPhase,
    initial_until_ms: Option<f64>,
}

impl Default for TiltEngine {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}

impl TiltEngine {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            phase: LoopPhase::Idle,
            initial_until_ms: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, LoopPhase::Running { .. })
    }

    #[inline]
    pub fn initial_until_ms(&self) -> Option<f64> {
        self.initial_until_ms
    }

    pub fn current(&self) -> Snapshot {
        Snapshot {
            x: self.current.x,
            y: self.current.y,
            target_x: self.target.x,
            target_y: self.target.y,
        }
    }

    /// Jump to `at` without animating. Does not start the loop.
    pub fn set_immediate(&mut self, at: Vec2) {
        if !at.is_finite() {
            log::debug!("[tilt] ignoring non-finite immediate offset {:?}", at);
            return;
        }
        self.current = at;
        self.target = at;
    }

    pub fn set_target(&mut self, to: Vec2) -> Wake {
        if !to.is_finite() {
            log::debug!("[tilt] ignoring non-finite target {:?}", to);
            return Wake::Unchanged;
        }
        self.target = to;
        self.start()
    }

    /// Target the geometric center of a surface of `size`, if there is one.
    pub fn to_center(&mut self, size: Option<Vec2>) -> Wake {
        match size {
            Some(size) => self.set_target(size.max(Vec2::ZERO) * 0.5),
            None => Wake::Unchanged,
        }
    }

    /// Open the entrance window `[now_ms, now_ms + duration_ms)` and start the
    /// loop. The window is set once per engine; later calls only start.
    pub fn begin_initial(&mut self, now_ms: f64, duration_ms: f64) -> Wake {
        match self.initial_until_ms {
            None if now_ms.is_finite() && duration_ms.is_finite() && duration_ms >= 0.0 => {
                self.initial_until_ms = Some(now_ms + duration_ms);
                log::debug!("[tilt] entrance phase until {:.1}ms", now_ms + duration_ms);
            }
            None => log::debug!("[tilt] invalid entrance window {now_ms}+{duration_ms}"),
            Some(until) => log::debug!("[tilt] entrance phase already set (until {until:.1}ms)"),
        }
        self.start()
    }

    /// Stop the loop. Returns whether it was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.phase = LoopPhase::Idle;
        was_running
    }

    /// Smoothing time constant in effect for a frame at `ts_ms`.
    pub fn tau_at(&self, ts_ms: f64) -> f32 {
        match self.initial_until_ms {
            Some(until) if ts_ms < until => self.config.initial_tau_sec,
            _ => self.config.tracking_tau_sec,
        }
    }

    /// Advance one frame. Returns `None` when idle, so a frame delivered after
    /// `cancel` cannot move anything.
    pub fn step(&mut self, ts_ms: f64, has_focus: bool) -> Option<Step> {
        let LoopPhase::Running { last_frame_ms } = self.phase else {
            return None;
        };
        let last = last_frame_ms.unwrap_or(ts_ms);
        let dt_sec = ((ts_ms - last) / 1000.0).max(0.0) as f32;
        let k = smoothing_factor(dt_sec, self.tau_at(ts_ms));
        self.current += (self.target - self.current) * k;

        let remaining = (self.target - self.current).abs();
        let eps = self.config.settle_epsilon;
        let keep_running = remaining.x > eps || remaining.y > eps || has_focus;
        self.phase = if keep_running {
            LoopPhase::Running {
                last_frame_ms: Some(ts_ms),
            }
        } else {
            log::trace!("[tilt] settled at ({:.2},{:.2})", self.current.x, self.current.y);
            LoopPhase::Idle
        };

        Some(Step {
            current: self.current,
            keep_running,
        })
    }

    fn start(&mut self) -> Wake {
        if self.is_running() {
            return Wake::Unchanged;
        }
        self.phase = LoopPhase::Running {
            last_frame_ms: None,
        };
        Wake::RequestFrame
    }
}
