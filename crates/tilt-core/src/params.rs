use crate::constants::{
    BACKGROUND_MAX, BACKGROUND_MIN, CENTER_PERCENT, ROTATE_X_DIVISOR, ROTATE_Y_DIVISOR,
};
use glam::Vec2;
use smallvec::SmallVec;

/// CSS custom properties written on the card wrapper, in emission order.
pub type CssVars = SmallVec<[(&'static str, String); 9]>;

pub const POINTER_X: &str = "--pointer-x";
pub const POINTER_Y: &str = "--pointer-y";
pub const BACKGROUND_X: &str = "--background-x";
pub const BACKGROUND_Y: &str = "--background-y";
pub const POINTER_FROM_CENTER: &str = "--pointer-from-center";
pub const POINTER_FROM_TOP: &str = "--pointer-from-top";
pub const POINTER_FROM_LEFT: &str = "--pointer-from-left";
pub const ROTATE_X: &str = "--rotate-x";
pub const ROTATE_Y: &str = "--rotate-y";

/// Visual parameters derived from one smoothed pointer offset.
///
/// Percentages are in `0..=100`, ratios in `0..=1`, rotations in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub background_x: f64,
    pub background_y: f64,
    pub pointer_from_center: f64,
    pub pointer_from_top: f64,
    pub pointer_from_left: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl VisualParams {
    /// Derive parameters for `offset` on a surface of `size` pixels.
    ///
    /// Degenerate sizes are treated as 1px so the result is always finite.
    pub fn derive(offset: Vec2, size: Vec2) -> Self {
        let w = positive_or_one(f64::from(size.x));
        let h = positive_or_one(f64::from(size.y));
        let px = clamp_percent(100.0 / w * f64::from(offset.x));
        let py = clamp_percent(100.0 / h * f64::from(offset.y));

        Self {
            pointer_x: px,
            pointer_y: py,
            background_x: round3(remap(px, 0.0, 100.0, BACKGROUND_MIN, BACKGROUND_MAX)),
            background_y: round3(remap(py, 0.0, 100.0, BACKGROUND_MIN, BACKGROUND_MAX)),
            pointer_from_center: ((py - CENTER_PERCENT).hypot(px - CENTER_PERCENT)
                / CENTER_PERCENT)
                .clamp(0.0, 1.0),
            pointer_from_top: py / 100.0,
            pointer_from_left: px / 100.0,
            rotate_x: round3(-(px - CENTER_PERCENT) / ROTATE_X_DIVISOR),
            rotate_y: round3((py - CENTER_PERCENT) / ROTATE_Y_DIVISOR),
        }
    }

    pub fn css_vars(&self) -> CssVars {
        let mut vars = CssVars::new();
        vars.push((POINTER_X, format!("{}%", self.pointer_x)));
        vars.push((POINTER_Y, format!("{}%", self.pointer_y)));
        vars.push((BACKGROUND_X, format!("{}%", self.background_x)));
        vars.push((BACKGROUND_Y, format!("{}%", self.background_y)));
        vars.push((POINTER_FROM_CENTER, format!("{}", self.pointer_from_center)));
        vars.push((POINTER_FROM_TOP, format!("{}", self.pointer_from_top)));
        vars.push((POINTER_FROM_LEFT, format!("{}", self.pointer_from_left)));
        vars.push((ROTATE_X, format!("{}deg", self.rotate_x)));
        vars.push((ROTATE_Y, format!("{}deg", self.rotate_y)));
        vars
    }
}

#[inline]
fn positive_or_one(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        1.0
    }
}

#[inline]
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}

/// Linear map of `v` from `[from_min, from_max]` onto `[to_min, to_max]`.
#[inline]
pub fn remap(v: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    to_min + (to_max - to_min) * (v - from_min) / (from_max - from_min)
}

#[inline]
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
