use crate::constants::{DEFAULT_BEHIND_GLOW_COLOR, DEFAULT_BEHIND_GLOW_SIZE, DEFAULT_INNER_GRADIENT};
use crate::params::CssVars;

pub const INNER_GRADIENT: &str = "--inner-gradient";
pub const BEHIND_GLOW_COLOR: &str = "--behind-glow-color";
pub const BEHIND_GLOW_SIZE: &str = "--behind-glow-size";

/// Static card styling written once at mount, independent of the tilt loop.
#[derive(Clone, Debug, PartialEq)]
pub struct CardTheme {
    pub inner_gradient: String,
    pub behind_glow_color: String,
    pub behind_glow_size: String,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            inner_gradient: DEFAULT_INNER_GRADIENT.to_string(),
            behind_glow_color: DEFAULT_BEHIND_GLOW_COLOR.to_string(),
            behind_glow_size: DEFAULT_BEHIND_GLOW_SIZE.to_string(),
        }
    }
}

impl CardTheme {
    /// Default theme with any provided overrides applied.
    pub fn with_overrides(
        inner_gradient: Option<String>,
        behind_glow_color: Option<String>,
        behind_glow_size: Option<String>,
    ) -> Self {
        let base = Self::default();
        Self {
            inner_gradient: inner_gradient.unwrap_or(base.inner_gradient),
            behind_glow_color: behind_glow_color.unwrap_or(base.behind_glow_color),
            behind_glow_size: behind_glow_size.unwrap_or(base.behind_glow_size),
        }
    }

    pub fn css_vars(&self) -> CssVars {
        let mut vars = CssVars::new();
        vars.push((INNER_GRADIENT, self.inner_gradient.clone()));
        vars.push((BEHIND_GLOW_COLOR, self.behind_glow_color.clone()));
        vars.push((BEHIND_GLOW_SIZE, self.behind_glow_size.clone()));
        vars
    }
}
