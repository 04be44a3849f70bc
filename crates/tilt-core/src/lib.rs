//! Pointer-reactive tilt engine for the profile card.
//!
//! [`TiltEngine`] smooths pointer offsets toward a target with a slow entrance
//! phase and snappy tracking afterwards. [`TiltDriver`] pairs it with a
//! [`TiltHost`] that supplies geometry, focus, a clock and frame scheduling,
//! and receives [`VisualParams`] to render.

pub mod config;
pub mod constants;
pub mod engine;
pub mod host;
pub mod params;
pub mod sim;
pub mod theme;

pub use config::*;
pub use engine::*;
pub use host::*;
pub use params::{CssVars, VisualParams};
pub use sim::SimHost;
pub use theme::CardTheme;
