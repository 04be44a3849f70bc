/// DOM-facing constants for the web card.
///
/// Engine tuning (time constants, thresholds, mapping ranges) lives in
/// `tilt_core::constants`; this file only names what the browser side touches.
// Classes toggled on the card shell
pub const ACTIVE_CLASS: &str = "active"; // glow/shine visible
pub const ENTERING_CLASS: &str = "entering"; // short transition on pointerenter

// How long `entering` stays on after pointerenter (ms)
pub const ENTERING_CLASS_MS: i32 = 180;

// Pointer events wired on the shell
pub const POINTER_ENTER: &str = "pointerenter";
pub const POINTER_MOVE: &str = "pointermove";
pub const POINTER_LEAVE: &str = "pointerleave";

// Selectors used by `mount_all`
pub const WRAPPER_SELECTOR: &str = ".pc-card-wrapper";
pub const SHELL_SELECTOR: &str = ".pc-card-shell";
