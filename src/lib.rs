#![cfg(target_arch = "wasm32")]
use tilt_core::{CardTheme, TiltConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod card;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod release;

pub use card::TiltCard;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-web starting");
    Ok(())
}

#[inline]
fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Mount-time options for a card. All fields are optional from JS.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct TiltOptions {
    enable_tilt: bool,
    initial_duration_ms: f64,
    inner_gradient: Option<String>,
    behind_glow_color: Option<String>,
    behind_glow_size: Option<String>,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            enable_tilt: true,
            initial_duration_ms: TiltConfig::default().initial_duration_ms,
            inner_gradient: None,
            behind_glow_color: None,
            behind_glow_size: None,
        }
    }
}

#[wasm_bindgen]
impl TiltOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TiltOptions {
        TiltOptions::default()
    }

    #[wasm_bindgen(setter = enableTilt)]
    pub fn set_enable_tilt(&mut self, enable: bool) {
        self.enable_tilt = enable;
    }

    #[wasm_bindgen(setter = initialDurationMs)]
    pub fn set_initial_duration_ms(&mut self, ms: f64) {
        self.initial_duration_ms = ms;
    }

    #[wasm_bindgen(setter = innerGradient)]
    pub fn set_inner_gradient(&mut self, value: Option<String>) {
        self.inner_gradient = value;
    }

    #[wasm_bindgen(setter = behindGlowColor)]
    pub fn set_behind_glow_color(&mut self, value: Option<String>) {
        self.behind_glow_color = value;
    }

    #[wasm_bindgen(setter = behindGlowSize)]
    pub fn set_behind_glow_size(&mut self, value: Option<String>) {
        self.behind_glow_size = value;
    }
}

impl TiltOptions {
    fn config(&self) -> TiltConfig {
        TiltConfig::default().with_initial_duration_ms(self.initial_duration_ms)
    }

    fn theme(&self) -> CardTheme {
        CardTheme::with_overrides(
            self.inner_gradient.clone(),
            self.behind_glow_color.clone(),
            self.behind_glow_size.clone(),
        )
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct TiltSnapshot {
    pub x: f32,
    pub y: f32,
    #[wasm_bindgen(js_name = targetX)]
    pub target_x: f32,
    #[wasm_bindgen(js_name = targetY)]
    pub target_y: f32,
}

/// JS handle for one mounted card. Call `destroy()` (or `free()`) on unmount.
#[wasm_bindgen]
pub struct ProfileCardTilt {
    card: Option<TiltCard>,
}

#[wasm_bindgen]
impl ProfileCardTilt {
    #[wasm_bindgen(constructor)]
    pub fn new(
        wrapper: web::HtmlElement,
        shell: web::HtmlElement,
        options: Option<TiltOptions>,
    ) -> Result<ProfileCardTilt, JsValue> {
        let options = options.unwrap_or_default();
        let card = TiltCard::mount(
            wrapper,
            shell,
            options.config(),
            &options.theme(),
            options.enable_tilt,
        )
        .map_err(js_error)?;
        Ok(ProfileCardTilt { card: Some(card) })
    }

    /// Current and target offsets, or `undefined` when tilt is off or the
    /// card was destroyed.
    pub fn snapshot(&self) -> Option<TiltSnapshot> {
        let s = self.card.as_ref()?.snapshot()?;
        Some(TiltSnapshot {
            x: s.x,
            y: s.y,
            target_x: s.target_x,
            target_y: s.target_y,
        })
    }

    /// Unmount. Safe to call more than once.
    pub fn destroy(&mut self) {
        self.card.take();
    }
}

/// Mount every `.pc-card-wrapper` in the document that contains a
/// `.pc-card-shell`, with default options. Returns the handles in document
/// order.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> Result<Vec<ProfileCardTilt>, JsValue> {
    mount_all_inner().map_err(js_error)
}

fn mount_all_inner() -> anyhow::Result<Vec<ProfileCardTilt>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let wrappers = document
        .query_selector_all(constants::WRAPPER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let options = TiltOptions::default();
    let mut cards = Vec::new();
    for i in 0..wrappers.length() {
        let Some(node) = wrappers.item(i) else {
            continue;
        };
        let Ok(wrapper) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let shell = match wrapper.query_selector(constants::SHELL_SELECTOR) {
            Ok(Some(el)) => el
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?,
            _ => {
                log::warn!("[card] wrapper {} has no {}", i, constants::SHELL_SELECTOR);
                continue;
            }
        };
        let card = TiltCard::mount(
            wrapper,
            shell,
            options.config(),
            &options.theme(),
            options.enable_tilt,
        )?;
        cards.push(ProfileCardTilt { card: Some(card) });
    }
    log::info!("[card] mounted {} card(s)", cards.len());
    Ok(cards)
}
