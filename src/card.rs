use crate::constants::{ACTIVE_CLASS, ENTERING_CLASS, ENTERING_CLASS_MS};
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::{self, FrameClosure, FrameSlot};
use crate::host::DomHost;
use crate::release::{ReleasePoll, ReleaseWatch};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tilt_core::{CardTheme, Snapshot, TiltConfig, TiltDriver};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a mounted card needs; shared with its event and frame closures
/// through `Weak` so teardown is never blocked by a pending callback.
pub(crate) struct CardState {
    window: web::Window,
    shell: web::HtmlElement,
    driver: RefCell<TiltDriver<DomHost>>,
    release: Cell<ReleaseWatch>,
    release_slot: RefCell<FrameSlot>,
    release_tick: FrameClosure,
    enter_timer: Cell<Option<i32>>,
    entering_done: Closure<dyn FnMut()>,
}

impl CardState {
    pub(crate) fn on_enter(&self, offset: Vec2) {
        let mut watch = self.release.get();
        if watch.enter() {
            self.release_slot.borrow_mut().cancel();
            log::debug!("[card] re-entered before release");
        }
        self.release.set(watch);
        dom::add_classes(&self.shell, &[ACTIVE_CLASS, ENTERING_CLASS]);
        self.clear_enter_timer();
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.entering_done.as_ref().unchecked_ref(),
                ENTERING_CLASS_MS,
            ) {
            Ok(id) => self.enter_timer.set(Some(id)),
            Err(e) => log::warn!("[card] setTimeout error: {:?}", e),
        }
        self.driver.borrow_mut().set_target(offset.x, offset.y);
    }

    pub(crate) fn on_move(&self, offset: Vec2) {
        self.driver.borrow_mut().set_target(offset.x, offset.y);
    }

    pub(crate) fn on_leave(&self) {
        self.driver.borrow_mut().to_center();
        let mut watch = self.release.get();
        watch.leave();
        self.release.set(watch);
        let mut slot = self.release_slot.borrow_mut();
        slot.cancel();
        slot.arm(&self.release_tick);
    }

    #[inline]
    pub(crate) fn shell(&self) -> &web::HtmlElement {
        &self.shell
    }

    fn poll_release(&self) {
        let mut slot = self.release_slot.borrow_mut();
        slot.fired();
        let mut watch = self.release.get();
        match watch.poll(self.driver.borrow().is_released()) {
            ReleasePoll::Release => {
                dom::remove_class(&self.shell, ACTIVE_CLASS);
                log::debug!("[card] released");
            }
            ReleasePoll::Again => slot.arm(&self.release_tick),
            ReleasePoll::Stop => {}
        }
        self.release.set(watch);
    }

    fn clear_enter_timer(&self) {
        if let Some(id) = self.enter_timer.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn teardown(&self) {
        self.clear_enter_timer();
        self.release.set(ReleaseWatch::Idle);
        self.release_slot.borrow_mut().cancel();
        self.driver.borrow_mut().cancel();
    }
}

/// A mounted profile card. Dropping it unmounts: listeners are removed,
/// timers cleared and the tilt loop cancelled.
pub struct TiltCard {
    state: Option<Rc<CardState>>,
    listeners: Vec<Listener>,
}

impl TiltCard {
    pub fn mount(
        wrapper: web::HtmlElement,
        shell: web::HtmlElement,
        config: TiltConfig,
        theme: &CardTheme,
        enable_tilt: bool,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        dom::set_css_vars(&wrapper, &theme.css_vars());

        if !enable_tilt {
            log::info!("[card] mounted without tilt");
            return Ok(Self {
                state: None,
                listeners: Vec::new(),
            });
        }

        let state = Rc::new_cyclic(|weak: &Weak<CardState>| {
            let tick_card = weak.clone();
            let tick = frame::frame_closure(move |ts| {
                if let Some(card) = tick_card.upgrade() {
                    let mut driver = card.driver.borrow_mut();
                    // rAF callbacks carry no request id and cancelled requests
                    // never fire, so the delivered frame is the pending one.
                    if let Some(frame) = driver.pending_frame() {
                        driver.on_frame(frame, ts);
                    }
                }
            });
            let release_card = weak.clone();
            let release_tick = frame::frame_closure(move |_ts| {
                if let Some(card) = release_card.upgrade() {
                    card.poll_release();
                }
            });
            let shell_entering = shell.clone();
            let entering_done = Closure::wrap(Box::new(move || {
                dom::remove_class(&shell_entering, ENTERING_CLASS);
            }) as Box<dyn FnMut()>);

            let host = DomHost::new(window.clone(), wrapper.clone(), shell.clone(), tick);
            CardState {
                window: window.clone(),
                shell: shell.clone(),
                driver: RefCell::new(TiltDriver::new(config, host)),
                release: Cell::new(ReleaseWatch::Idle),
                release_slot: RefCell::new(FrameSlot::new(window.clone())),
                release_tick,
                enter_timer: Cell::new(None),
                entering_done,
            }
        });

        let listeners = events::wire_pointer_handlers(&state);
        state.driver.borrow_mut().play_entrance();

        let s = state.driver.borrow().current();
        log::info!(
            "[card] mounted; entrance from ({:.1},{:.1}) to ({:.1},{:.1})",
            s.x,
            s.y,
            s.target_x,
            s.target_y
        );
        Ok(Self {
            state: Some(state),
            listeners,
        })
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.state.as_ref().map(|s| s.driver.borrow().current())
    }
}

impl Drop for TiltCard {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Some(state) = self.state.take() {
            state.teardown();
            log::debug!("[card] unmounted");
        }
    }
}
