use crate::card::CardState;
use crate::constants::{POINTER_ENTER, POINTER_LEAVE, POINTER_MOVE};
use crate::input;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that removes itself from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl Listener {
    fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[card] {} listener error: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn wire_pointer_handlers(card: &Rc<CardState>) -> Vec<Listener> {
    let shell: &web::EventTarget = card.shell();
    [
        wire_pointerenter(shell, Rc::downgrade(card)),
        wire_pointermove(shell, Rc::downgrade(card)),
        wire_pointerleave(shell, Rc::downgrade(card)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_pointerenter(shell: &web::EventTarget, card: Weak<CardState>) -> Option<Listener> {
    Listener::attach(shell, POINTER_ENTER, move |ev: web::PointerEvent| {
        let Some(card) = card.upgrade() else {
            return;
        };
        let offset = input::pointer_offset(&ev, card.shell());
        card.on_enter(offset);
    })
}

fn wire_pointermove(shell: &web::EventTarget, card: Weak<CardState>) -> Option<Listener> {
    Listener::attach(shell, POINTER_MOVE, move |ev: web::PointerEvent| {
        let Some(card) = card.upgrade() else {
            return;
        };
        let offset = input::pointer_offset(&ev, card.shell());
        card.on_move(offset);
    })
}

fn wire_pointerleave(shell: &web::EventTarget, card: Weak<CardState>) -> Option<Listener> {
    Listener::attach(shell, POINTER_LEAVE, move |_ev: web::PointerEvent| {
        if let Some(card) = card.upgrade() {
            card.on_leave();
        }
    })
}
