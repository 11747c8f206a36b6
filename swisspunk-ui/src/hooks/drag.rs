//! Pointer drag handling for playground elements.
//!
//! Pointer-down on an element registers document-level `pointermove`,
//! `pointerup` and `pointercancel` listeners; pointer-up or cancel removes
//! them again. Only one set is registered at a time.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use swisspunk_core::{ElementId, PlaygroundSession, Position};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, PointerEvent};

type PointerClosure = Closure<dyn FnMut(PointerEvent)>;

/// Events that end a drag. Browsers send `pointercancel` instead of
/// `pointerup` when a touch turns into a scroll or the pointer is lost.
const END_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];

/// Move/end listeners for one drag, removed from the target when dropped.
///
/// `on_up` handles both `pointerup` and `pointercancel`.
pub struct DragListeners {
    target: EventTarget,
    on_move: PointerClosure,
    on_up: PointerClosure,
}

impl DragListeners {
    pub fn attach(
        target: EventTarget,
        on_move: PointerClosure,
        on_up: PointerClosure,
    ) -> Result<Self, JsValue> {
        let listeners = Self {
            target,
            on_move,
            on_up,
        };
        // On error, dropping `listeners` removes whatever was registered.
        listeners.target.add_event_listener_with_callback(
            "pointermove",
            listeners.on_move.as_ref().unchecked_ref(),
        )?;
        for event in END_EVENTS {
            listeners
                .target
                .add_event_listener_with_callback(event, listeners.on_up.as_ref().unchecked_ref())?;
        }
        Ok(listeners)
    }

    /// Stop receiving events. Safe to call more than once.
    ///
    /// The closures stay alive until drop, so this may run from inside `on_up`.
    pub fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        for event in END_EVENTS {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, self.on_up.as_ref().unchecked_ref());
        }
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

pub fn pointer_position(ev: &PointerEvent) -> Position {
    Position::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Returns the pointer-down handler for elements.
///
/// `on_select` receives the grabbed element's text so the host can sync its
/// text input.
pub fn use_drag(
    session: RwSignal<PlaygroundSession>,
    on_select: Callback<String>,
) -> Callback<(ElementId, PointerEvent)> {
    let active: Rc<RefCell<Option<DragListeners>>> = Rc::new(RefCell::new(None));

    {
        let active = Rc::clone(&active);
        on_cleanup(move || {
            active.borrow_mut().take();
        });
    }

    Callback::new(move |(id, ev): (ElementId, PointerEvent)| {
        ev.prevent_default();

        let mut grabbed = None;
        session.update(|s| grabbed = s.begin_drag(id, pointer_position(&ev)));
        let Some(text) = grabbed else {
            return;
        };
        on_select.call(text);

        // Listeners from an earlier drag are already detached; free them now.
        active.borrow_mut().take();

        let on_move = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
            ev.prevent_default();
            session.update(|s| {
                s.drag_to(pointer_position(&ev));
            });
        });

        let slot = Rc::downgrade(&active);
        let on_up = Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| {
            session.update(|s| s.end_drag());
            if let Some(slot) = slot.upgrade() {
                if let Some(listeners) = slot.borrow().as_ref() {
                    listeners.detach();
                }
            }
        });

        match DragListeners::attach(document().into(), on_move, on_up) {
            Ok(listeners) => *active.borrow_mut() = Some(listeners),
            Err(e) => {
                log::warn!("Failed to register drag listeners: {:?}", e);
                session.update(|s| s.end_drag());
            }
        }
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn detach_stops_delivery() {
        let target: EventTarget = document().create_element("div").unwrap().into();
        let moves = Rc::new(Cell::new(0));
        let ups = Rc::new(Cell::new(0));

        let on_move = {
            let moves = Rc::clone(&moves);
            Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| moves.set(moves.get() + 1))
        };
        let on_up = {
            let ups = Rc::clone(&ups);
            Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| ups.set(ups.get() + 1))
        };

        let listeners = DragListeners::attach(target.clone(), on_move, on_up).unwrap();
        target
            .dispatch_event(&PointerEvent::new("pointermove").unwrap())
            .unwrap();
        target
            .dispatch_event(&PointerEvent::new("pointerup").unwrap())
            .unwrap();
        target
            .dispatch_event(&PointerEvent::new("pointercancel").unwrap())
            .unwrap();
        assert_eq!((moves.get(), ups.get()), (1, 2));

        listeners.detach();
        target
            .dispatch_event(&PointerEvent::new("pointermove").unwrap())
            .unwrap();
        target
            .dispatch_event(&PointerEvent::new("pointercancel").unwrap())
            .unwrap();
        assert_eq!((moves.get(), ups.get()), (1, 2));

        drop(listeners);
        target
            .dispatch_event(&PointerEvent::new("pointerup").unwrap())
            .unwrap();
        assert_eq!(ups.get(), 2);
    }

    #[wasm_bindgen_test]
    fn pointercancel_ends_the_drag() {
        let runtime = create_runtime();
        let session = create_rw_signal(PlaygroundSession::default());
        let on_grab = use_drag(session, Callback::new(|_: String| {}));

        on_grab.call((ElementId(1), PointerEvent::new("pointerdown").unwrap()));
        assert!(session.with_untracked(|s| s.is_dragging()));

        document()
            .dispatch_event(&PointerEvent::new("pointercancel").unwrap())
            .unwrap();
        assert!(!session.with_untracked(|s| s.is_dragging()));

        // A stray move after the cancel must not restart anything.
        document()
            .dispatch_event(&PointerEvent::new("pointermove").unwrap())
            .unwrap();
        assert!(!session.with_untracked(|s| s.is_dragging()));

        runtime.dispose();
    }
}
