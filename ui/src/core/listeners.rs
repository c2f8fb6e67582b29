//! RAII window event listeners.
//!
//! A [`WindowListener`] detaches itself when dropped; [`use_window_listener`]
//! ties one to the lifetime of the calling component, so unmounting a view
//! always removes what it attached.

use std::rc::Rc;

use dioxus::prelude::*;

/// The part of a DOM event the views care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowEvent {
    /// `KeyboardEvent.key` for key events.
    pub key: Option<String>,
}

pub struct WindowListener {
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Attach `handler` to `window` for `event`. `None` when there is no window.
    #[cfg(target_arch = "wasm32")]
    pub fn attach(event: &'static str, mut handler: impl FnMut(WindowEvent) + 'static) -> Option<Self> {
        use wasm_bindgen::{closure::Closure, JsCast};

        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
            let key = raw
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(|keyboard| keyboard.key());
            handler(WindowEvent { key });
        });
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        tracing::debug!("[listeners] attached `{event}`");
        Some(Self { event, callback })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn attach(_event: &'static str, _handler: impl FnMut(WindowEvent) + 'static) -> Option<Self> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
            tracing::debug!("[listeners] detached `{}`", self.event);
        }
    }
}

/// Attach a window listener for as long as the calling component is mounted.
///
/// The handler runs outside the Dioxus runtime; forward into a coroutine
/// (`coroutine.tx()`) rather than writing signals from it.
pub fn use_window_listener(event: &'static str, handler: impl FnMut(WindowEvent) + 'static) {
    use_hook(move || Rc::new(WindowListener::attach(event, handler)));
}
