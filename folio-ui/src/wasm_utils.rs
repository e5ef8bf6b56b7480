//! WASM utilities for browser interop
//!
//! # Listener and lock cleanup
//!
//! Every browser-side effect the site needs (window listeners, the body
//! scroll lock) is held by a guard that undoes it in `Drop`. Store the guard
//! in a `Signal<Option<_>>` and set it to `None` to release it:
//!
//! ```ignore
//! let lock = ScrollLock::acquire();
//! // page no longer scrolls
//! drop(lock);
//! // previous overflow value restored
//! ```
//!
//! Do not drop a listener guard from inside its own callback. Flip a signal
//! instead and let an effect release it after the callback returns.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl WindowEventListener {
    /// Attach a listener to `window`. Returns `None` outside a browser.
    pub fn new(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys_x::window()?;
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            window,
            event_name,
            callback,
        })
    }

    /// Like [`WindowEventListener::new`] but registered as passive, for
    /// scroll and touch events.
    pub fn passive(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys_x::window()?;
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self {
            window,
            event_name,
            callback,
        })
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Disables page scrolling while held.
///
/// Restores the body's previous `overflow` value on drop, so a lock that is
/// never explicitly released still cannot leave the page stuck.
pub struct ScrollLock {
    body: web_sys_x::HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = web_sys_x::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        if self.previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous);
        }
    }
}

/// Pause the `<video>`/`<audio>` element with the given id, if mounted.
pub fn pause_media(element_id: &str) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };

    if let Ok(media) = element.dyn_into::<web_sys_x::HtmlMediaElement>() {
        let _ = media.pause();
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    web_sys_x::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Read a string property (e.g. `key`) off a raw DOM event.
pub fn event_string(event: &wasm_bindgen_x::JsValue, property: &str) -> Option<String> {
    js_sys_x::Reflect::get(event, &property.into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.class_list().toggle_with_force(class, enabled);
}
