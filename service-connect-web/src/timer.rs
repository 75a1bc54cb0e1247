//! Browser timers that own their callback closure.
//!
//! Dropping (or cancelling) a timer clears it in the browser, so a view that
//! keeps its timer inside an effect releases it when the effect is torn down.
use crate::dom::{console_error, js_error_message};
use service_connect_core::Millis;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

fn browser_ms(ms: Millis) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// A running `setInterval`.
#[must_use = "dropping an Interval clears it"]
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `on_tick` every `period` ms until cancelled.
    ///
    /// Returns `None` outside a browser or when the browser refuses the timer.
    pub fn start(period: Millis, mut on_tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || on_tick());
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            browser_ms(period),
        ) {
            Ok(id) => {
                log::trace!("interval {id} every {period}ms");
                Some(Self {
                    id,
                    _callback: callback,
                })
            }
            Err(err) => {
                console_error(&format!("setInterval failed: {}", js_error_message(&err)));
                None
            }
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
            log::trace!("interval {} cleared", self.id);
        }
    }
}

/// A pending `setTimeout`.
#[must_use = "dropping a Timeout clears it"]
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Call `on_fire` once after `delay` ms unless cancelled first.
    pub fn start(delay: Millis, on_fire: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::once(on_fire);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            browser_ms(delay),
        ) {
            Ok(id) => Some(Self {
                id,
                _callback: callback,
            }),
            Err(err) => {
                console_error(&format!("setTimeout failed: {}", js_error_message(&err)));
                None
            }
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
