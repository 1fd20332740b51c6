//! Browser implementation of the address bar used by the tab layer.

use contracts::shared::navigation::AddressBar;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// `window.location` / `window.history` of the current document.
#[derive(Clone, Copy, Default)]
pub struct BrowserHistory;

impl AddressBar for BrowserHistory {
    fn current(&self) -> String {
        let Some(location) = window().map(|w| w.location()) else {
            return String::new();
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        format!("{}{}", path, search)
    }

    fn replace(&self, address: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(address)) {
                    log::warn!("history.replaceState failed for '{}': {:?}", address, err);
                }
            }
        }
    }
}

/// Calls `on_change` with the new address on every `popstate`.
///
/// The listener lives for the whole session.
pub fn listen_popstate(on_change: impl Fn(String) + 'static) {
    let Some(w) = window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
        on_change(BrowserHistory.current());
    }) as Box<dyn FnMut(_)>);

    if let Err(err) = w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
    {
        log::warn!("popstate listener registration failed: {:?}", err);
        return;
    }
    closure.forget();
}
