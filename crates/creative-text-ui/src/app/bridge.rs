//! `CustomEvent` bridge for page scripts outside the Yew tree.
//!
//! Generator pages dispatch `new CustomEvent(name, { detail })` on `window`;
//! the detail is decoded as JSON into a core command.

use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;
use yew::Callback;

pub(crate) const SESSION_EVENT: &str = "creative-text:session";
pub(crate) const LOADING_EVENT: &str = "creative-text:loading";

pub(crate) fn listen<T>(event_type: &'static str, on_command: Callback<T>) -> EventListener
where
    T: DeserializeOwned + 'static,
{
    EventListener::new(&window(), event_type, move |event| {
        let Some(event) = event.dyn_ref::<CustomEvent>() else {
            return;
        };
        let detail = match js_sys::JSON::stringify(&event.detail()) {
            Ok(value) => String::from(value),
            Err(_) => {
                console::warn!("ignored page event without JSON detail", event_type);
                return;
            }
        };
        match serde_json::from_str::<T>(&detail) {
            Ok(command) => on_command.emit(command),
            Err(err) => console::warn!("ignored page event", event_type, err.to_string()),
        }
    })
}
