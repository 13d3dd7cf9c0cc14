//! `navigator.clipboard` binding and the spawned copy flow.

use crate::core::alerts::{AlertLevel, AlertSink};
use crate::core::clipboard::{ClipboardWriter, copy_to_clipboard};
use crate::core::error::ClipboardError;
use async_trait::async_trait;
use gloo::console;
use gloo::utils::window;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::Callback;

pub(crate) struct BrowserClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let promise = window().navigator().clipboard().write_text(text);
        JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
            let detail = format!("{err:?}");
            console::error!("clipboard write failed", detail.clone());
            ClipboardError::Rejected { detail }
        })
    }
}

/// Routes core alerts into the app shell's alert callback.
pub(crate) struct CallbackAlerts(pub(crate) Callback<(String, AlertLevel)>);

impl AlertSink for CallbackAlerts {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        self.0.emit((message.to_string(), level));
    }
}

/// Copy `text` in the background. The outcome is reported through `alerts`.
pub(crate) fn spawn_copy(alerts: Callback<(String, AlertLevel)>, text: String) {
    spawn_local(async move {
        copy_to_clipboard(&BrowserClipboard, &CallbackAlerts(alerts), &text).await;
    });
}
