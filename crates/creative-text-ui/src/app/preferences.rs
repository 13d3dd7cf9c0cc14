//! Browser bindings for settings persistence and presentation.

use crate::core::error::StorageError;
use crate::core::store::{DARK_THEME_CLASS, KeyValueStore, LoadOutcome, Presentation};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// `window.localStorage` as a [`KeyValueStore`].
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }

    fn remove(&mut self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// The live document as a [`Presentation`] surface.
pub(crate) struct DocumentSurface;

impl Presentation for DocumentSurface {
    fn set_dark_appearance(&mut self, enabled: bool) {
        let Some(body) = window().document().and_then(|document| document.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if enabled {
            classes.add_1(DARK_THEME_CLASS)
        } else {
            classes.remove_1(DARK_THEME_CLASS)
        };
        if let Err(err) = result {
            log_dom_error("toggle theme class", &format!("{err:?}"));
        }
    }

    fn set_style_variable(&mut self, name: &str, value: &str) {
        let Some(root) = window()
            .document()
            .and_then(|document| document.document_element())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        if let Err(err) = root.style().set_property(name, value) {
            log_dom_error("set style variable", &format!("{err:?}"));
        }
    }
}

pub(crate) fn log_load_outcome(outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Corrupt { reason } => {
            console::warn!("stored settings unreadable, using defaults", reason.clone());
        }
        LoadOutcome::Loaded { rejected, .. } => {
            for err in rejected {
                console::warn!("ignored stored setting", err.to_string());
            }
        }
        LoadOutcome::Missing | LoadOutcome::NotLoaded => {}
    }
}

pub(crate) fn log_storage_error(err: &StorageError) {
    console::error!("storage operation failed", err.to_string());
}

fn log_dom_error(operation: &'static str, detail: &str) {
    console::error!("dom operation failed", operation, detail);
}
