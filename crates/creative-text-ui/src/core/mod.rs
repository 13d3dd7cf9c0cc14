//! Core, DOM-free primitives and helpers for the Web UI.
pub mod alerts;
pub mod clipboard;
pub mod error;
pub mod form;
pub mod format;
pub mod languages;
pub mod loading;
pub mod session;
pub mod settings;
pub mod store;
