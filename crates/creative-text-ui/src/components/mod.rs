pub(crate) mod alert;
pub(crate) mod language_select;
pub(crate) mod loading;
pub(crate) mod session_panel;
pub(crate) mod settings_modal;
