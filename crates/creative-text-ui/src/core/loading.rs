//! Blocking loading overlay state.

use serde::Deserialize;

/// Caption used when none is given.
pub const DEFAULT_LOADING_CAPTION: &str = "Loading...";

/// Overlay visibility and caption. No nesting: the last call wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingState {
    visible: bool,
    caption: String,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            visible: false,
            caption: DEFAULT_LOADING_CAPTION.to_string(),
        }
    }
}

impl LoadingState {
    /// Show the overlay with `caption`, or the default caption.
    pub fn show(&mut self, caption: Option<&str>) {
        self.visible = true;
        self.caption = caption.unwrap_or(DEFAULT_LOADING_CAPTION).to_string();
    }

    /// Hide the overlay. The caption is kept.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current caption.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Overlay change requested by page logic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LoadingCommand {
    /// Show the overlay.
    Show {
        /// Caption; the default is used when absent.
        #[serde(default)]
        caption: Option<String>,
    },
    /// Hide the overlay.
    Hide,
}

impl LoadingCommand {
    /// Apply the command to `state`.
    pub fn apply(self, state: &mut LoadingState) {
        match self {
            Self::Show { caption } => state.show(caption.as_deref()),
            Self::Hide => state.hide(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_call_wins() {
        let mut state = LoadingState::default();
        state.show(Some("Generating story..."));
        state.show(None);
        assert!(state.is_visible());
        assert_eq!(state.caption(), DEFAULT_LOADING_CAPTION);
        state.hide();
        state.hide();
        assert!(!state.is_visible());
        state.show(Some("Translating..."));
        assert_eq!(state.caption(), "Translating...");
    }

    #[test]
    fn commands_decode_with_optional_caption() {
        let mut state = LoadingState::default();
        let show: LoadingCommand =
            serde_json::from_str(r#"{"action":"show","caption":"Generating text..."}"#).unwrap();
        show.apply(&mut state);
        assert_eq!(state.caption(), "Generating text...");
        let bare: LoadingCommand = serde_json::from_str(r#"{"action":"show"}"#).unwrap();
        assert_eq!(bare, LoadingCommand::Show { caption: None });
        let hide: LoadingCommand = serde_json::from_str(r#"{"action":"hide"}"#).unwrap();
        hide.apply(&mut state);
        assert!(!state.is_visible());
    }
}
