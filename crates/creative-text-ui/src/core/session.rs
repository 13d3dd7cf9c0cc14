//! In-memory holder for the most recently generated text and story.

use serde::Deserialize;
use serde_json::Value;

/// Latest generated text and story payloads. Not persisted.
///
/// Payload shapes come from the generation service and are opaque here.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState<T = Value, S = Value> {
    current_text: Option<T>,
    current_story: Option<S>,
}

impl<T, S> Default for SessionState<T, S> {
    fn default() -> Self {
        Self {
            current_text: None,
            current_story: None,
        }
    }
}

impl<T, S> SessionState<T, S> {
    /// Empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current text.
    pub fn set_text_data(&mut self, data: T) -> &mut Self {
        self.current_text = Some(data);
        self
    }

    /// Replace the current story.
    pub fn set_story_data(&mut self, data: S) -> &mut Self {
        self.current_story = Some(data);
        self
    }

    /// Drop the current text.
    pub fn clear_text_data(&mut self) -> &mut Self {
        self.current_text = None;
        self
    }

    /// Drop the current story.
    pub fn clear_story_data(&mut self) -> &mut Self {
        self.current_story = None;
        self
    }

    /// Current text, if any.
    #[must_use]
    pub const fn text_data(&self) -> Option<&T> {
        self.current_text.as_ref()
    }

    /// Current story, if any.
    #[must_use]
    pub const fn story_data(&self) -> Option<&S> {
        self.current_story.as_ref()
    }
}

/// Session mutation requested by page logic (generator forms, history views).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Replace the current text.
    SetText {
        /// Generated text payload.
        data: Value,
    },
    /// Replace the current story.
    SetStory {
        /// Generated story payload.
        data: Value,
    },
    /// Drop the current text.
    ClearText,
    /// Drop the current story.
    ClearStory,
}

impl SessionCommand {
    /// Apply the command to `session`.
    pub fn apply(self, session: &mut SessionState) {
        match self {
            Self::SetText { data } => session.set_text_data(data),
            Self::SetStory { data } => session.set_story_data(data),
            Self::ClearText => session.clear_text_data(),
            Self::ClearStory => session.clear_story_data(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_clear_leaves_text_empty() {
        let mut session: SessionState = SessionState::new();
        session.set_text_data(json!({ "title": "Morning", "text": "..." }));
        assert!(session.text_data().is_some());
        session.clear_text_data();
        assert!(session.text_data().is_none());
    }

    #[test]
    fn text_and_story_are_independent() {
        let mut session: SessionState<&str, &str> = SessionState::new();
        session.set_text_data("first").set_story_data("tale");
        session.set_text_data("second");
        assert_eq!(session.text_data(), Some(&"second"));
        session.clear_story_data();
        assert_eq!(session.story_data(), None);
        assert_eq!(session.text_data(), Some(&"second"));
    }

    #[test]
    fn commands_decode_and_apply() {
        let mut session = SessionState::new();
        let set: SessionCommand = serde_json::from_value(json!({
            "action": "set_story",
            "data": { "title": "Der Fuchs", "story": "..." }
        }))
        .unwrap();
        set.apply(&mut session);
        assert_eq!(
            session.story_data().and_then(|s| s.get("title")),
            Some(&json!("Der Fuchs"))
        );

        let clear: SessionCommand =
            serde_json::from_value(json!({ "action": "clear_story" })).unwrap();
        clear.apply(&mut session);
        assert!(session.story_data().is_none());

        assert!(serde_json::from_value::<SessionCommand>(json!({ "action": "explode" })).is_err());
    }
}
