//! Supported languages, proficiency levels, and picker option lists.

/// Languages the generator can produce and translate text in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    English,
    /// Turkish.
    Turkish,
    /// German.
    German,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Dutch.
    Dutch,
    /// Russian.
    Russian,
    /// Portuguese.
    Portuguese,
    /// Japanese.
    Japanese,
}

impl Language {
    /// Every supported language in picker order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::English,
            Self::Turkish,
            Self::German,
            Self::French,
            Self::Spanish,
            Self::Italian,
            Self::Dutch,
            Self::Russian,
            Self::Portuguese,
            Self::Japanese,
        ]
    }

    /// Display name, also used as the stored and submitted value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Turkish => "Turkish",
            Self::German => "German",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
            Self::Dutch => "Dutch",
            Self::Russian => "Russian",
            Self::Portuguese => "Portuguese",
            Self::Japanese => "Japanese",
        }
    }

    /// Resolve a language from its display name.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|lang| lang.as_str() == value.trim())
    }
}

/// Proficiency levels offered by the level picker.
pub const PROFICIENCY_LEVELS: [&str; 3] = ["A1-A2", "B1-B2", "C1-C2"];

/// Level picker entries. A stored label outside [`PROFICIENCY_LEVELS`] is
/// appended so the picker can still show it as selected.
#[must_use]
pub fn level_choices(current: &str) -> Vec<&str> {
    let mut choices = PROFICIENCY_LEVELS.to_vec();
    if !current.is_empty() && !choices.contains(&current) {
        choices.push(current);
    }
    choices
}

/// One `<option>` entry of a language picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    /// Submitted value.
    pub value: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Entry cannot be chosen.
    pub disabled: bool,
    /// Entry is preselected.
    pub selected: bool,
}

/// Build the option list for a language picker.
///
/// In a two-language picker the language chosen on the other side is passed as
/// `excluded`; that entry comes back disabled and unselected so the same
/// language cannot be picked twice.
#[must_use]
pub fn language_options(excluded: Option<Language>) -> Vec<LanguageOption> {
    Language::all()
        .into_iter()
        .map(|lang| LanguageOption {
            value: lang.as_str(),
            label: lang.as_str(),
            disabled: Some(lang) == excluded,
            selected: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_language_is_disabled_and_unselected() {
        let options = language_options(Some(Language::German));
        assert_eq!(options.len(), 10);
        for option in &options {
            if option.value == "German" {
                assert!(option.disabled);
                assert!(!option.selected);
            } else {
                assert!(!option.disabled, "{} should be enabled", option.value);
                assert!(!option.selected);
            }
        }
    }

    #[test]
    fn no_exclusion_leaves_every_option_enabled() {
        let options = language_options(None);
        assert!(options.iter().all(|option| !option.disabled));
        assert_eq!(options.first().map(|o| o.label), Some("English"));
        assert_eq!(options.last().map(|o| o.label), Some("Japanese"));
    }

    #[test]
    fn level_choices_keep_a_custom_stored_label() {
        assert_eq!(level_choices("B1-B2"), PROFICIENCY_LEVELS.to_vec());
        assert_eq!(
            level_choices("Native"),
            vec!["A1-A2", "B1-B2", "C1-C2", "Native"]
        );
        assert_eq!(level_choices(""), PROFICIENCY_LEVELS.to_vec());
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for lang in Language::all() {
            assert_eq!(Language::from_name(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_name(" Dutch "), Some(Language::Dutch));
        assert_eq!(Language::from_name("Klingon"), None);
    }
}
