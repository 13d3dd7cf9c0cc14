//! Raw settings-modal field values and their conversion into a validated record.

use crate::core::error::SettingsError;
use crate::core::settings::{FieldKind, SETTINGS_SCHEMA, SettingKey, SettingValue, Settings};

/// Settings modal inputs exactly as the controls report them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    /// `#defaultLanguage` select value.
    pub default_language: String,
    /// `#defaultLevel` select value.
    pub default_level: String,
    /// `#saveHistory` checkbox state.
    pub save_history: bool,
    /// `#temperature` range value.
    pub temperature: String,
    /// `#topP` range value.
    pub top_p: String,
    /// `#maxRetries` number value.
    pub max_retries: String,
    /// `#fontSize` range value.
    pub font_size: String,
    /// `#theme` select value.
    pub theme: String,
}

impl SettingsForm {
    /// Populate the controls from a record (modal `show`).
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            default_language: settings.default_language.as_str().to_string(),
            default_level: settings.default_level.clone(),
            save_history: settings.save_history,
            temperature: settings.temperature.to_string(),
            top_p: settings.top_p.to_string(),
            max_retries: settings.max_retries.to_string(),
            font_size: settings.font_size.to_string(),
            theme: settings.theme.as_str().to_string(),
        }
    }

    /// Raw text of a text or numeric control. `None` for the checkbox.
    #[must_use]
    pub fn raw(&self, key: SettingKey) -> Option<&str> {
        match key {
            SettingKey::DefaultLanguage => Some(&self.default_language),
            SettingKey::DefaultLevel => Some(&self.default_level),
            SettingKey::SaveHistory => None,
            SettingKey::Temperature => Some(&self.temperature),
            SettingKey::TopP => Some(&self.top_p),
            SettingKey::MaxRetries => Some(&self.max_retries),
            SettingKey::FontSize => Some(&self.font_size),
            SettingKey::Theme => Some(&self.theme),
        }
    }

    /// Record an `input`/`change` event on a text or numeric control.
    pub fn set_raw(&mut self, key: SettingKey, value: String) {
        let slot = match key {
            SettingKey::DefaultLanguage => &mut self.default_language,
            SettingKey::DefaultLevel => &mut self.default_level,
            SettingKey::SaveHistory => {
                self.save_history = matches!(value.as_str(), "true" | "on");
                return;
            }
            SettingKey::Temperature => &mut self.temperature,
            SettingKey::TopP => &mut self.top_p,
            SettingKey::MaxRetries => &mut self.max_retries,
            SettingKey::FontSize => &mut self.font_size,
            SettingKey::Theme => &mut self.theme,
        };
        *slot = value;
    }

    /// Parse and validate every control into a record.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidField`] for the first malformed or
    /// out-of-range control, in schema order.
    pub fn parse(&self) -> Result<Settings, SettingsError> {
        let mut settings = Settings::default();
        for spec in &SETTINGS_SCHEMA {
            let value = match (spec.kind, self.raw(spec.key)) {
                (FieldKind::Flag, _) | (_, None) => SettingValue::Flag(self.save_history),
                (FieldKind::Text, Some(raw)) => SettingValue::Text(raw.to_string()),
                (FieldKind::Float, Some(raw)) => {
                    SettingValue::Float(raw.trim().parse::<f64>().map_err(|_| {
                        SettingsError::invalid(spec.name, format!("'{raw}' is not a number"))
                    })?)
                }
                (FieldKind::Integer, Some(raw)) => {
                    SettingValue::Integer(raw.trim().parse::<i64>().map_err(|_| {
                        SettingsError::invalid(spec.name, format!("'{raw}' is not a whole number"))
                    })?)
                }
            };
            settings.set(spec.key, value)?;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::languages::Language;
    use crate::core::settings::ThemeMode;

    #[test]
    fn round_trips_through_controls() {
        let settings = Settings {
            default_language: Language::Spanish,
            temperature: 1.1,
            theme: ThemeMode::Dark,
            ..Settings::default()
        };
        let form = SettingsForm::from_settings(&settings);
        assert_eq!(form.temperature, "1.1");
        assert_eq!(form.parse(), Ok(settings));
    }

    #[test]
    fn input_events_update_fields() {
        let mut form = SettingsForm::from_settings(&Settings::default());
        form.set_raw(SettingKey::FontSize, "18".to_string());
        form.set_raw(SettingKey::SaveHistory, "false".to_string());
        form.set_raw(SettingKey::Theme, "dark".to_string());
        let parsed = form.parse().unwrap();
        assert_eq!(parsed.font_size, 18);
        assert!(!parsed.save_history);
        assert_eq!(parsed.theme, ThemeMode::Dark);
    }

    #[test]
    fn malformed_numbers_are_rejected_with_field_name() {
        let mut form = SettingsForm::from_settings(&Settings::default());
        form.set_raw(SettingKey::MaxRetries, "three".to_string());
        let err = form.parse().unwrap_err();
        assert_eq!(err.field(), "maxRetries");

        let mut form = SettingsForm::from_settings(&Settings::default());
        form.set_raw(SettingKey::TopP, "".to_string());
        assert_eq!(form.parse().unwrap_err().field(), "topP");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut form = SettingsForm::from_settings(&Settings::default());
        form.set_raw(SettingKey::FontSize, "72".to_string());
        assert_eq!(form.parse().unwrap_err().field(), "fontSize");
    }
}
