//! Settings record and the schema that drives load, save, and apply.
//!
//! # Design
//! - Every persisted field is declared once in [`SETTINGS_SCHEMA`].
//! - Values cross the storage boundary as [`SettingValue`] and are validated on
//!   the way in, so a bad stored field never replaces a good in-memory one.

use crate::core::error::SettingsError;
use crate::core::languages::Language;
use serde_json::{Map, Value};

/// Inclusive temperature range accepted by the generator.
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);
/// Inclusive nucleus sampling range.
pub const TOP_P_RANGE: (f64, f64) = (0.0, 1.0);
/// Inclusive retry budget range.
pub const MAX_RETRIES_RANGE: (u32, u32) = (0, 10);
/// Inclusive font size range, in pixels.
pub const FONT_SIZE_RANGE: (u32, u32) = (10, 32);
/// Longest accepted level label.
pub const MAX_LEVEL_LEN: usize = 32;

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Stored identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Identifies one persisted settings field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Language preselected in generator forms.
    DefaultLanguage,
    /// Proficiency level preselected in generator forms.
    DefaultLevel,
    /// Whether generated texts are kept in history.
    SaveHistory,
    /// Sampling temperature.
    Temperature,
    /// Nucleus sampling probability mass.
    TopP,
    /// Retry budget for generation requests.
    MaxRetries,
    /// Reading font size in pixels.
    FontSize,
    /// Light or dark appearance.
    Theme,
}

impl SettingKey {
    /// Schema entry for this key.
    ///
    /// `SETTINGS_SCHEMA` is declared in variant order.
    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        &SETTINGS_SCHEMA[self as usize]
    }

    /// Stored field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Storage representation of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string.
    Text,
    /// JSON boolean.
    Flag,
    /// JSON number, fractional allowed.
    Float,
    /// JSON number, whole.
    Integer,
}

/// One row of the settings schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field identity.
    pub key: SettingKey,
    /// Name used in the stored JSON object.
    pub name: &'static str,
    /// Storage representation.
    pub kind: FieldKind,
    /// Consumed by the apply step.
    pub presentation: bool,
}

/// The persisted fields, in stored order.
pub static SETTINGS_SCHEMA: [FieldSpec; 8] = [
    FieldSpec {
        key: SettingKey::DefaultLanguage,
        name: "defaultLanguage",
        kind: FieldKind::Text,
        presentation: false,
    },
    FieldSpec {
        key: SettingKey::DefaultLevel,
        name: "defaultLevel",
        kind: FieldKind::Text,
        presentation: false,
    },
    FieldSpec {
        key: SettingKey::SaveHistory,
        name: "saveHistory",
        kind: FieldKind::Flag,
        presentation: false,
    },
    FieldSpec {
        key: SettingKey::Temperature,
        name: "temperature",
        kind: FieldKind::Float,
        presentation: false,
    },
    FieldSpec {
        key: SettingKey::TopP,
        name: "topP",
        kind: FieldKind::Float,
        presentation: false,
    },
    FieldSpec {
        key: SettingKey::MaxRetries,
        name: "maxRetries",
        kind: FieldKind::Integer,
        presentation: false,
    },
    FieldSpec {
        key: SettingKey::FontSize,
        name: "fontSize",
        kind: FieldKind::Integer,
        presentation: true,
    },
    FieldSpec {
        key: SettingKey::Theme,
        name: "theme",
        kind: FieldKind::Text,
        presentation: true,
    },
];

/// A single field value in transit between storage, forms, and the record.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    /// String value.
    Text(String),
    /// Boolean value.
    Flag(bool),
    /// Fractional number.
    Float(f64),
    /// Whole number.
    Integer(i64),
}

impl SettingValue {
    /// Decode a stored JSON value according to `kind`. Mistyped input yields `None`.
    #[must_use]
    pub fn from_json(kind: FieldKind, value: &Value) -> Option<Self> {
        match kind {
            FieldKind::Text => value.as_str().map(|s| Self::Text(s.to_string())),
            FieldKind::Flag => value.as_bool().map(Self::Flag),
            FieldKind::Float => value.as_f64().map(Self::Float),
            FieldKind::Integer => value.as_i64().map(Self::Integer),
        }
    }

    /// Encode for storage.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(value) => Value::from(value.as_str()),
            Self::Flag(value) => Value::from(*value),
            Self::Float(value) => Value::from(*value),
            Self::Integer(value) => Value::from(*value),
        }
    }
}

/// Result of overlaying a stored object onto a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// Fields taken from the stored object.
    pub applied: Vec<SettingKey>,
    /// Fields present but mistyped or out of range.
    pub rejected: Vec<SettingsError>,
}

/// User-configurable settings bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Language preselected in generator forms.
    pub default_language: Language,
    /// Proficiency level label preselected in generator forms.
    pub default_level: String,
    /// Keep generated texts in history.
    pub save_history: bool,
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling probability mass.
    pub top_p: f64,
    /// Retry budget for generation requests.
    pub max_retries: u32,
    /// Reading font size in pixels.
    pub font_size: u32,
    /// Appearance.
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            default_level: "B1-B2".to_string(),
            save_history: true,
            temperature: 0.7,
            top_p: 0.9,
            max_retries: 3,
            font_size: 16,
            theme: ThemeMode::Light,
        }
    }
}

impl Settings {
    /// Read one field.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::DefaultLanguage => {
                SettingValue::Text(self.default_language.as_str().to_string())
            }
            SettingKey::DefaultLevel => SettingValue::Text(self.default_level.clone()),
            SettingKey::SaveHistory => SettingValue::Flag(self.save_history),
            SettingKey::Temperature => SettingValue::Float(self.temperature),
            SettingKey::TopP => SettingValue::Float(self.top_p),
            SettingKey::MaxRetries => SettingValue::Integer(i64::from(self.max_retries)),
            SettingKey::FontSize => SettingValue::Integer(i64::from(self.font_size)),
            SettingKey::Theme => SettingValue::Text(self.theme.as_str().to_string()),
        }
    }

    /// Validate and write one field. The record is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidField`] when the value has the wrong kind
    /// or falls outside the accepted range.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingsError> {
        let field = key.name();
        match (key, value) {
            (SettingKey::DefaultLanguage, SettingValue::Text(raw)) => {
                self.default_language = Language::from_name(&raw).ok_or_else(|| {
                    SettingsError::invalid(field, format!("unsupported language '{raw}'"))
                })?;
            }
            (SettingKey::DefaultLevel, SettingValue::Text(raw)) => {
                self.default_level = parse_level(field, &raw)?;
            }
            (SettingKey::SaveHistory, SettingValue::Flag(flag)) => {
                self.save_history = flag;
            }
            (SettingKey::Temperature, SettingValue::Float(value)) => {
                self.temperature = check_float(field, value, TEMPERATURE_RANGE)?;
            }
            (SettingKey::TopP, SettingValue::Float(value)) => {
                self.top_p = check_float(field, value, TOP_P_RANGE)?;
            }
            (SettingKey::MaxRetries, SettingValue::Integer(value)) => {
                self.max_retries = check_integer(field, value, MAX_RETRIES_RANGE)?;
            }
            (SettingKey::FontSize, SettingValue::Integer(value)) => {
                self.font_size = check_integer(field, value, FONT_SIZE_RANGE)?;
            }
            (SettingKey::Theme, SettingValue::Text(raw)) => {
                self.theme = ThemeMode::from_name(&raw).ok_or_else(|| {
                    SettingsError::invalid(field, "must be 'light' or 'dark'")
                })?;
            }
            (_, other) => {
                return Err(SettingsError::invalid(
                    field,
                    format!("unexpected value {other:?}"),
                ));
            }
        }
        Ok(())
    }

    /// Check every field against its constraints and return the record as it
    /// would be stored (level label trimmed).
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError::InvalidField`] encountered in schema order.
    pub fn validated(&self) -> Result<Self, SettingsError> {
        let mut normalised = self.clone();
        for spec in &SETTINGS_SCHEMA {
            normalised.set(spec.key, self.get(spec.key))?;
        }
        Ok(normalised)
    }

    /// Encode exactly the schema fields as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(SETTINGS_SCHEMA.len());
        for spec in &SETTINGS_SCHEMA {
            map.insert(spec.name.to_string(), self.get(spec.key).to_json());
        }
        Value::Object(map)
    }

    /// Merge recognised fields from a stored object into this record.
    ///
    /// Absent fields keep their current value; unknown fields are ignored.
    pub fn overlay_json(&mut self, stored: &Map<String, Value>) -> OverlayReport {
        let mut report = OverlayReport::default();
        for spec in &SETTINGS_SCHEMA {
            let Some(raw) = stored.get(spec.name) else {
                continue;
            };
            let outcome = SettingValue::from_json(spec.kind, raw)
                .ok_or_else(|| {
                    SettingsError::invalid(spec.name, format!("expected {:?}", spec.kind))
                })
                .and_then(|value| self.set(spec.key, value));
            match outcome {
                Ok(()) => report.applied.push(spec.key),
                Err(err) => report.rejected.push(err),
            }
        }
        report
    }
}

fn parse_level(field: &'static str, raw: &str) -> Result<String, SettingsError> {
    let level = raw.trim();
    if level.is_empty() {
        return Err(SettingsError::invalid(field, "must not be empty"));
    }
    if level.chars().count() > MAX_LEVEL_LEN {
        return Err(SettingsError::invalid(
            field,
            format!("must be at most {MAX_LEVEL_LEN} characters"),
        ));
    }
    Ok(level.to_string())
}

fn check_float(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, SettingsError> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(SettingsError::invalid(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

fn check_integer(
    field: &'static str,
    value: i64,
    (min, max): (u32, u32),
) -> Result<u32, SettingsError> {
    u32::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| SettingsError::invalid(field, format!("must be between {min} and {max}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: &Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn schema_names_are_unique_and_cover_every_key() {
        let names: std::collections::HashSet<_> =
            SETTINGS_SCHEMA.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), 8);
        for spec in &SETTINGS_SCHEMA {
            assert_eq!(spec.key.spec(), spec);
            assert_eq!(spec.key.name(), spec.name);
        }
    }

    #[test]
    fn defaults_match_compiled_in_values() {
        let settings = Settings::default();
        assert_eq!(settings.default_language, Language::English);
        assert_eq!(settings.default_level, "B1-B2");
        assert!(settings.save_history);
        assert!((settings.temperature - 0.7).abs() < f64::EPSILON);
        assert!((settings.top_p - 0.9).abs() < f64::EPSILON);
        assert_eq!(settings.max_retries, 3);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.validated(), Ok(Settings::default()));
    }

    #[test]
    fn to_json_emits_exactly_schema_fields() {
        let encoded = Settings::default().to_json();
        let map = object(&encoded);
        assert_eq!(map.len(), SETTINGS_SCHEMA.len());
        assert_eq!(map.get("theme"), Some(&json!("light")));
        assert_eq!(map.get("fontSize"), Some(&json!(16)));
        assert_eq!(map.get("defaultLanguage"), Some(&json!("English")));
    }

    #[test]
    fn overlay_applies_only_present_fields() {
        let mut settings = Settings::default();
        let report = settings.overlay_json(&object(&json!({ "theme": "dark" })));
        assert_eq!(report.applied, vec![SettingKey::Theme]);
        assert!(report.rejected.is_empty());
        assert_eq!(
            settings,
            Settings {
                theme: ThemeMode::Dark,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn overlay_rejects_invalid_fields_and_keeps_previous_values() {
        let mut settings = Settings::default();
        let report = settings.overlay_json(&object(&json!({
            "temperature": 9.5,
            "fontSize": "huge",
            "maxRetries": 5,
            "unknown": true
        })));
        assert_eq!(report.applied, vec![SettingKey::MaxRetries]);
        assert_eq!(report.rejected.len(), 2);
        assert!((settings.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.max_retries, 5);
    }

    #[test]
    fn set_validates_ranges_and_kinds() {
        let mut settings = Settings::default();
        assert!(settings.set(SettingKey::TopP, SettingValue::Float(1.5)).is_err());
        assert!(settings.set(SettingKey::TopP, SettingValue::Float(f64::NAN)).is_err());
        assert!(settings.set(SettingKey::FontSize, SettingValue::Integer(-4)).is_err());
        assert!(settings.set(SettingKey::MaxRetries, SettingValue::Integer(11)).is_err());
        assert!(settings.set(SettingKey::Theme, SettingValue::Text("sepia".into())).is_err());
        assert!(settings.set(SettingKey::DefaultLevel, SettingValue::Text("   ".into())).is_err());
        assert!(settings.set(SettingKey::SaveHistory, SettingValue::Text("yes".into())).is_err());
        assert_eq!(settings, Settings::default());

        settings
            .set(SettingKey::DefaultLanguage, SettingValue::Text("Japanese".into()))
            .unwrap();
        settings
            .set(SettingKey::DefaultLevel, SettingValue::Text(" C1-C2 ".into()))
            .unwrap();
        assert_eq!(settings.default_language, Language::Japanese);
        assert_eq!(settings.default_level, "C1-C2");
    }

    #[test]
    fn validate_flags_out_of_range_record() {
        let settings = Settings {
            font_size: 4,
            ..Settings::default()
        };
        let err = settings.validated().unwrap_err();
        assert_eq!(err.field(), "fontSize");
    }

    #[test]
    fn validated_record_carries_trimmed_level() {
        let settings = Settings {
            default_level: "  C1-C2 ".to_string(),
            ..Settings::default()
        };
        let normalised = settings.validated().unwrap();
        assert_eq!(normalised.default_level, "C1-C2");
        assert_eq!(
            normalised,
            Settings {
                default_level: "C1-C2".to_string(),
                ..Settings::default()
            }
        );
    }
}
