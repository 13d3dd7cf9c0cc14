//! Settings persistence over a pluggable key-value backend.
//!
//! # Design
//! - The store owns the only in-memory [`Settings`] record; callers receive it
//!   by construction instead of reaching for a global.
//! - Load and save never fail outward: outcomes are retained for the browser
//!   layer to log.

use crate::core::error::{SettingsError, StorageError};
use crate::core::settings::{SETTINGS_SCHEMA, SettingKey, SettingValue, Settings, ThemeMode};
use serde_json::Value;
use std::collections::HashMap;

/// Local storage key holding the serialized settings object.
pub const SETTINGS_KEY: &str = "appSettings";
/// CSS custom property consumed by the reading-pane styles.
pub const FONT_SIZE_VAR: &str = "--text-font-size";
/// Body class enabling the dark palette.
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// String key-value persistence (browser local storage or an in-memory map).
pub trait KeyValueStore {
    /// Read the raw value under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Write the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the backend refuses the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    fn remove(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`] used by native builds and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The slice of the presentation layer the apply step drives.
pub trait Presentation {
    /// Toggle the global dark appearance flag.
    fn set_dark_appearance(&mut self, enabled: bool);

    /// Assign a CSS custom property on the document root.
    fn set_style_variable(&mut self, name: &str, value: &str);
}

/// What the most recent [`SettingsStore::load`] found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// `load` has not run yet.
    NotLoaded,
    /// Nothing stored under [`SETTINGS_KEY`]; defaults kept.
    Missing,
    /// Stored object merged into the record.
    Loaded {
        /// Fields taken from storage.
        applied: Vec<SettingKey>,
        /// Fields present but invalid, left at their previous value.
        rejected: Vec<SettingsError>,
    },
    /// Stored value was not a JSON object; defaults kept.
    Corrupt {
        /// Parser detail.
        reason: String,
    },
}

/// Owner of the settings record and its persistence.
#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
    settings: Settings,
    last_load: LoadOutcome,
    last_save_error: Option<StorageError>,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Store over `storage`, holding compiled-in defaults until [`Self::load`].
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: Settings::default(),
            last_load: LoadOutcome::NotLoaded,
            last_save_error: None,
        }
    }

    /// Current record.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Outcome of the most recent load.
    #[must_use]
    pub const fn last_load(&self) -> &LoadOutcome {
        &self.last_load
    }

    /// Error from the most recent save, if it failed.
    #[must_use]
    pub const fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    /// Merge persisted settings into the record.
    ///
    /// Missing or unparsable storage leaves the record untouched.
    pub fn load(&mut self) -> &mut Self {
        self.last_load = match self.storage.read(SETTINGS_KEY) {
            None => LoadOutcome::Missing,
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(stored)) => {
                    let report = self.settings.overlay_json(&stored);
                    LoadOutcome::Loaded {
                        applied: report.applied,
                        rejected: report.rejected,
                    }
                }
                Ok(other) => LoadOutcome::Corrupt {
                    reason: format!("expected an object, found {}", json_kind(&other)),
                },
                Err(err) => LoadOutcome::Corrupt {
                    reason: err.to_string(),
                },
            },
        };
        self
    }

    /// Persist the schema fields of the record.
    pub fn save(&mut self) -> &mut Self {
        self.last_save_error = serde_json::to_string(&self.settings.to_json())
            .map_err(|err| StorageError::Serialize {
                detail: err.to_string(),
            })
            .and_then(|encoded| self.storage.write(SETTINGS_KEY, &encoded))
            .err();
        self
    }

    /// Push presentation fields into the UI surface.
    pub fn apply<P: Presentation + ?Sized>(&self, surface: &mut P) -> &Self {
        for spec in SETTINGS_SCHEMA.iter().filter(|spec| spec.presentation) {
            match spec.key {
                SettingKey::Theme => {
                    surface.set_dark_appearance(self.settings.theme == ThemeMode::Dark);
                }
                SettingKey::FontSize => {
                    surface.set_style_variable(
                        FONT_SIZE_VAR,
                        &format!("{}px", self.settings.font_size),
                    );
                }
                _ => {}
            }
        }
        self
    }

    /// Validate and write one field.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidField`] and leaves the record untouched
    /// when the value is rejected.
    pub fn update(&mut self, key: SettingKey, value: SettingValue) -> Result<&mut Self, SettingsError> {
        self.settings.set(key, value)?;
        Ok(self)
    }

    /// Validate and swap in a whole record.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field; the current record is kept.
    pub fn replace(&mut self, settings: Settings) -> Result<&mut Self, SettingsError> {
        self.settings = settings.validated()?;
        Ok(self)
    }

    /// Restore compiled-in defaults and forget the persisted copy.
    pub fn reset(&mut self) -> &mut Self {
        self.settings = Settings::default();
        self.storage.remove(SETTINGS_KEY);
        self
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
