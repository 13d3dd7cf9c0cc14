//! Error types for settings, storage, and clipboard operations.

use thiserror::Error;

/// Structured errors emitted while validating or mutating settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Stored name of the field that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
}

impl SettingsError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Stored name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidField { field, .. } => *field,
        }
    }
}

/// Errors raised by a key-value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Backend refused the write (quota exceeded, storage disabled).
    #[error("failed to write storage key '{key}': {detail}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },

    /// Settings could not be encoded as JSON.
    #[error("failed to serialize settings: {detail}")]
    Serialize {
        /// Encoder detail.
        detail: String,
    },
}

/// Errors raised by a clipboard backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Host rejected the write (permission denied, document not focused).
    #[error("clipboard write rejected: {detail}")]
    Rejected {
        /// Host-provided detail.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_error_exposes_field_name() {
        let err = SettingsError::invalid("topP", "must be between 0 and 1");
        assert_eq!(err.field(), "topP");
        assert_eq!(
            err.to_string(),
            "invalid value for 'topP': must be between 0 and 1"
        );
    }
}
