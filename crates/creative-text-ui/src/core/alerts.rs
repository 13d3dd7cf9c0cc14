//! Single-slot alert model.
//!
//! At most one alert is visible. Showing a new alert replaces the previous one;
//! the host owns the dismissal timer for the visible alert only, so replacing an
//! alert cancels the old timer instead of letting it fire into nothing.

use std::cell::RefCell;

/// Auto-dismiss delay for alerts, in milliseconds.
pub const ALERT_TIMEOUT_MS: u32 = 5_000;

/// Alert severity, mapped onto `alert-*` classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertLevel {
    /// Neutral information.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Something worth a second look.
    Warning,
    /// Failed action.
    Danger,
}

impl AlertLevel {
    /// Class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A visible alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Monotonic identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Severity.
    pub level: AlertLevel,
}

/// Anything that can present an alert to the user.
pub trait AlertSink {
    /// Present `message` at `level`, replacing whatever is showing.
    fn show_alert(&self, message: &str, level: AlertLevel);
}

/// Tracks the one visible alert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertCenter {
    next_id: u64,
    current: Option<Alert>,
}

impl AlertCenter {
    /// No alert showing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible alert.
    pub fn show(&mut self, message: impl Into<String>, level: AlertLevel) -> Alert {
        self.next_id += 1;
        let alert = Alert {
            id: self.next_id,
            message: message.into(),
            level,
        };
        self.current = Some(alert.clone());
        alert
    }

    /// Visible alert, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Dismiss alert `id` if it is still the visible one. Returns whether it was.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|alert| alert.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}

impl AlertSink for RefCell<AlertCenter> {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        self.borrow_mut().show(message, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_replaces_previous() {
        let mut center = AlertCenter::new();
        let first = center.show("Saving", AlertLevel::Info);
        let second = center.show("Saved", AlertLevel::Success);
        assert_ne!(first.id, second.id);
        assert_eq!(center.current(), Some(&second));
    }

    #[test]
    fn stale_expiry_does_not_remove_newer_alert() {
        let mut center = AlertCenter::new();
        let first = center.show("one", AlertLevel::Info);
        let second = center.show("two", AlertLevel::Danger);
        assert!(!center.expire(first.id));
        assert_eq!(center.current().map(|a| a.id), Some(second.id));
        assert!(center.expire(second.id));
        assert!(center.current().is_none());
    }

    #[test]
    fn refcell_sink_records_alert() {
        let sink = RefCell::new(AlertCenter::new());
        sink.show_alert("hello", AlertLevel::Warning);
        let center = sink.borrow();
        let alert = center.current().unwrap();
        assert_eq!(alert.message, "hello");
        assert_eq!(alert.level.as_str(), "warning");
    }
}
