//! Copy-to-clipboard flow with user feedback.

use crate::core::alerts::{AlertLevel, AlertSink};
use crate::core::error::ClipboardError;
use async_trait::async_trait;

/// Shown after a successful copy.
pub const COPY_SUCCESS_MESSAGE: &str = "Text copied to clipboard!";
/// Shown after a failed copy.
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy text. Please try again.";

/// Platform clipboard capability.
#[async_trait(?Send)]
pub trait ClipboardWriter {
    /// Write `text` to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] when the platform rejects the write.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text`, report the outcome through `alerts`, and return whether it worked.
pub async fn copy_to_clipboard<C, A>(clipboard: &C, alerts: &A, text: &str) -> bool
where
    C: ClipboardWriter + ?Sized,
    A: AlertSink + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            alerts.show_alert(COPY_SUCCESS_MESSAGE, AlertLevel::Success);
            true
        }
        Err(_) => {
            alerts.show_alert(COPY_FAILURE_MESSAGE, AlertLevel::Danger);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alerts::AlertCenter;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        written: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Rejected {
                    detail: "NotAllowedError".to_string(),
                });
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_copy_returns_true_and_shows_success() {
        let clipboard = FakeClipboard::default();
        let alerts = RefCell::new(AlertCenter::new());
        assert!(copy_to_clipboard(&clipboard, &alerts, "Guten Morgen").await);
        assert_eq!(clipboard.written.borrow().as_slice(), ["Guten Morgen"]);
        let center = alerts.borrow();
        let alert = center.current().unwrap();
        assert_eq!(alert.level, AlertLevel::Success);
        assert_eq!(alert.message, COPY_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn failed_copy_returns_false_and_shows_danger() {
        let clipboard = FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        };
        let alerts = RefCell::new(AlertCenter::new());
        assert!(!copy_to_clipboard(&clipboard, &alerts, "text").await);
        assert!(clipboard.written.borrow().is_empty());
        let center = alerts.borrow();
        let alert = center.current().unwrap();
        assert_eq!(alert.level, AlertLevel::Danger);
        assert_eq!(alert.message, COPY_FAILURE_MESSAGE);
    }
}
