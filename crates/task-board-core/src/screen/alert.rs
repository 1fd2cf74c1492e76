//! Alert output seam.
//!
//! The screen never returns errors to its caller; every failure becomes an
//! alert pushed through this trait.

use crate::domain::Alert;

/// Title of alerts raised by list loads
pub const ERROR_TITLE: &str = "Error!";

/// Shown when "add" is pressed with nothing typed
pub const EMPTY_INPUT_MESSAGE: &str = "No character detected\nPlease Try Again";

/// Prefix of the alert raised when creating a task fails
pub const CREATE_FAILED_PREFIX: &str = "Failed to create new object, with error code: ";

/// Something that can show a blocking alert dialog
pub trait AlertSink: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// Logs alerts instead of showing them (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn alert(&self, alert: Alert) {
        match alert.title {
            Some(title) => log::warn!("[alert] {}: {}", title, alert.message),
            None => log::warn!("[alert] {}", alert.message),
        }
    }
}
