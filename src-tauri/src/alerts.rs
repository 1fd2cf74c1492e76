//! Dialog-backed Alerts
//!
//! Shows screen alerts as native message dialogs.

use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use task_board_core::{Alert, AlertSink};

pub struct DialogAlertSink<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogAlertSink<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> AlertSink for DialogAlertSink<R> {
    fn alert(&self, alert: Alert) {
        log::info!("Alert: {:?}", alert.message);
        let mut dialog = self.app.dialog().message(alert.message);
        if let Some(title) = alert.title {
            dialog = dialog.title(title).kind(MessageDialogKind::Error);
        }
        dialog.show(|_| {});
    }
}
