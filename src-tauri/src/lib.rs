//! Task Board Backend
//!
//! - commands: Tauri command handlers
//! - alerts: Native dialogs for screen alerts
//!
//! The screen controller and the Parse client live in `task-board-core`;
//! this crate wires them to the window.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tauri::{AppHandle, Emitter, Manager, Runtime};
use tokio::sync::Mutex;

use task_board_core::config::{load_config, CONFIG_FILE_NAME};
use task_board_core::{ParseTaskStore, ScreenSnapshot, StoreConfig, TaskScreen};

mod alerts;
mod commands;

use alerts::DialogAlertSink;

/// Emitted with a `ScreenSnapshot` whenever the busy flag flips
pub const SCREEN_CHANGED_EVENT: &str = "screen-changed";

const NOT_CONFIGURED: &str = "Remote store is not configured";

pub type Screen = TaskScreen<ParseTaskStore>;

/// Application state shared across commands
pub struct AppState {
    pub config_path: PathBuf,
    /// `None` until a store connection has been configured
    screen: Mutex<Option<Arc<Screen>>>,
}

impl AppState {
    pub fn new(config_path: PathBuf, screen: Option<Arc<Screen>>) -> Self {
        Self {
            config_path,
            screen: Mutex::new(screen),
        }
    }

    pub async fn screen(&self) -> Result<Arc<Screen>, String> {
        self.screen
            .lock()
            .await
            .clone()
            .ok_or_else(|| NOT_CONFIGURED.to_string())
    }

    /// Swap in a screen built from a new configuration
    pub async fn replace_screen(&self, screen: Arc<Screen>) {
        *self.screen.lock().await = Some(screen);
    }
}

/// Get config file path from app handle
fn get_config_path<R: Runtime>(app_handle: &AppHandle<R>) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    Ok(app_dir.join(CONFIG_FILE_NAME))
}

/// Build a screen with its own client for `config`
pub(crate) fn build_screen<R: Runtime>(
    app_handle: &AppHandle<R>,
    config: &StoreConfig,
) -> Result<Arc<Screen>, String> {
    let store = ParseTaskStore::new(config).map_err(|e| e.to_string())?;
    let alerts = Arc::new(DialogAlertSink::new(app_handle.clone()));
    let emitter = app_handle.clone();

    let screen = TaskScreen::new(store, alerts, config.screen.clone()).with_busy_listener(
        Arc::new(move |snapshot: ScreenSnapshot| {
            if let Err(e) = emitter.emit(SCREEN_CHANGED_EVENT, &snapshot) {
                log::warn!("Failed to emit {}: {}", SCREEN_CHANGED_EVENT, e);
            }
        }),
    );
    Ok(Arc::new(screen))
}

fn initial_screen<R: Runtime>(app_handle: &AppHandle<R>, config_path: &Path) -> Option<Arc<Screen>> {
    match load_config(config_path) {
        Ok(Some(config)) => match build_screen(app_handle, &config) {
            Ok(screen) => {
                log::info!("Store configured: {}", config.server_url);
                Some(screen)
            }
            Err(e) => {
                let _ = rolling_logger::error(&format!("Failed to build store client: {}", e));
                None
            }
        },
        Ok(None) => {
            log::info!("No store config at {}", config_path.display());
            None
        }
        Err(e) => {
            let _ = rolling_logger::error(&format!("Failed to read store config: {}", e));
            None
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                let _ = rolling_logger::warn("Second instance launched, focusing main window");
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            if let Err(e) = rolling_logger::init_logger(app_handle.path().app_log_dir()?, "TaskBoard") {
                eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
            }
            let _ = rolling_logger::info("App setup starting");

            let config_path = get_config_path(&app_handle)?;
            let screen = initial_screen(&app_handle, &config_path);
            app.manage(AppState::new(config_path, screen));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Task screen
            commands::load_tasks,
            commands::get_screen,
            commands::set_input_text,
            commands::add_task,
            commands::complete_task,
            commands::refresh_tasks,
            // Store connection
            commands::get_store_config,
            commands::save_store_config,
            // Diagnostics
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use task_board_core::{LogAlertSink, ScreenOptions};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn screen_for(server_url: &str) -> Arc<Screen> {
        let config = StoreConfig::new(server_url, "app-id");
        let store = ParseTaskStore::new(&config).expect("Failed to build store");
        Arc::new(TaskScreen::new(store, Arc::new(LogAlertSink), ScreenOptions::default()))
    }

    #[tokio::test]
    async fn test_unconfigured_state_rejects_screen_access() {
        let state = AppState::new(PathBuf::from("store_config.json"), None);
        assert_eq!(state.screen().await.err().as_deref(), Some(NOT_CONFIGURED));
    }

    #[tokio::test]
    async fn test_replace_screen() {
        let server = MockServer::start().await;
        let state = AppState::new(PathBuf::from("store_config.json"), None);
        state.replace_screen(screen_for(&server.uri())).await;

        let screen = state.screen().await.expect("screen configured");
        let snapshot = screen.set_input_text("Buy milk").await;
        assert_eq!(snapshot.input_text, "Buy milk");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": 1,
                "error": "Internal server error."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = AppState::new(PathBuf::from("store_config.json"), Some(screen_for(&server.uri())));
        let snapshot = state.screen().await.expect("screen configured").initialize().await;
        assert!(snapshot.tasks.is_empty());
        assert!(!snapshot.busy);
    }
}
