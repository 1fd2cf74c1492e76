//! Tauri Commands for the Task Screen
//!
//! Each command returns the screen snapshot after the operation. Store
//! failures surface as alerts, not as command errors; the only error here
//! is an unconfigured store.

use tauri::State;
use task_board_core::ScreenSnapshot;

use crate::AppState;

/// First load when the screen is shown
#[tauri::command]
pub async fn load_tasks(state: State<'_, AppState>) -> Result<ScreenSnapshot, String> {
    let screen = state.screen().await?;
    Ok(screen.initialize().await)
}

/// Current snapshot without touching the store
#[tauri::command]
pub async fn get_screen(state: State<'_, AppState>) -> Result<ScreenSnapshot, String> {
    let screen = state.screen().await?;
    Ok(screen.snapshot().await)
}

/// Input text changed (called per keystroke)
#[tauri::command]
pub async fn set_input_text(
    state: State<'_, AppState>,
    text: String,
) -> Result<ScreenSnapshot, String> {
    let screen = state.screen().await?;
    Ok(screen.set_input_text(text).await)
}

/// Create a task from the current input text
#[tauri::command]
pub async fn add_task(state: State<'_, AppState>) -> Result<ScreenSnapshot, String> {
    let screen = state.screen().await?;
    Ok(screen.add_task().await)
}

/// Complete (delete) the task at a list position
#[tauri::command]
pub async fn complete_task(
    state: State<'_, AppState>,
    index: usize,
) -> Result<ScreenSnapshot, String> {
    let screen = state.screen().await?;
    Ok(screen.complete_task(index).await)
}

/// Re-fetch the whole list
#[tauri::command]
pub async fn refresh_tasks(state: State<'_, AppState>) -> Result<ScreenSnapshot, String> {
    let screen = state.screen().await?;
    Ok(screen.refresh().await)
}
