//! Diagnostics Commands

const DEFAULT_LOG_LINES: usize = 100;

/// Most recent log lines, oldest first
#[tauri::command]
pub fn get_recent_logs(limit: Option<usize>) -> Result<Vec<String>, String> {
    Ok(rolling_logger::recent_lines(limit.unwrap_or(DEFAULT_LOG_LINES)))
}
