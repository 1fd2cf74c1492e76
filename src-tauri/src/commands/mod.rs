//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the task screen.

mod task_cmd;
mod config_cmd;
mod log_cmd;

pub use task_cmd::*;
pub use config_cmd::*;
pub use log_cmd::*;
