//! Task Board Core
//!
//! Layered like the app backend:
//! - domain: Task records and screen view models
//! - repository: The remote Task collection (Parse REST API)
//! - screen: The list screen controller
//! - config: Store connection settings

pub mod config;
pub mod domain;
pub mod repository;
pub mod screen;

pub use config::{BusyRelease, ConfigError, ScreenOptions, StoreConfig};
pub use domain::{Alert, NewTask, ObjectId, ScreenSnapshot, Task, TaskRow};
pub use repository::{ParseTaskStore, StoreError, StoreResult, TaskStore};
pub use screen::{AlertSink, BusyListener, LogAlertSink, TaskScreen};
