//! Domain Layer
//!
//! Task records as the remote store returns them, and the view-facing
//! shapes the screen hands to the frontend.
//! This layer has NO external dependencies (except serde/chrono for serialization).

mod task;
mod screen;

pub use task::{NewTask, ObjectId, Task};
pub use screen::{Alert, ScreenSnapshot, TaskRow};
