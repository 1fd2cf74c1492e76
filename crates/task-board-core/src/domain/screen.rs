//! Screen View Models
//!
//! Serializable shapes exchanged with the frontend.

use serde::{Deserialize, Serialize};

use super::task::{ObjectId, Task};

/// One visible row of the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: ObjectId,
    pub description: String,
}

impl From<Task> for TaskRow {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            description: task.description,
        }
    }
}

/// Copy of the screen state after an operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub input_text: String,
    pub tasks: Vec<TaskRow>,
    pub busy: bool,
}

impl ScreenSnapshot {
    /// Descriptions in list order
    pub fn descriptions(&self) -> Vec<&str> {
        self.tasks.iter().map(|row| row.description.as_str()).collect()
    }
}

/// A blocking alert shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Dialog title; `None` shows a plain message alert
    pub title: Option<String>,
    pub message: String,
}

impl Alert {
    pub fn titled(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: message.into(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
        }
    }
}
