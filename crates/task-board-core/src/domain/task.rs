//! Task Entity
//!
//! A to-do record held by the remote store. The store assigns `objectId`
//! on creation; the application never updates a task in place.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a task record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A task record as stored remotely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the store
    #[serde(rename = "objectId")]
    pub id: ObjectId,
    /// User-visible text; records written by other clients may lack it
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: ObjectId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Field map sent when creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub description: String,
}

impl NewTask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_store_json() {
        let json = r#"{
            "objectId": "xWMyZ4YEGZ",
            "description": "Buy milk",
            "createdAt": "2024-03-01T09:30:00.000Z",
            "updatedAt": "2024-03-01T09:30:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, ObjectId::new("xWMyZ4YEGZ"));
        assert_eq!(task.description, "Buy milk");
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_task_without_description() {
        let task: Task = serde_json::from_str(r#"{"objectId":"a1"}"#).unwrap();
        assert_eq!(task.description, "");
        assert!(task.created_at.is_none());
    }

    #[test]
    fn test_new_task_body() {
        let body = serde_json::to_value(NewTask::new("Walk dog")).unwrap();
        assert_eq!(body, serde_json::json!({ "description": "Walk dog" }));
    }
}
