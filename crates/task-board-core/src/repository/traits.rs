//! Repository Layer - Core Traits
//!
//! The remote Task collection as the screen consumes it.
//! Implementations: Parse REST API, in-memory (tests).

use std::sync::Arc;

use async_trait::async_trait;

use super::error::StoreResult;
use crate::domain::{NewTask, ObjectId, Task};

/// Query-builder style access to the Task collection
///
/// All operations are async and may fail with a transport or service error.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Unfiltered find, in the store's default iteration order
    async fn find_all(&self) -> StoreResult<Vec<Task>>;

    /// First record whose `field` equals `value`
    async fn find_first(&self, field: &str, value: &str) -> StoreResult<Option<Task>>;

    /// Create a record from a field map
    async fn create(&self, task: &NewTask) -> StoreResult<Task>;

    /// Destroy a record by id
    async fn destroy(&self, id: &ObjectId) -> StoreResult<()>;
}

#[async_trait]
impl<T: TaskStore + ?Sized> TaskStore for Arc<T> {
    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        (**self).find_all().await
    }

    async fn find_first(&self, field: &str, value: &str) -> StoreResult<Option<Task>> {
        (**self).find_first(field, value).await
    }

    async fn create(&self, task: &NewTask) -> StoreResult<Task> {
        (**self).create(task).await
    }

    async fn destroy(&self, id: &ObjectId) -> StoreResult<()> {
        (**self).destroy(id).await
    }
}
