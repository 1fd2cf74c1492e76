//! In-memory Task store for controller tests.
//!
//! Keeps insertion order like the hosted store's default ordering and counts
//! every call so tests can assert when no request was made.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};

use super::error::{StoreError, StoreResult};
use super::traits::TaskStore;
use crate::domain::{NewTask, ObjectId, Task};

#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    creates: AtomicUsize,
    destroys: AtomicUsize,
    failure: Mutex<Option<String>>,
    destroy_gate: AsyncMutex<()>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given descriptions
    pub fn with_descriptions(descriptions: &[&str]) -> Self {
        let store = Self::new();
        for description in descriptions {
            store.insert(description);
        }
        store
    }

    /// Insert behind the screen's back (another client writing)
    pub fn insert(&self, description: &str) -> ObjectId {
        let id = ObjectId::new(format!("task{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.lock().push(Task::new(id.clone(), description));
        id
    }

    /// Remove behind the screen's back (another client deleting)
    pub fn remove(&self, id: &ObjectId) {
        self.lock().retain(|task| &task.id != id);
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock().clone()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.lock().iter().map(|t| t.description.clone()).collect()
    }

    /// Every call made, successful or not
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn destroy_count(&self) -> usize {
        self.destroys.load(Ordering::SeqCst)
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Destroys block while the returned guard is alive
    pub async fn hold_destroys(&self) -> AsyncMutexGuard<'_, ()> {
        self.destroy_gate.lock().await
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap()
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::service(100, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        self.enter()?;
        Ok(self.tasks())
    }

    async fn find_first(&self, field: &str, value: &str) -> StoreResult<Option<Task>> {
        self.enter()?;
        if field != "description" {
            return Ok(None);
        }
        Ok(self.lock().iter().find(|t| t.description == value).cloned())
    }

    async fn create(&self, task: &NewTask) -> StoreResult<Task> {
        self.enter()?;
        self.creates.fetch_add(1, Ordering::SeqCst);
        let id = self.insert(&task.description);
        Ok(Task::new(id, task.description.clone()))
    }

    async fn destroy(&self, id: &ObjectId) -> StoreResult<()> {
        let _gate = self.destroy_gate.lock().await;
        self.enter()?;
        self.destroys.fetch_add(1, Ordering::SeqCst);
        let mut tasks = self.lock();
        let before = tasks.len();
        tasks.retain(|task| &task.id != id);
        if tasks.len() == before {
            return Err(StoreError::not_found());
        }
        Ok(())
    }
}
