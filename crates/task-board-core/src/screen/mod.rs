//! Task Screen Controller
//!
//! Owns the visible task list, the input text and the busy flag. Every
//! confirmed mutation is followed by a full re-fetch of the remote list;
//! there is no optimistic update and no diffing.
//!
//! The state lock is never held across a store call, so concurrent
//! operations interleave and the last refresh to finish wins.

mod alert;


use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::config::{BusyRelease, ScreenOptions};
use crate::domain::{Alert, NewTask, ObjectId, ScreenSnapshot, TaskRow};
use crate::repository::{StoreError, StoreResult, TaskStore};

pub use alert::{AlertSink, LogAlertSink, CREATE_FAILED_PREFIX, EMPTY_INPUT_MESSAGE, ERROR_TITLE};

/// Called with the new snapshot whenever the busy flag flips
pub type BusyListener = Arc<dyn Fn(ScreenSnapshot) + Send + Sync>;

#[derive(Debug, Default)]
struct ScreenState {
    input_text: String,
    tasks: Vec<TaskRow>,
    busy: bool,
    /// Mutations still running; only tracked for `BusyRelease::Completion`
    in_flight: usize,
}

impl ScreenState {
    fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            input_text: self.input_text.clone(),
            tasks: self.tasks.clone(),
            busy: self.busy,
        }
    }

    /// Returns true on the Idle -> Busy transition
    fn enter_busy(&mut self) -> bool {
        self.in_flight = self.in_flight.saturating_add(1);
        let entered = !self.busy;
        self.busy = true;
        entered
    }
}

/// Controller for the single task list screen
pub struct TaskScreen<S> {
    store: S,
    alerts: Arc<dyn AlertSink>,
    options: ScreenOptions,
    state: Arc<Mutex<ScreenState>>,
    busy_listener: Option<BusyListener>,
}

impl<S: TaskStore> TaskScreen<S> {
    pub fn new(store: S, alerts: Arc<dyn AlertSink>, options: ScreenOptions) -> Self {
        Self {
            store,
            alerts,
            options,
            state: Arc::new(Mutex::new(ScreenState::default())),
            busy_listener: None,
        }
    }

    pub fn with_busy_listener(mut self, listener: BusyListener) -> Self {
        self.busy_listener = Some(listener);
        self
    }

    pub async fn snapshot(&self) -> ScreenSnapshot {
        self.state.lock().await.snapshot()
    }

    /// First load after the screen is shown
    pub async fn initialize(&self) -> ScreenSnapshot {
        info!("Loading task list");
        self.reload().await;
        self.snapshot().await
    }

    /// Re-fetch the whole list
    pub async fn refresh(&self) -> ScreenSnapshot {
        self.reload().await;
        self.snapshot().await
    }

    pub async fn set_input_text(&self, text: impl Into<String>) -> ScreenSnapshot {
        self.state.lock().await.input_text = text.into();
        if self.options.refresh_on_keystroke {
            self.reload().await;
        }
        self.snapshot().await
    }

    /// Create a task from the current input text
    ///
    /// Empty or whitespace-only input raises an alert without touching the
    /// store. Otherwise the input is cleared whatever the outcome.
    pub async fn add_task(&self) -> ScreenSnapshot {
        let description = self.state.lock().await.input_text.clone();
        if description.trim().is_empty() {
            debug!("Add rejected: empty input");
            self.alerts.alert(Alert::message(EMPTY_INPUT_MESSAGE));
            return self.snapshot().await;
        }

        match self.store.create(&NewTask::new(description)).await {
            Ok(task) => {
                info!("Created task {}", task.id);
                self.mark_busy().await;
                self.reload().await;
                self.finish_mutation().await;
            }
            Err(e) => {
                warn!("Failed to create task: {}", e);
                self.alerts
                    .alert(Alert::message(format!("{}{}", CREATE_FAILED_PREFIX, e)));
            }
        }

        self.state.lock().await.input_text.clear();
        self.snapshot().await
    }

    /// Complete (delete) the task shown at `index`
    ///
    /// Ignored entirely while busy. A record that no longer exists raises an
    /// alert.
    pub async fn complete_task(&self, index: usize) -> ScreenSnapshot {
        let (row, entered) = {
            let mut state = self.state.lock().await;
            if state.busy {
                debug!("Ignoring complete of row {} while busy", index);
                return state.snapshot();
            }
            let Some(row) = state.tasks.get(index).cloned() else {
                warn!("Complete of row {} out of range ({} rows)", index, state.tasks.len());
                return state.snapshot();
            };
            let entered = state.enter_busy();
            (row, entered.then(|| state.snapshot()))
        };
        if let Some(snapshot) = entered {
            self.notify(snapshot);
            self.schedule_release();
        }

        let outcome = match self.resolve_target(&row).await {
            Ok(id) => self.store.destroy(&id).await.map(|()| id),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(id) => {
                info!("Completed task {} ({:?})", id, row.description);
                self.reload().await;
            }
            Err(e) => {
                warn!("Failed to complete task {:?}: {}", row.description, e);
                self.alerts.alert(Alert::message(e.to_string()));
            }
        }

        self.finish_mutation().await;
        self.snapshot().await
    }

    /// Record to destroy for a tapped row
    async fn resolve_target(&self, row: &TaskRow) -> StoreResult<ObjectId> {
        if !self.options.delete_by_description {
            return Ok(row.id.clone());
        }
        self.store
            .find_first("description", &row.description)
            .await?
            .map(|task| task.id)
            .ok_or_else(StoreError::not_found)
    }

    /// Replace the list with the store's contents; false on failure
    async fn reload(&self) -> bool {
        match self.store.find_all().await {
            Ok(tasks) => {
                let rows: Vec<TaskRow> = tasks.into_iter().map(TaskRow::from).collect();
                debug!("Fetched {} tasks", rows.len());
                self.state.lock().await.tasks = rows;
                true
            }
            Err(e) => {
                warn!("Failed to load tasks: {}", e);
                self.alerts.alert(Alert::titled(ERROR_TITLE, e.to_string()));
                false
            }
        }
    }

    async fn mark_busy(&self) {
        let entered = {
            let mut state = self.state.lock().await;
            state.enter_busy().then(|| state.snapshot())
        };
        if let Some(snapshot) = entered {
            self.notify(snapshot);
            self.schedule_release();
        }
    }

    async fn finish_mutation(&self) {
        if self.options.busy_release != BusyRelease::Completion {
            return;
        }
        let released = {
            let mut state = self.state.lock().await;
            state.in_flight = state.in_flight.saturating_sub(1);
            let released = state.in_flight == 0 && state.busy;
            if state.in_flight == 0 {
                state.busy = false;
            }
            released.then(|| state.snapshot())
        };
        if let Some(snapshot) = released {
            debug!("Busy released on completion");
            self.notify(snapshot);
        }
    }

    fn notify(&self, snapshot: ScreenSnapshot) {
        if let Some(listener) = &self.busy_listener {
            listener(snapshot);
        }
    }

    fn schedule_release(&self) {
        let BusyRelease::AfterDelay { after_ms } = self.options.busy_release else {
            return;
        };
        let state = Arc::clone(&self.state);
        let listener = self.busy_listener.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(after_ms)).await;
            let snapshot = {
                let mut state = state.lock().await;
                state.busy = false;
                state.in_flight = 0;
                state.snapshot()
            };
            debug!("Busy released after {}ms", after_ms);
            if let Some(listener) = listener {
                listener(snapshot);
            }
        });
    }
}
