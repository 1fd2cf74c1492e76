//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The backend
//! owns the real state; this mirrors its latest snapshot.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{ScreenSnapshot, TaskRow};

#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Text in the input box
    pub input_text: String,
    /// Rows in store order
    pub tasks: Vec<TaskRow>,
    /// Spinner instead of the add glyph; taps ignored
    pub busy: bool,
    /// Whether a store connection has been saved
    pub configured: bool,
}

pub type ScreenStore = Store<ScreenState>;

/// Get the screen store from context
pub fn use_screen_store() -> ScreenStore {
    expect_context::<ScreenStore>()
}

/// Replace everything with a snapshot
pub fn store_apply_snapshot(store: &ScreenStore, snapshot: ScreenSnapshot) {
    *store.input_text().write() = snapshot.input_text;
    *store.tasks().write() = snapshot.tasks;
    *store.busy().write() = snapshot.busy;
}

/// Take the list and busy flag, leave the input alone
///
/// Used for snapshots that may race with typing.
pub fn store_apply_list(store: &ScreenStore, snapshot: ScreenSnapshot) {
    *store.tasks().write() = snapshot.tasks;
    *store.busy().write() = snapshot.busy;
}
