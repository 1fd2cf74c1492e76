//! Task List Component
//!
//! Scrollable list of the screen's rows in store order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TaskItem;
use crate::store::{store_apply_list, use_screen_store, ScreenStateStoreFields};
use crate::ui::show_alert;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_screen_store();

    let complete = move |index: usize| {
        spawn_local(async move {
            match commands::complete_task(index).await {
                Ok(snapshot) => store_apply_list(&store, snapshot),
                Err(e) => show_alert(&e),
            }
        });
    };

    view! {
        <div class="task-list">
            <For
                each=move || store.tasks().get().into_iter().enumerate()
                // Position is part of the key: the tap handler sends the index
                key=|(index, row)| (*index, row.id.clone())
                children=move |(index, row)| {
                    view! {
                        <TaskItem
                            text=row.description
                            on_tap=Callback::new(move |_| complete(index))
                        />
                    }
                }
            />
        </div>
    }
}
