//! Task Input Component
//!
//! Single-line input bound to the screen's input text, plus the add control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::AddButton;
use crate::store::{store_apply_list, store_apply_snapshot, use_screen_store, ScreenStateStoreFields};
use crate::ui::{dismiss_keyboard, show_alert};

#[component]
pub fn TaskInput() -> impl IntoView {
    let store = use_screen_store();

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        *store.input_text().write() = text.clone();
        spawn_local(async move {
            match commands::set_input_text(&text).await {
                Ok(snapshot) => store_apply_list(&store, snapshot),
                Err(e) => web_sys::console::warn_1(&format!("[INPUT] {}", e).into()),
            }
        });
    };

    let on_add = move |_| {
        dismiss_keyboard();
        let text = store.input_text().get();
        spawn_local(async move {
            // Keystroke updates may still be in flight; pin the text first
            if let Err(e) = commands::set_input_text(&text).await {
                show_alert(&e);
                return;
            }
            match commands::add_task().await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => show_alert(&e),
            }
        });
    };

    view! {
        <div class="write-task-wrapper">
            <input
                class="task-input"
                type="text"
                placeholder="Write a task"
                prop:value=move || store.input_text().get()
                on:input=on_input
            />
            <AddButton
                busy=Signal::derive(move || store.busy().get())
                on_add=Callback::new(on_add)
            />
        </div>
    }
}
