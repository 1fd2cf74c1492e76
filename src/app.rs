//! Root component: task screen, settings and the bottom navigation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, on_screen_changed};
use crate::components::{LogPanel, StoreSettings, TaskInput, TaskList};
use crate::store::{store_apply_list, store_apply_snapshot, ScreenState, ScreenStateStoreFields, ScreenStore};
use crate::ui::show_alert;

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Tasks,
    Settings,
}

#[component]
pub fn App() -> impl IntoView {
    let store: ScreenStore = Store::new(ScreenState::default());
    provide_context(store);

    let (current_view, set_current_view) = signal(Page::Tasks);

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_store_config().await {
                Ok(Some(_)) => {
                    *store.configured().write() = true;
                    match commands::load_tasks().await {
                        Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                        Err(e) => show_alert(&e),
                    }
                }
                Ok(None) => {
                    web_sys::console::log_1(&"[APP] No store connection, opening settings".into());
                    set_current_view.set(Page::Settings);
                }
                Err(e) => show_alert(&e),
            }
        });
    });

    on_screen_changed(move |snapshot| store_apply_list(&store, snapshot));

    let refresh = move |_| {
        spawn_local(async move {
            match commands::refresh_tasks().await {
                Ok(snapshot) => store_apply_list(&store, snapshot),
                Err(e) => show_alert(&e),
            }
        });
    };

    // Pick up anything the backend changed while another page was shown
    let open_tasks = move |_| {
        set_current_view.set(Page::Tasks);
        if !store.configured().get_untracked() {
            return;
        }
        spawn_local(async move {
            match commands::get_screen().await {
                Ok(snapshot) => store_apply_list(&store, snapshot),
                Err(e) => web_sys::console::warn_1(&format!("[APP] Re-sync failed: {}", e).into()),
            }
        });
    };

    view! {
        <div class="app-container">
            <div class="app-content">
                {move || match current_view.get() {
                    Page::Tasks => view! {
                        <div class="tasks-wrapper">
                            <div class="section-header">
                                <h1 class="section-title">"Today's Task"</h1>
                                <Show when=move || store.configured().get()>
                                    <button class="refresh-button" title="Refresh" on:click=refresh>"⟳"</button>
                                </Show>
                            </div>
                            <Show
                                when=move || store.configured().get()
                                fallback=|| view! {
                                    <p class="empty-hint">"Connect a store in Settings to begin."</p>
                                }
                            >
                                <TaskList />
                            </Show>
                        </div>
                        <Show when=move || store.configured().get()>
                            <TaskInput />
                        </Show>
                    }.into_any(),
                    Page::Settings => view! {
                        <StoreSettings on_saved=move |_| set_current_view.set(Page::Tasks) />
                        <LogPanel />
                    }.into_any(),
                }}
            </div>

            <nav class="bottom-nav">
                <button
                    class=move || if current_view.get() == Page::Tasks { "nav-item active" } else { "nav-item" }
                    on:click=open_tasks
                >
                    "Tasks"
                </button>
                <button
                    class=move || if current_view.get() == Page::Settings { "nav-item active" } else { "nav-item" }
                    on:click=move |_| set_current_view.set(Page::Settings)
                >
                    "Settings"
                </button>
            </nav>
        </div>
    }
}
