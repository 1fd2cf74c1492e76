//! Store Settings Component
//!
//! Form for the Parse connection and screen behaviour flags.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{BusyRelease, StoreConfig};
use crate::store::{store_apply_snapshot, use_screen_store, ScreenStateStoreFields};
use crate::ui::show_alert;

const PARITY_DELAY_MS: u64 = 2000;

fn optional(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

#[component]
pub fn StoreSettings(#[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let store = use_screen_store();

    let (server_url, set_server_url) = signal(String::new());
    let (application_id, set_application_id) = signal(String::new());
    let (javascript_key, set_javascript_key) = signal(String::new());
    let (rest_api_key, set_rest_api_key) = signal(String::new());
    let (class_name, set_class_name) = signal(String::new());
    let (refresh_on_keystroke, set_refresh_on_keystroke) = signal(false);
    let (delete_by_description, set_delete_by_description) = signal(false);
    let (delayed_release, set_delayed_release) = signal(false);
    let (saving, set_saving) = signal(false);

    let fill = move |config: StoreConfig| {
        set_server_url.set(config.server_url);
        set_application_id.set(config.application_id);
        set_javascript_key.set(config.javascript_key.unwrap_or_default());
        set_rest_api_key.set(config.rest_api_key.unwrap_or_default());
        set_class_name.set(config.class_name);
        set_refresh_on_keystroke.set(config.screen.refresh_on_keystroke);
        set_delete_by_description.set(config.screen.delete_by_description);
        set_delayed_release.set(matches!(config.screen.busy_release, BusyRelease::AfterDelay { .. }));
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_store_config().await {
                Ok(Some(config)) => fill(config),
                Ok(None) => fill(StoreConfig::default()),
                Err(e) => web_sys::console::error_1(&format!("[SETTINGS] Load failed: {}", e).into()),
            }
        });
    });

    let on_save = move |_| {
        let mut config = StoreConfig {
            server_url: server_url.get().trim().to_string(),
            application_id: application_id.get().trim().to_string(),
            javascript_key: optional(javascript_key.get()),
            rest_api_key: optional(rest_api_key.get()),
            ..StoreConfig::default()
        };
        if let Some(name) = optional(class_name.get()) {
            config.class_name = name;
        }
        config.screen.refresh_on_keystroke = refresh_on_keystroke.get();
        config.screen.delete_by_description = delete_by_description.get();
        if delayed_release.get() {
            config.screen.busy_release = BusyRelease::AfterDelay { after_ms: PARITY_DELAY_MS };
        }

        set_saving.set(true);
        spawn_local(async move {
            match commands::save_store_config(&config).await {
                Ok(snapshot) => {
                    store_apply_snapshot(&store, snapshot);
                    *store.configured().write() = true;
                    on_saved.run(());
                }
                Err(e) => show_alert(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="settings-form">
            <h2>"Store Connection"</h2>

            <label class="settings-field">
                <span>"Server URL"</span>
                <input type="text" prop:value=server_url
                    on:input=move |ev| set_server_url.set(event_target_value(&ev)) />
            </label>
            <label class="settings-field">
                <span>"Application ID"</span>
                <input type="text" prop:value=application_id
                    on:input=move |ev| set_application_id.set(event_target_value(&ev)) />
            </label>
            <label class="settings-field">
                <span>"JavaScript Key"</span>
                <input type="password" prop:value=javascript_key
                    on:input=move |ev| set_javascript_key.set(event_target_value(&ev)) />
            </label>
            <label class="settings-field">
                <span>"REST API Key"</span>
                <input type="password" prop:value=rest_api_key
                    on:input=move |ev| set_rest_api_key.set(event_target_value(&ev)) />
            </label>
            <label class="settings-field">
                <span>"Class"</span>
                <input type="text" placeholder="Task" prop:value=class_name
                    on:input=move |ev| set_class_name.set(event_target_value(&ev)) />
            </label>

            <h3>"Behaviour"</h3>
            <label class="settings-check">
                <input type="checkbox" prop:checked=refresh_on_keystroke
                    on:change=move |ev| set_refresh_on_keystroke.set(event_target_checked(&ev)) />
                <span>"Refresh list on every keystroke"</span>
            </label>
            <label class="settings-check">
                <input type="checkbox" prop:checked=delete_by_description
                    on:change=move |ev| set_delete_by_description.set(event_target_checked(&ev)) />
                <span>"Complete first task with the same text"</span>
            </label>
            <label class="settings-check">
                <input type="checkbox" prop:checked=delayed_release
                    on:change=move |ev| set_delayed_release.set(event_target_checked(&ev)) />
                <span>"Keep spinner for 2 seconds after a change"</span>
            </label>

            <button class="settings-save" disabled=move || saving.get() on:click=on_save>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}
