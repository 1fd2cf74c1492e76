//! Log Panel Component
//!
//! Recent backend log lines, newest last.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

const LOG_LIMIT: usize = 100;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    let reload = move || {
        spawn_local(async move {
            match commands::get_recent_logs(Some(LOG_LIMIT)).await {
                Ok(loaded) => set_lines.set(loaded),
                Err(e) => web_sys::console::error_1(&format!("[LOGS] {}", e).into()),
            }
        });
    };

    Effect::new(move |_| reload());

    view! {
        <div class="log-panel">
            <div class="log-panel-header">
                <h3>"Recent Logs"</h3>
                <button on:click=move |_| reload()>"Reload"</button>
            </div>
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </div>
    }
}
