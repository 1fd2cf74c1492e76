//! Task Item Component
//!
//! One tappable row. Tapping completes (deletes) the task.

use leptos::prelude::*;

#[component]
pub fn TaskItem(
    #[prop(into)] text: String,
    #[prop(into)] on_tap: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="task-item" on:click=move |_| on_tap.run(())>
            <div class="task-item-left">
                <div class="task-square"></div>
                <p class="task-text">{text}</p>
            </div>
            <div class="task-circular"></div>
        </div>
    }
}
