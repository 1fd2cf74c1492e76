//! Add Button Component
//!
//! The "+" glyph, or a spinner while the screen is busy.

use leptos::prelude::*;

#[component]
pub fn AddButton(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !busy.get()
            fallback=|| view! {
                <div class="add-wrapper">
                    <div class="spinner"></div>
                </div>
            }
        >
            <button class="add-wrapper" on:click=move |_| on_add.run(())>
                <span class="add-text">"+"</span>
            </button>
        </Show>
    }
}
