//! UI Components
//!
//! Reusable Leptos components.

mod task_item;
mod task_list;
mod add_button;
mod task_input;
mod store_settings;
mod log_panel;

pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use add_button::AddButton;
pub use task_input::TaskInput;
pub use store_settings::StoreSettings;
pub use log_panel::LogPanel;
