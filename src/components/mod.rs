//! UI Components
//!
//! Leptos components making up the task list widget.

mod task_form;
mod task_list;
mod task_row;
mod widget;

pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use widget::TaskListWidget;
