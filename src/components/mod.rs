//! UI Components
//!
//! Leptos components for the user dashboard.

mod user_dashboard;
mod user_form;
mod user_list;

pub use user_dashboard::UserDashboard;
pub use user_form::UserForm;
pub use user_list::UserList;
