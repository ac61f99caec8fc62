//! UI Components
//!
//! Leptos components rendering the board.

mod dashboard;
mod delete_confirm_button;
mod details_modal;
mod file_list;
mod project_card;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use details_modal::DetailsModal;
pub use file_list::FileList;
pub use project_card::ProjectCard;
