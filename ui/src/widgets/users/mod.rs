//! The users page: list table, create/edit form dialog, delete confirmation.

mod form;
mod panel;
mod state;

pub use panel::users_page;
pub use state::UsersState;
