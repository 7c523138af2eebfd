mod confirm;
pub mod users;

pub use confirm::{ConfirmChoice, confirm_modal};
