#![warn(clippy::all, rust_2018_idioms)]

//! Domain and transport logic for the Roster admin console.
//!
//! Everything here is UI-framework agnostic apart from [`egui::Context`],
//! which API calls keep around solely to request a repaint when an
//! asynchronous response arrives.

pub mod config;
pub mod http;
pub mod route;
pub mod user;
pub mod users;

pub use config::ApiConfig;
pub use route::Route;
pub use user::{User, UserRole, relative_age};
pub use users::api::{GENERIC_ERROR, RolePayload, SaveOutcome, UserPayload, UsersEvent};
pub use users::form::{Field, FormValues, UserFormState, is_valid_email};
