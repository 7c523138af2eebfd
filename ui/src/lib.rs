#![warn(clippy::all, rust_2018_idioms)]

//! The Roster admin console UI: app shell, users page, and dialogs.

pub mod app;
pub mod widgets;

pub use app::RosterApp;
