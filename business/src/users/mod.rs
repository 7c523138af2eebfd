//! User management: the form state machine and the REST call layer.

pub mod api;
pub mod form;
