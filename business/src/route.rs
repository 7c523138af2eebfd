//! Route state for page navigation.
//!
//! The console currently has a single page; the enum exists so the app
//! shell dispatches pages the same way regardless of how many there are.

use serde::{Deserialize, Serialize};

/// Represents the current page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The user-account management page.
    #[default]
    Users,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_users() {
        assert_eq!(Route::default(), Route::Users);
    }
}
