//! Explicit API configuration, constructed once and passed down.
//!
//! The backend is addressed as `{base_url}/{stage}/user`; `stage` is the
//! deployment environment segment embedded in every path. Defaults are
//! selected at compile time via Cargo features.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend, no trailing slash.
    pub base_url: String,
    /// Deployment stage segment (e.g. `dev`, `prod`).
    pub stage: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            stage: stage.into(),
        }
    }

    /// URL of the user collection: `{base}/{stage}/user`.
    pub fn users_url(&self) -> String {
        format!("{}/{}/user", self.base_url, self.stage)
    }

    /// URL of a single user: `{base}/{stage}/user/{id}`.
    pub fn user_url(&self, id: &str) -> String {
        format!("{}/{}/user/{}", self.base_url, self.stage, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        if cfg!(feature = "env_prod") {
            Self::new("https://api.roster-admin.app", "prod")
        } else if cfg!(feature = "env_test") {
            Self::new("https://api-test.roster-admin.app", "test")
        } else {
            Self::new("http://localhost:7788", "dev")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_url_includes_stage() {
        let config = ApiConfig::new("http://localhost:7788", "dev");
        assert_eq!(config.users_url(), "http://localhost:7788/dev/user");
    }

    #[test]
    fn test_user_url_includes_id() {
        let config = ApiConfig::new("http://localhost:7788", "dev");
        assert_eq!(config.user_url("42"), "http://localhost:7788/dev/user/42");
    }

    #[test]
    fn test_default_matches_environment() {
        let config = ApiConfig::default();

        if cfg!(feature = "env_prod") {
            assert_eq!(config.base_url, "https://api.roster-admin.app");
            assert_eq!(config.stage, "prod");
        } else if cfg!(feature = "env_test") {
            assert_eq!(config.base_url, "https://api-test.roster-admin.app");
            assert_eq!(config.stage, "test");
        } else {
            assert_eq!(config.base_url, "http://localhost:7788");
            assert_eq!(config.stage, "dev");
        }
    }
}
