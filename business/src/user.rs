//! The user-account model shared by the table and the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permission level of an account.
///
/// The backend stores the SCREAMING_SNAKE_CASE names on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// All roles, in the order they appear in the role selector.
    pub const ALL: [Self; 3] = [Self::Student, Self::Teacher, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by `GET /{stage}/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier. A not-yet-created user is represented
    /// by the absence of a `User`, never by a placeholder id.
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: UserRole,
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Human-readable age of an account relative to `now`.
///
/// Floor division at every step, no rounding: minutes below 60, hours below
/// 60, days below 30, 30-day months below 12, years after that. A creation
/// time in the future clamps to zero minutes.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_min = (now - created_at).num_seconds() / 60;
    if diff_min < 60 {
        return format!("Created {} minutes ago", diff_min.max(0));
    }
    let diff_hour = diff_min / 60;
    if diff_hour < 60 {
        return format!("Created {diff_hour} hours ago");
    }
    let diff_day = diff_hour / 24;
    if diff_day < 30 {
        return format!("Created {diff_day} days ago");
    }
    let diff_month = diff_day / 30;
    if diff_month < 12 {
        return format!("Created {diff_month} months ago");
    }
    format!("Created {} years ago", diff_month / 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn age_after(delta: TimeDelta) -> String {
        let now = Utc::now();
        relative_age(now - delta, now)
    }

    #[test]
    fn test_relative_age_minutes() {
        assert_eq!(age_after(TimeDelta::seconds(30)), "Created 0 minutes ago");
        assert_eq!(age_after(TimeDelta::minutes(59)), "Created 59 minutes ago");
    }

    #[test]
    fn test_relative_age_clamps_future_timestamps() {
        assert_eq!(age_after(TimeDelta::seconds(-30)), "Created 0 minutes ago");
        assert_eq!(age_after(TimeDelta::minutes(-5)), "Created 0 minutes ago");
    }

    #[test]
    fn test_relative_age_hours() {
        assert_eq!(age_after(TimeDelta::minutes(90)), "Created 1 hours ago");
        assert_eq!(age_after(TimeDelta::hours(50)), "Created 50 hours ago");
        assert_eq!(age_after(TimeDelta::hours(59)), "Created 59 hours ago");
    }

    #[test]
    fn test_relative_age_days() {
        // The hour bucket runs to 60 hours, so days start at 60h / 24 = 2.
        assert_eq!(age_after(TimeDelta::hours(60)), "Created 2 days ago");
        assert_eq!(age_after(TimeDelta::days(29)), "Created 29 days ago");
    }

    #[test]
    fn test_relative_age_months() {
        assert_eq!(age_after(TimeDelta::days(45)), "Created 1 months ago");
        assert_eq!(age_after(TimeDelta::days(359)), "Created 11 months ago");
    }

    #[test]
    fn test_relative_age_years() {
        // 360 days is 12 thirty-day months, which rolls over into years.
        assert_eq!(age_after(TimeDelta::days(360)), "Created 1 years ago");
        assert_eq!(age_after(TimeDelta::days(800)), "Created 2 years ago");
    }

    #[test]
    fn test_user_deserializes_wire_names() {
        let raw = r#"{
            "id": "u-17",
            "username": "alice",
            "full_name": "Alice Liddell",
            "email": "alice@example.com",
            "password": "secret",
            "role": "STUDENT",
            "createdAt": 1700000000000
        }"#;

        let user: User = serde_json::from_str(raw).expect("user should deserialize");
        assert_eq!(user.id, "u-17");
        assert_eq!(user.full_name, "Alice Liddell");
        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_user_tolerates_missing_password() {
        let raw = r#"{
            "id": "u-18",
            "username": "bob",
            "full_name": "Bob",
            "email": "bob@example.com",
            "role": "ADMIN",
            "createdAt": 1700000000000
        }"#;

        let user: User = serde_json::from_str(raw).expect("user should deserialize");
        assert!(user.password.is_empty());
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_role_round_trips() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).expect("role should serialize");
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: UserRole = serde_json::from_str(&json).expect("role should deserialize");
            assert_eq!(back, role);
        }
    }
}
