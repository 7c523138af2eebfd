//! REST calls for the user console.
//!
//! Every call reports back exactly once through the page's event channel
//! and wakes the UI loop with a repaint request. The page applies the
//! events on the next frame; a list re-fetch triggered by a mutation is
//! therefore always issued strictly after that mutation's response.

use egui::Context;
use flume::Sender;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::http::{self, HttpResult};
use crate::user::{User, UserRole};
use crate::users::form::FormValues;

/// Generic message shown when the backend does not explain itself.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Result of a mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
}

/// Asynchronous outcomes delivered into the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersEvent {
    ListLoaded(Vec<User>),
    ListFailed(String),
    /// A full create or update submission finished.
    SaveFinished(SaveOutcome),
    /// The immediate partial role update finished.
    RoleChanged(SaveOutcome),
    DeleteFinished(SaveOutcome),
}

/// Wire shape of a create or full-update submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl From<&FormValues> for UserPayload {
    fn from(values: &FormValues) -> Self {
        Self {
            username: values.username.clone(),
            full_name: values.full_name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            role: values.role,
        }
    }
}

/// Partial update issued when the role selector changes on an existing user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePayload {
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Maps a mutation response onto an outcome, preferring the backend's
/// `{"error":{"message":..}}` text over the generic fallback.
fn submit_outcome(result: HttpResult) -> SaveOutcome {
    match result {
        Ok(response) if response.status == 200 => SaveOutcome::Saved,
        Ok(response) => SaveOutcome::Failed(
            serde_json::from_slice::<ErrorBody>(&response.bytes)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| GENERIC_ERROR.to_owned()),
        ),
        Err(_) => SaveOutcome::Failed(GENERIC_ERROR.to_owned()),
    }
}

/// `GET /{stage}/user`: the full user list.
pub fn fetch_users(config: &ApiConfig, events: Sender<UsersEvent>, ctx: Context) {
    let request = http::json_request("GET", config.users_url(), Vec::new());
    http::fetch(request, move |result| {
        let event = match result {
            Ok(response) if response.status == 200 => {
                match serde_json::from_slice::<Vec<User>>(&response.bytes) {
                    Ok(users) => UsersEvent::ListLoaded(users),
                    Err(err) => UsersEvent::ListFailed(format!("failed to parse user list: {err}")),
                }
            }
            Ok(response) => {
                UsersEvent::ListFailed(format!("user list returned status {}", response.status))
            }
            Err(err) => UsersEvent::ListFailed(err.to_string()),
        };
        let _ = events.send(event);
        ctx.request_repaint();
    });
}

/// `POST /{stage}/user`: create a user from the full field set.
pub fn create_user(config: &ApiConfig, payload: &UserPayload, events: Sender<UsersEvent>, ctx: Context) {
    let body = serde_json::to_vec(payload).unwrap_or_default();
    let request = http::json_request("POST", config.users_url(), body);
    http::fetch(request, move |result| {
        let _ = events.send(UsersEvent::SaveFinished(submit_outcome(result)));
        ctx.request_repaint();
    });
}

/// `PUT /{stage}/user/{id}`: update an existing user with the full field set.
pub fn update_user(
    config: &ApiConfig,
    id: &str,
    payload: &UserPayload,
    events: Sender<UsersEvent>,
    ctx: Context,
) {
    let body = serde_json::to_vec(payload).unwrap_or_default();
    let request = http::json_request("PUT", config.user_url(id), body);
    http::fetch(request, move |result| {
        let _ = events.send(UsersEvent::SaveFinished(submit_outcome(result)));
        ctx.request_repaint();
    });
}

/// `PUT /{stage}/user/{id}` with a partial `{role}` body.
///
/// Issued the moment the role selector changes on an existing user,
/// independent of the rest of the form.
pub fn change_role(
    config: &ApiConfig,
    id: &str,
    role: UserRole,
    events: Sender<UsersEvent>,
    ctx: Context,
) {
    let body = serde_json::to_vec(&RolePayload { role }).unwrap_or_default();
    let request = http::json_request("PUT", config.user_url(id), body);
    http::fetch(request, move |result| {
        let _ = events.send(UsersEvent::RoleChanged(submit_outcome(result)));
        ctx.request_repaint();
    });
}

/// `DELETE /{stage}/user/{id}`.
pub fn delete_user(config: &ApiConfig, id: &str, events: Sender<UsersEvent>, ctx: Context) {
    let request = http::json_request("DELETE", config.user_url(id), Vec::new());
    http::fetch(request, move |result| {
        let outcome = match result {
            Ok(response) if response.status == 200 => SaveOutcome::Saved,
            Ok(response) => {
                SaveOutcome::Failed(format!("delete returned status {}", response.status))
            }
            Err(err) => SaveOutcome::Failed(err.to_string()),
        };
        let _ = events.send(UsersEvent::DeleteFinished(outcome));
        ctx.request_repaint();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(status: u16, body: &str) -> ehttp::Response {
        ehttp::Response {
            url: "http://localhost/dev/user".to_owned(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            bytes: body.as_bytes().to_vec(),
            headers: ehttp::Headers::default(),
        }
    }

    #[test]
    fn test_submit_outcome_saved_on_200() {
        let outcome = submit_outcome(Ok(response_with(200, "{}")));
        assert_eq!(outcome, SaveOutcome::Saved);
    }

    #[test]
    fn test_submit_outcome_prefers_backend_message() {
        let body = r#"{"error":{"message":"Username already exists"}}"#;
        let outcome = submit_outcome(Ok(response_with(500, body)));
        assert_eq!(
            outcome,
            SaveOutcome::Failed("Username already exists".to_owned())
        );
    }

    #[test]
    fn test_submit_outcome_generic_fallback() {
        let outcome = submit_outcome(Ok(response_with(500, "")));
        assert_eq!(outcome, SaveOutcome::Failed(GENERIC_ERROR.to_owned()));

        let outcome = submit_outcome(Err(crate::http::HttpError::new("connection refused")));
        assert_eq!(outcome, SaveOutcome::Failed(GENERIC_ERROR.to_owned()));
    }

    #[test]
    fn test_role_payload_is_partial() {
        let json = serde_json::to_string(&RolePayload {
            role: UserRole::Teacher,
        })
        .expect("payload should serialize");
        assert_eq!(json, r#"{"role":"TEACHER"}"#);
    }

    #[test]
    fn test_user_payload_from_form_values() {
        let values = FormValues {
            username: "alice".to_owned(),
            full_name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "pw".to_owned(),
            role: UserRole::Admin,
        };
        let payload = UserPayload::from(&values);
        assert_eq!(payload.username, "alice");
        assert_eq!(payload.role, UserRole::Admin);

        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["full_name"], "Alice");
        assert_eq!(json["role"], "ADMIN");
    }
}
