//! HTTP plumbing on top of `ehttp`.
//!
//! `ehttp` is callback-based and works on both native and WASM targets,
//! which lets the UI loop stay free of an async runtime. This module adds
//! the two pieces the console needs on top of it: JSON default headers on
//! every request, and a client-side request timeout. On native the timeout
//! is a watchdog thread bridged over a `flume` channel; on WASM the browser
//! fetch machinery governs the request lifetime.

use std::time::Duration;

/// How long a request may stay unanswered before it is reported as failed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport-level error: network failure or timeout.
///
/// Non-2xx responses are *not* errors at this layer; callers interpret
/// status codes themselves.
#[derive(Debug, Clone, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult = Result<ehttp::Response, HttpError>;

/// Builds a request carrying the JSON default headers.
pub fn json_request(method: &str, url: impl ToString, body: Vec<u8>) -> ehttp::Request {
    let mut request = ehttp::Request::post(url, body);
    request.method = method.to_owned();
    request.headers = ehttp::Headers::new(&[
        ("Accept", "application/json"),
        ("Content-Type", "application/json"),
    ]);
    request
}

/// Sends a request and delivers exactly one outcome to `on_done`.
///
/// A request that receives no response within [`REQUEST_TIMEOUT`] is
/// reported as an error; a response arriving after that is dropped.
pub fn fetch(request: ehttp::Request, on_done: impl FnOnce(HttpResult) + Send + 'static) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let (tx, rx) = flume::bounded::<ehttp::Result<ehttp::Response>>(1);
        let url = request.url.clone();
        ehttp::fetch(request, move |result| {
            let _ = tx.send(result);
        });
        std::thread::spawn(move || {
            let outcome = match rx.recv_timeout(REQUEST_TIMEOUT) {
                Ok(Ok(response)) => Ok(response),
                Ok(Err(err)) => Err(HttpError::new(err)),
                Err(_) => {
                    log::warn!("request to {url} timed out");
                    Err(HttpError::new("request timed out"))
                }
            };
            on_done(outcome);
        });
    }

    #[cfg(target_arch = "wasm32")]
    ehttp::fetch(request, move |result| {
        on_done(result.map_err(HttpError::new));
    });
}
