//! Delivery of contact submissions to the hosted form relay.

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;

use super::form::{ContactForm, FieldError};

/// Shown when the relay rejects a submission without saying why.
pub const GENERIC_REJECTION: &str = "Request failed";

/// Status and raw body of a relay response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

impl RelayReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FieldError),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Posts an url-encoded body and hands back whatever came back.
pub trait FormRelay {
    fn post(
        &self,
        endpoint: &str,
        body: String,
    ) -> impl Future<Output = Result<RelayReply, TransportError>>;
}

#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Option<Vec<RejectedField>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RejectedField {
    #[serde(default)]
    message: Option<String>,
}

/// Human-readable reason from a non-2xx body: `errors[].message` joined with
/// `" · "`, else `error`, else [`GENERIC_REJECTION`].
pub fn rejection_message(body: &str) -> String {
    let parsed: RejectionBody = serde_json::from_str(body).unwrap_or_default();
    if let Some(errors) = parsed.errors {
        let joined = errors
            .into_iter()
            .filter_map(|field| field.message)
            .collect::<Vec<_>>()
            .join(" · ");
        if !joined.is_empty() {
            return joined;
        }
    }
    parsed
        .error
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| GENERIC_REJECTION.to_string())
}

/// Validate, post and interpret one submission. No retries.
pub async fn submit<R: FormRelay>(
    relay: &R,
    endpoint: &str,
    form: &ContactForm,
) -> Result<(), SubmitError> {
    form.validate()?;
    let reply = relay.post(endpoint, form.encode()).await.map_err(|err| {
        tracing::warn!("[contact] relay unreachable: {err}");
        err
    })?;
    if reply.is_success() {
        tracing::debug!("[contact] relay accepted submission ({})", reply.status);
        return Ok(());
    }
    let message = rejection_message(&reply.body);
    tracing::warn!("[contact] relay rejected submission ({}): {message}", reply.status);
    Err(SubmitError::Rejected(message))
}

/// The real relay over HTTP: `gloo-net` in the browser, `reqwest` natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRelay;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[cfg(target_arch = "wasm32")]
impl FormRelay for HttpRelay {
    async fn post(&self, endpoint: &str, body: String) -> Result<RelayReply, TransportError> {
        use gloo_net::http::Request;

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        let status = response.status();
        // An unreadable body still tells us the status.
        let body = response.text().await.unwrap_or_default();
        Ok(RelayReply { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FormRelay for HttpRelay {
    async fn post(&self, endpoint: &str, body: String) -> Result<RelayReply, TransportError> {
        use reqwest::header::{ACCEPT, CONTENT_TYPE};

        let response = reqwest::Client::new()
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(RelayReply { status, body })
    }
}
