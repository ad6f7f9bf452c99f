//! Send collaborator for the contact form.
//!
//! The UI never talks to a mail relay or CRM directly. It hands a
//! [`ContactInquiry`] to something implementing [`InquirySender`] and gets
//! back exactly one outcome per attempt. Two senders exist:
//! - `ui::contact::SimulatedSender` (fixed delay, always succeeds), the default;
//! - [`ServerRelay`], which calls the [`submit_inquiry`] server function.

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

/// Payload of one contact-form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,
    pub service: String,
    pub message: String,
    /// Language code the visitor was browsing in (`en` or `ar`).
    pub language: String,
}

/// Single failure kind surfaced to the form. The form does not distinguish
/// between the variants; they exist for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("inquiry rejected: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<ServerFnError> for SendError {
    fn from(err: ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError(msg) => SendError::Rejected(msg),
            other => SendError::Transport(other.to_string()),
        }
    }
}

/// Capability: accept a payload, resolve to success or failure later.
///
/// Futures are `!Send` on wasm (browser timers, fetch), hence `LocalBoxFuture`.
pub trait InquirySender {
    fn send(&self, inquiry: ContactInquiry) -> LocalBoxFuture<'static, Result<(), SendError>>;
}

/// Sender backed by the [`submit_inquiry`] server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerRelay;

impl InquirySender for ServerRelay {
    fn send(&self, inquiry: ContactInquiry) -> LocalBoxFuture<'static, Result<(), SendError>> {
        Box::pin(async move { submit_inquiry(inquiry).await.map_err(SendError::from) })
    }
}

/// Accepts an inquiry on the server. Delivery to a mailbox or CRM is not
/// wired up; the inquiry is logged and acknowledged.
#[server]
pub async fn submit_inquiry(inquiry: ContactInquiry) -> Result<(), ServerFnError> {
    if let Some(field) = first_blank_required(&inquiry) {
        tracing::warn!(field, "rejecting inquiry with blank required field");
        return Err(ServerFnError::new(format!("{field} is required")));
    }

    tracing::info!(
        service = %inquiry.service,
        language = %inquiry.language,
        has_company = !inquiry.company.is_empty(),
        "contact inquiry accepted"
    );
    Ok(())
}

/// Mirrors the client-side required-field guard so direct calls to the
/// endpoint get the same treatment.
pub fn first_blank_required(inquiry: &ContactInquiry) -> Option<&'static str> {
    [
        ("name", &inquiry.name),
        ("email", &inquiry.email),
        ("phone", &inquiry.phone),
        ("service", &inquiry.service),
        ("message", &inquiry.message),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
}
