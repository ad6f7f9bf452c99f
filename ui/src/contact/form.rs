//! Contact-form state machine.
//!
//! ```text
//!            edit                      send ok
//!   Idle ─────────► Idle    Submitting ───────► Success ─► Idle (fields cleared)
//!    │ submit (required fields set)   │
//!    └──────────────────► Submitting  └─ send err ─► Error ─(edit/dismiss)─► Idle
//! ```
//!
//! The form never sends anything itself. [`ContactForm::begin_submit`] hands
//! out the payload, the caller delivers it, and [`ContactForm::resolve`]
//! records the single outcome of that attempt.

use std::fmt;
use std::str::FromStr;

use api::{ContactInquiry, SendError};

use crate::core::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Company)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| format!("unknown contact field `{name}`"))
    }
}

/// The six user-editable values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Required fields that are empty or whitespace only, in form order.
    /// Matches the server-side check in `api::first_blank_required`.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_inquiry(&self, language: Language) -> ContactInquiry {
        ContactInquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
            language: language.code().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Transient message shown after an attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

/// Why a submit was not started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefused {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("required fields are empty: {0:?}")]
    MissingRequired(Vec<ContactField>),
}

/// An accepted submit: the payload to deliver and the attempt it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub inquiry: ContactInquiry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    notice: Option<Notice>,
    attempt: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// The submit control is inert while a send is pending.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// Updates one field. Any edit retires a pending notice, and an edit
    /// after a failed send returns the form to `Idle`.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value.into());
        if self.status != SubmissionStatus::Submitting {
            self.notice = None;
        }
        if self.status == SubmissionStatus::Error {
            self.transition(SubmissionStatus::Idle);
        }
    }

    /// Rewrites a field without counting as a user edit: status and notice
    /// are left alone. Used to re-label the selected service after a
    /// language switch.
    pub fn relabel(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Starts an attempt if nothing is in flight and every required field is
    /// filled. On refusal the form is left untouched.
    pub fn begin_submit(&mut self, language: Language) -> Result<Submission, SubmitRefused> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRefused::InFlight);
        }
        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            return Err(SubmitRefused::MissingRequired(missing));
        }

        self.attempt += 1;
        self.notice = None;
        self.transition(SubmissionStatus::Submitting);
        Ok(Submission {
            attempt: self.attempt,
            inquiry: self.fields.to_inquiry(language),
        })
    }

    /// Records the outcome of the in-flight attempt. Success clears every
    /// field; failure keeps them for a retry.
    pub fn resolve(&mut self, outcome: Result<(), SendError>) {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!(status = ?self.status, "send outcome with no submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                self.transition(SubmissionStatus::Success);
                self.fields.clear();
                self.notice = Some(Notice::Sent);
                self.transition(SubmissionStatus::Idle);
            }
            Err(err) => {
                tracing::warn!(attempt = self.attempt, "contact inquiry failed: {err}");
                self.notice = Some(Notice::Failed);
                self.transition(SubmissionStatus::Error);
            }
        }
    }

    /// Hides the notice; an `Error` form collapses to `Idle`.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        if matches!(self.status, SubmissionStatus::Error | SubmissionStatus::Success) {
            self.transition(SubmissionStatus::Idle);
        }
    }

    /// Timer-driven dismissal; ignored if a newer attempt has started since.
    pub fn expire_notice(&mut self, attempt: u64) {
        if attempt == self.attempt && self.status != SubmissionStatus::Submitting {
            self.dismiss_notice();
        }
    }

    fn transition(&mut self, next: SubmissionStatus) {
        tracing::debug!(attempt = self.attempt, from = ?self.status, to = ?next, "contact form");
        self.status = next;
    }
}
