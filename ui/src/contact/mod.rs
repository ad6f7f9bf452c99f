//! Contact form: state machine and the default (simulated) sender.

mod form;
mod sender;

pub use form::{
    ContactField, ContactFields, ContactForm, Notice, SubmissionStatus, Submission, SubmitRefused,
};
pub use sender::{dispatch, PendingSend, SimulatedSender};
