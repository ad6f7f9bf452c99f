use api::{ContactInquiry, InquirySender, SendError};
use futures::future::LocalBoxFuture;

use crate::core::timing::sleep_ms;
use crate::core::Language;

use super::form::{ContactForm, SubmitRefused};

/// A send that has been started for one attempt.
pub struct PendingSend {
    pub attempt: u64,
    pub outcome: LocalBoxFuture<'static, Result<(), SendError>>,
}

/// Starts an attempt and hands its payload to `sender`. A refused submit
/// returns before the sender is touched.
pub fn dispatch(
    form: &mut ContactForm,
    language: Language,
    sender: &dyn InquirySender,
) -> Result<PendingSend, SubmitRefused> {
    let submission = form.begin_submit(language)?;
    Ok(PendingSend {
        attempt: submission.attempt,
        outcome: sender.send(submission.inquiry),
    })
}

/// Stand-in for a real relay: waits `delay_ms`, then reports success.
/// Nothing leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSender {
    pub delay_ms: u64,
}

impl SimulatedSender {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(crate::config::SiteConfig::default().send_delay_ms)
    }
}

impl InquirySender for SimulatedSender {
    fn send(&self, inquiry: ContactInquiry) -> LocalBoxFuture<'static, Result<(), SendError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            tracing::info!(
                service = %inquiry.service,
                language = %inquiry.language,
                delay_ms,
                "simulating inquiry delivery"
            );
            sleep_ms(delay_ms).await;
            Ok(())
        })
    }
}
