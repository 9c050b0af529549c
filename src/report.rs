//! The reporting collaborator a successful submission is handed to.

use crate::FormRecord;

/// Receives accepted submissions and user-facing notifications.
///
/// The session calls [`report_submission`](Self::report_submission) exactly
/// once per accepted submit and never for a rejected one. Nothing is
/// returned; reporting cannot fail the submission.
pub trait SubmissionReporter {
    /// Hand over a record that passed validation.
    fn report_submission(&mut self, record: &FormRecord);

    /// Show a pass/fail message to the user.
    fn notify(&mut self, message: &str);
}

/// Reporter that writes submissions and notifications to `tracing`.
///
/// ```rust,no_run
/// use spidr_form::{FormSession, TracingReporter};
///
/// tracing_subscriber::fmt::init();
/// let mut session = FormSession::new();
/// session.submit(&mut TracingReporter);
/// ```
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

#[cfg(feature = "tracing")]
impl SubmissionReporter for TracingReporter {
    fn report_submission(&mut self, record: &FormRecord) {
        tracing::info!(
            first_name = %record.first_name,
            last_name = %record.last_name,
            phone_number = %record.phone_number,
            email = %record.email,
            air_fryer_cost = %record.air_fryer_cost,
            spidr_pin = %record.spidr_pin,
            "Form Data"
        );
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}
