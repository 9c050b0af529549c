//! One form session: edits in, validated submissions out.
//!
//! This is the imperative shell around the pure formatter and validator. It
//! holds the current record and error map, swaps in a new record on every
//! accepted edit, and talks to the [`SubmissionReporter`] on submit.
//!
//! ```
//! use spidr_form::testing::RecordingReporter;
//! use spidr_form::{Field, FormSession};
//!
//! let mut session = FormSession::new();
//! session.edit(Field::PhoneNumber, "1234567890");
//! assert_eq!(session.record().phone_number, "(123) 456-7890");
//!
//! let mut reporter = RecordingReporter::new();
//! let outcome = session.submit(&mut reporter);
//! assert!(outcome.is_failure());
//! assert!(!session.has_error(Field::PhoneNumber));
//! assert!(session.has_error(Field::FirstName));
//! ```

use crate::format::{FormattedEdit, Formatter};
use crate::{validate_record, ErrorMap, Field, FieldError, FormRecord, SubmissionReporter, Validation};

/// Notification sent after an accepted submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Form submitted successfully! Check the console for your data.";

/// Notification sent after a rejected submission.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Please fix the errors in the form before submitting.";

/// Whether the PIN input shows its digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinVisibility {
    /// Rendered as a password input.
    #[default]
    Hidden,
    /// Rendered as plain text.
    Shown,
}

impl PinVisibility {
    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PinVisibility::Hidden => PinVisibility::Shown,
            PinVisibility::Shown => PinVisibility::Hidden,
        }
    }

    /// HTML input type for the PIN field.
    pub fn input_kind(self) -> &'static str {
        match self {
            PinVisibility::Hidden => "password",
            PinVisibility::Shown => "text",
        }
    }

    /// Accessible label of the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            PinVisibility::Hidden => "Show PIN",
            PinVisibility::Shown => "Hide PIN",
        }
    }

    /// Placeholder for the empty PIN input.
    pub fn placeholder(self) -> &'static str {
        match self {
            PinVisibility::Hidden => "••••-••••-••••-••••",
            PinVisibility::Shown => "####-####-####-####",
        }
    }
}

/// State of one contest entry form.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    record: FormRecord,
    errors: ErrorMap,
    pin_visibility: PinVisibility,
}

impl FormSession {
    /// A session with an empty record and no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current stored values.
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Errors from the last submit, minus fields edited since.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The displayed error for `field`.
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Whether `field` should render in its error style.
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(field)
    }

    /// Current PIN visibility.
    pub fn pin_visibility(&self) -> PinVisibility {
        self.pin_visibility
    }

    /// Flip PIN visibility and return the new state.
    pub fn toggle_pin(&mut self) -> PinVisibility {
        self.pin_visibility = self.pin_visibility.toggled();
        self.pin_visibility
    }

    /// Apply the full new input value `raw` to `field`.
    ///
    /// The field's error is cleared first, whether or not the edit is
    /// accepted. A rejected edit leaves the stored value unchanged, so
    /// pasting an over-long PIN in one edit is dropped rather than truncated.
    /// Use [`type_text`](Self::type_text) to keep the digits that fit.
    pub fn edit(&mut self, field: Field, raw: &str) -> FormattedEdit {
        self.errors.clear_field(field);

        let outcome = Formatter::for_field(field).apply(raw);
        match &outcome {
            FormattedEdit::Accepted(value) => {
                self.record = self.record.with_field(field, value.as_str());
            }
            FormattedEdit::Rejected { attempted } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    field = %field,
                    attempted_len = attempted.len(),
                    "edit rejected, value over length cap"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = attempted;
            }
        }
        outcome
    }

    /// Type `text` into `field` one character at a time.
    ///
    /// Each keystroke appends to whatever is stored, then goes through
    /// [`edit`](Self::edit). Returns how many keystrokes were accepted.
    ///
    /// ```
    /// use spidr_form::{Field, FormSession};
    ///
    /// let mut session = FormSession::new();
    /// session.type_text(Field::SpidrPin, "12345678901234567890");
    /// assert_eq!(session.record().spidr_pin, "1234-5678-9012-3456");
    /// ```
    pub fn type_text(&mut self, field: Field, text: &str) -> usize {
        let mut accepted = 0;
        for c in text.chars() {
            let mut next = self.record.get(field).to_string();
            next.push(c);
            if self.edit(field, &next).is_accepted() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Validate the record and report the outcome.
    ///
    /// On success the record goes to `reporter` once and the error map is
    /// emptied. On failure the full error map replaces the displayed one.
    pub fn submit<R>(&mut self, reporter: &mut R) -> Validation<FormRecord, ErrorMap>
    where
        R: SubmissionReporter + ?Sized,
    {
        self.errors = validate_record(&self.record);

        if self.errors.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::info!("submission accepted");
            reporter.report_submission(&self.record);
            reporter.notify(SUBMIT_SUCCESS_MESSAGE);
            Validation::success(self.record.clone())
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                failing = self.errors.len(),
                errors = %self.errors,
                "submission rejected"
            );
            reporter.notify(SUBMIT_FAILURE_MESSAGE);
            Validation::failure(self.errors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fill_valid, RecordingReporter};
    use crate::{assert_failure, assert_success};

    #[test]
    fn test_edit_formats_per_field() {
        let mut session = FormSession::new();
        session.edit(Field::PhoneNumber, "1234567890");
        session.edit(Field::SpidrPin, "1234567890123456");
        session.edit(Field::AirFryerCost, "abc123.45def");
        session.edit(Field::FirstName, " John ");

        let record = session.record();
        assert_eq!(record.phone_number, "(123) 456-7890");
        assert_eq!(record.spidr_pin, "1234-5678-9012-3456");
        assert_eq!(record.air_fryer_cost, "123.45");
        assert_eq!(record.first_name, " John ");
    }

    #[test]
    fn test_rejected_edit_keeps_prior_value() {
        let mut session = FormSession::new();
        session.edit(Field::SpidrPin, "1234");
        let outcome = session.edit(Field::SpidrPin, "12345678901234567");
        assert!(!outcome.is_accepted());
        assert_eq!(session.record().spidr_pin, "1234");
    }

    #[test]
    fn test_typing_saturates_phone() {
        let mut session = FormSession::new();
        session.type_text(Field::PhoneNumber, "12345678901234567890");
        assert_eq!(session.record().phone_number, "(123) 456-7890");
    }

    #[test]
    fn test_typing_saturates_pin() {
        let mut session = FormSession::new();
        let accepted = session.type_text(Field::SpidrPin, "12345678901234567890123456789");
        assert_eq!(accepted, 16);
        assert_eq!(session.record().spidr_pin, "1234-5678-9012-3456");
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut session = FormSession::new();
        let mut reporter = RecordingReporter::new();
        assert_failure!(session.submit(&mut reporter));
        assert_eq!(session.errors().len(), 6);

        session.type_text(Field::Email, "t");
        assert!(!session.has_error(Field::Email));
        assert_eq!(session.errors().len(), 5);
        assert_eq!(
            session.error_for(Field::FirstName),
            Some(&FieldError::Required(Field::FirstName))
        );
    }

    #[test]
    fn test_rejected_edit_still_clears_error() {
        let mut session = FormSession::new();
        session.type_text(Field::SpidrPin, "123456789012");
        let mut reporter = RecordingReporter::new();
        session.submit(&mut reporter);
        assert_eq!(session.error_for(Field::SpidrPin), Some(&FieldError::PinLength));

        let outcome = session.edit(Field::SpidrPin, "12345678901234567");
        assert!(!outcome.is_accepted());
        assert!(!session.has_error(Field::SpidrPin));
        assert_eq!(session.record().spidr_pin, "1234-5678-9012");
    }

    #[test]
    fn test_failed_submit_notifies_without_reporting() {
        let mut session = FormSession::new();
        let mut reporter = RecordingReporter::new();
        session.submit(&mut reporter);

        assert!(reporter.submissions().is_empty());
        assert_eq!(reporter.notifications(), [SUBMIT_FAILURE_MESSAGE]);
    }

    #[test]
    fn test_successful_submit_reports_once() {
        let mut session = FormSession::new();
        fill_valid(&mut session);
        let mut reporter = RecordingReporter::new();

        let outcome = session.submit(&mut reporter);
        assert_success!(outcome.clone());
        assert_eq!(outcome, Validation::Success(session.record().clone()));
        assert_eq!(reporter.submissions(), [session.record().clone()]);
        assert_eq!(reporter.notifications(), [SUBMIT_SUCCESS_MESSAGE]);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_resubmit_recomputes_errors_wholesale() {
        let mut session = FormSession::new();
        let mut reporter = RecordingReporter::new();
        session.submit(&mut reporter);

        fill_valid(&mut session);
        session.edit(Field::Email, "nope");
        let outcome = session.submit(&mut reporter);

        assert_eq!(
            outcome,
            Validation::Failure(ErrorMap::single(Field::Email, FieldError::InvalidEmail))
        );
    }

    #[test]
    fn test_pin_toggle() {
        let mut session = FormSession::new();
        assert_eq!(session.pin_visibility().input_kind(), "password");
        assert_eq!(session.pin_visibility().toggle_label(), "Show PIN");

        assert_eq!(session.toggle_pin(), PinVisibility::Shown);
        assert_eq!(session.pin_visibility().input_kind(), "text");
        assert_eq!(session.pin_visibility().toggle_label(), "Hide PIN");
        assert_eq!(session.pin_visibility().placeholder(), "####-####-####-####");

        assert_eq!(session.toggle_pin(), PinVisibility::Hidden);
    }
}
