//! End-to-end form scenarios
//!
//! Each test drives a `FormSession` the way the UI would: keystrokes in,
//! then a submit against a recording reporter.

use spidr_form::prelude::*;
use spidr_form::testing::{fill_valid, valid_record, RecordingReporter};
use spidr_form::{assert_failed_fields, assert_success, SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE};

fn submit(session: &mut FormSession) -> (Validation<FormRecord, ErrorMap>, RecordingReporter) {
    let mut reporter = RecordingReporter::new();
    let outcome = session.submit(&mut reporter);
    (outcome, reporter)
}

#[test]
fn empty_submit_reports_every_field() {
    let mut session = FormSession::new();
    let (outcome, reporter) = submit(&mut session);

    assert_failed_fields!(
        outcome,
        [
            Field::FirstName,
            Field::LastName,
            Field::PhoneNumber,
            Field::Email,
            Field::AirFryerCost,
            Field::SpidrPin,
        ]
    );

    let messages: Vec<_> = session
        .errors()
        .iter()
        .map(|(field, error)| (field.name(), error.message()))
        .collect();
    assert_eq!(
        messages,
        vec![
            ("firstName", "First name is required"),
            ("lastName", "Last name is required"),
            ("phoneNumber", "Phone number is required"),
            ("email", "Email is required"),
            ("airFryerCost", "Air fryer cost guess is required"),
            ("spidrPin", "Spidr PIN is required"),
        ]
    );
    assert!(reporter.submissions().is_empty());
    assert_eq!(reporter.notifications(), [SUBMIT_FAILURE_MESSAGE]);
}

#[test]
fn invalid_email_is_the_only_error() {
    let mut session = FormSession::new();
    fill_valid(&mut session);
    session.edit(Field::Email, "invalid-email");

    let (outcome, reporter) = submit(&mut session);
    assert_failed_fields!(outcome, [Field::Email]);
    assert_eq!(
        session.errors().message(Field::Email),
        Some("Please enter a valid email address")
    );
    assert!(reporter.submissions().is_empty());
}

#[test]
fn phone_input_is_formatted_and_valid() {
    let mut session = FormSession::new();
    session.type_text(Field::PhoneNumber, "1234567890");

    assert_eq!(session.record().phone_number, "(123) 456-7890");
    submit(&mut session);
    assert!(!session.has_error(Field::PhoneNumber));
}

#[test]
fn pin_input_is_formatted_and_valid() {
    let mut session = FormSession::new();
    session.edit(Field::SpidrPin, "1234567890123456");

    assert_eq!(session.record().spidr_pin, "1234-5678-9012-3456");
    submit(&mut session);
    assert!(!session.has_error(Field::SpidrPin));
}

#[test]
fn overlong_pin_typing_stops_at_sixteen_digits() {
    let mut session = FormSession::new();
    session.type_text(Field::SpidrPin, "123456789012345678");

    assert_eq!(session.record().spidr_pin, "1234-5678-9012-3456");
    assert_eq!(session.record().spidr_pin.len(), 19);
    submit(&mut session);
    assert!(!session.has_error(Field::SpidrPin));
}

#[test]
fn cost_input_keeps_digits_and_points() {
    let mut session = FormSession::new();
    session.edit(Field::AirFryerCost, "abc123.45def");
    assert_eq!(session.record().air_fryer_cost, "123.45");
}

#[test]
fn full_valid_submission_reports_once() {
    let mut session = FormSession::new();
    fill_valid(&mut session);

    let (outcome, reporter) = submit(&mut session);
    assert_success!(outcome.clone());
    assert_eq!(outcome, Validation::Success(valid_record()));
    assert!(session.errors().is_empty());
    assert_eq!(reporter.submissions(), [valid_record()]);
    assert_eq!(reporter.notifications(), [SUBMIT_SUCCESS_MESSAGE]);
}

#[test]
fn fixing_errors_then_resubmitting_succeeds() {
    let mut session = FormSession::new();
    let (first, _) = submit(&mut session);
    assert!(first.is_failure());

    fill_valid(&mut session);
    assert!(session.errors().is_empty());

    let (second, reporter) = submit(&mut session);
    assert!(second.is_success());
    assert_eq!(reporter.submissions().len(), 1);
}

#[test]
fn pasting_an_overlong_pin_is_dropped_not_truncated() {
    let mut session = FormSession::new();
    let outcome = session.edit(Field::SpidrPin, "12345678901234567890");

    assert!(!outcome.is_accepted());
    assert_eq!(session.record().spidr_pin, "");

    session.edit(Field::SpidrPin, "1234");
    session.edit(Field::SpidrPin, "12345678901234567890");
    assert_eq!(session.record().spidr_pin, "1234");
}
