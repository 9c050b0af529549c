//! Testing utilities for code built on the form core
//!
//! Recording doubles for the reporter (and the web effect spawner), record
//! fixtures, assertion macros, and `proptest` strategies behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use spidr_form::testing::{fill_valid, RecordingReporter};
//! use spidr_form::{assert_success, FormSession};
//!
//! let mut session = FormSession::new();
//! fill_valid(&mut session);
//!
//! let mut reporter = RecordingReporter::new();
//! assert_success!(session.submit(&mut reporter));
//! assert_eq!(reporter.submissions().len(), 1);
//! ```

use crate::{Field, FormRecord, FormSession, SubmissionReporter};

/// Reporter double that keeps everything it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    submissions: Vec<FormRecord>,
    notifications: Vec<String>,
}

impl RecordingReporter {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records handed over, oldest first.
    pub fn submissions(&self) -> &[FormRecord] {
        &self.submissions
    }

    /// Notifications sent, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl SubmissionReporter for RecordingReporter {
    fn report_submission(&mut self, record: &FormRecord) {
        self.submissions.push(record.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// Raw keystrokes for a complete, valid entry.
pub const VALID_INPUT: [(Field, &str); 6] = [
    (Field::FirstName, "John"),
    (Field::LastName, "Doe"),
    (Field::PhoneNumber, "1234567890"),
    (Field::Email, "john.doe@example.com"),
    (Field::AirFryerCost, "199.99"),
    (Field::SpidrPin, "1234567890123456"),
];

/// The stored record that [`VALID_INPUT`] produces.
pub fn valid_record() -> FormRecord {
    FormRecord {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "(123) 456-7890".to_string(),
        email: "john.doe@example.com".to_string(),
        air_fryer_cost: "199.99".to_string(),
        spidr_pin: "1234-5678-9012-3456".to_string(),
    }
}

/// Type [`VALID_INPUT`] into every field of `session`.
pub fn fill_valid(session: &mut FormSession) {
    for (field, text) in VALID_INPUT {
        session.type_text(field, text);
    }
}

/// Assert that a validation succeeds.
///
/// ```rust
/// use spidr_form::{assert_success, check_record, testing::valid_record};
///
/// assert_success!(check_record(&valid_record()));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails on exactly the listed fields, in form order.
///
/// ```rust
/// use spidr_form::{assert_failed_fields, check_record, Field, FormRecord};
///
/// let record = FormRecord::new();
/// assert_failed_fields!(
///     check_record(&record),
///     [
///         Field::FirstName,
///         Field::LastName,
///         Field::PhoneNumber,
///         Field::Email,
///         Field::AirFryerCost,
///         Field::SpidrPin,
///     ]
/// );
/// ```
#[macro_export]
macro_rules! assert_failed_fields {
    ($validation:expr, [$($field:expr),* $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let failed: ::std::vec::Vec<$crate::Field> = errors.fields().collect();
                let expected: ::std::vec::Vec<$crate::Field> = ::std::vec![$($field),*];
                assert_eq!(failed, expected);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected Failure on fields, got Success: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "web")]
pub use spawner::{RecordingSpawner, SpawnerEvent};

#[cfg(feature = "web")]
mod spawner {
    use crate::web::{EffectSpawner, WebId, WebPattern};

    /// A call received by [`RecordingSpawner`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum SpawnerEvent {
        /// `spawn` with the generated pattern.
        Spawn(WebId, WebPattern),
        /// `reveal`.
        Reveal(WebId),
        /// `fade`.
        Fade(WebId),
        /// `remove`.
        Remove(WebId),
    }

    /// Spawner double that records every call in order.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSpawner {
        events: Vec<SpawnerEvent>,
    }

    impl RecordingSpawner {
        /// An empty recorder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Calls received, oldest first.
        pub fn events(&self) -> &[SpawnerEvent] {
            &self.events
        }

        /// Number of `spawn` calls received.
        pub fn spawn_count(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, SpawnerEvent::Spawn(..)))
                .count()
        }
    }

    impl EffectSpawner for RecordingSpawner {
        fn spawn(&mut self, id: WebId, pattern: &WebPattern) {
            self.events.push(SpawnerEvent::Spawn(id, pattern.clone()));
        }

        fn reveal(&mut self, id: WebId) {
            self.events.push(SpawnerEvent::Reveal(id));
        }

        fn fade(&mut self, id: WebId) {
            self.events.push(SpawnerEvent::Fade(id));
        }

        fn remove(&mut self, id: WebId) {
            self.events.push(SpawnerEvent::Remove(id));
        }
    }
}

#[cfg(feature = "proptest")]
pub use strategies::{any_field, any_record, digit_string};

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::{Field, FormRecord};

    /// Any form field.
    pub fn any_field() -> impl Strategy<Value = Field> {
        proptest::sample::select(Field::ALL.to_vec())
    }

    /// A string of ASCII digits with length in `len`.
    pub fn digit_string(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::range('0', '9'), len)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Arbitrary (mostly invalid) records built from free text.
    pub fn any_record() -> impl Strategy<Value = FormRecord> {
        (
            ".{0,12}",
            ".{0,12}",
            ".{0,16}",
            ".{0,24}",
            ".{0,8}",
            ".{0,22}",
        )
            .prop_map(
                |(first_name, last_name, phone_number, email, air_fryer_cost, spidr_pin)| {
                    FormRecord {
                        first_name,
                        last_name,
                        phone_number,
                        email,
                        air_fryer_cost,
                        spidr_pin,
                    }
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{check_record, validate_record, Validation};

    #[test]
    fn valid_input_produces_valid_record() {
        let mut session = FormSession::new();
        fill_valid(&mut session);
        assert_eq!(session.record(), &valid_record());
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn recording_reporter_keeps_order() {
        let mut reporter = RecordingReporter::new();
        reporter.notify("one");
        reporter.notify("two");
        assert_eq!(reporter.notifications(), ["one", "two"]);
    }

    #[test]
    fn assert_failed_fields_macro() {
        let record = valid_record().with_field(Field::Email, "");
        assert_failed_fields!(check_record(&record), [Field::Email]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Validation::<_, Vec<String>>::success(42);
        assert_failure!(val);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn digit_strings_are_digits(s in digit_string(0..20)) {
                prop_assert!(s.chars().all(|c| c.is_ascii_digit()));
                prop_assert!(s.len() < 20);
            }

            #[test]
            fn any_field_is_a_field(field in any_field()) {
                prop_assert!(Field::ALL.contains(&field));
            }
        }
    }
}
