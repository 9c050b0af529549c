//! # spidr-form
//!
//! The core of the SPIDR Air Fryer contest entry form.
//!
//! ## Philosophy
//!
//! The form follows **pure core, imperative shell**:
//! - **Pure core**: formatters and validators are plain functions of their
//!   input. Validation accumulates every field error instead of stopping at
//!   the first.
//! - **Imperative shell**: [`FormSession`] holds the current record and
//!   error map and hands accepted submissions to a [`SubmissionReporter`].
//!
//! ## Quick Example
//!
//! ```rust
//! use spidr_form::testing::RecordingReporter;
//! use spidr_form::{Field, FormSession, Validation};
//!
//! let mut session = FormSession::new();
//! session.edit(Field::FirstName, "John");
//! session.edit(Field::LastName, "Doe");
//! session.edit(Field::PhoneNumber, "1234567890");
//! session.edit(Field::Email, "john.doe@example.com");
//! session.edit(Field::AirFryerCost, "$199.99");
//! session.edit(Field::SpidrPin, "1234567890123456");
//!
//! let mut reporter = RecordingReporter::new();
//! match session.submit(&mut reporter) {
//!     Validation::Success(record) => {
//!         assert_eq!(record.phone_number, "(123) 456-7890");
//!         assert_eq!(record.spidr_pin, "1234-5678-9012-3456");
//!     }
//!     Validation::Failure(errors) => panic!("unexpected errors: {errors}"),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): structured logs and [`TracingReporter`]
//! - `serde` (default): serialization for records, fields and errors
//! - `web` (default): the decorative pointer web effect in [`web`]
//! - `proptest`: strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod field;
pub mod format;
pub mod predicate;
pub mod record;
pub mod report;
pub mod semigroup;
pub mod session;
pub mod testing;
pub mod validate;
pub mod validation;
#[cfg(feature = "web")]
pub mod web;

// Re-exports
pub use error::{ErrorMap, FieldError};
pub use field::{Field, ParseFieldError};
pub use format::{FormattedEdit, Formatter};
pub use record::FormRecord;
pub use report::SubmissionReporter;
#[cfg(feature = "tracing")]
pub use report::TracingReporter;
pub use semigroup::Semigroup;
pub use session::{FormSession, PinVisibility, SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
pub use validate::{check_record, validate_record};
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorMap, FieldError};
    pub use crate::field::Field;
    pub use crate::format::{FormattedEdit, Formatter};
    pub use crate::record::FormRecord;
    pub use crate::report::SubmissionReporter;
    pub use crate::semigroup::Semigroup;
    pub use crate::session::{FormSession, PinVisibility};
    pub use crate::validate::{check_record, validate_record};
    pub use crate::validation::Validation;
}
