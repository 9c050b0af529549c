//! Submit-time validation of a whole form record.
//!
//! Each field has its own rule function returning a
//! `Validation<&str, FieldError>`. [`check_record`] runs all six without
//! short-circuiting and accumulates the failures into an [`ErrorMap`].
//!
//! ```
//! use spidr_form::{validate_record, Field, FormRecord};
//!
//! let errors = validate_record(&FormRecord::new());
//! assert_eq!(errors.len(), 6);
//! assert_eq!(errors.message(Field::Email), Some("Email is required"));
//! ```

use crate::predicate::{digits_at_least, digits_exactly, email_shape, not_blank, validate};
use crate::{ErrorMap, Field, FieldError, FormRecord, Validation};

/// Minimum digits in a phone number.
pub const PHONE_MIN_DIGITS: usize = 10;

/// Exact digits in a PIN.
pub const PIN_DIGITS: usize = 16;

fn required(field: Field, value: &str) -> Validation<&str, FieldError> {
    validate(value, not_blank(), FieldError::Required(field))
}

/// First name must not be blank.
pub fn first_name(value: &str) -> Validation<&str, FieldError> {
    required(Field::FirstName, value)
}

/// Last name must not be blank.
pub fn last_name(value: &str) -> Validation<&str, FieldError> {
    required(Field::LastName, value)
}

/// Phone number must not be blank and must carry at least ten digits.
pub fn phone_number(value: &str) -> Validation<&str, FieldError> {
    required(Field::PhoneNumber, value).and_then(|phone| {
        validate(
            phone,
            digits_at_least(PHONE_MIN_DIGITS),
            FieldError::InvalidPhoneNumber,
        )
    })
}

/// Email must not be blank and must look like `local@domain.tld`.
pub fn email(value: &str) -> Validation<&str, FieldError> {
    required(Field::Email, value)
        .and_then(|email| validate(email, email_shape(), FieldError::InvalidEmail))
}

/// The cost guess must not be blank. Its numeric shape is not checked.
pub fn air_fryer_cost(value: &str) -> Validation<&str, FieldError> {
    required(Field::AirFryerCost, value)
}

/// PIN must not be blank and must carry exactly sixteen digits.
pub fn spidr_pin(value: &str) -> Validation<&str, FieldError> {
    required(Field::SpidrPin, value)
        .and_then(|pin| validate(pin, digits_exactly(PIN_DIGITS), FieldError::PinLength))
}

/// Run one field's rule against its stored value.
pub fn check_field(field: Field, value: &str) -> Validation<&str, FieldError> {
    match field {
        Field::FirstName => first_name(value),
        Field::LastName => last_name(value),
        Field::PhoneNumber => phone_number(value),
        Field::Email => email(value),
        Field::AirFryerCost => air_fryer_cost(value),
        Field::SpidrPin => spidr_pin(value),
    }
}

/// Validate every field, accumulating all failures.
pub fn check_record(record: &FormRecord) -> Validation<&FormRecord, ErrorMap> {
    let checks = Field::ALL.into_iter().map(|field| {
        check_field(field, record.get(field))
            .map(|_| ())
            .map_err(|error| ErrorMap::single(field, error))
    });

    Validation::all(checks).map(|_| record)
}

/// The complete error set for `record`; empty means valid.
pub fn validate_record(record: &FormRecord) -> ErrorMap {
    match check_record(record) {
        Validation::Success(_) => ErrorMap::new(),
        Validation::Failure(errors) => errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::valid_record;
    use crate::{assert_failure, assert_success};

    #[test]
    fn test_blank_is_required_not_invalid() {
        assert_eq!(
            phone_number("   "),
            Validation::Failure(FieldError::Required(Field::PhoneNumber))
        );
        assert_eq!(email(""), Validation::Failure(FieldError::Required(Field::Email)));
        assert_eq!(spidr_pin(" "), Validation::Failure(FieldError::Required(Field::SpidrPin)));
    }

    #[test]
    fn test_phone_digit_minimum() {
        assert_eq!(
            phone_number("(123) 456"),
            Validation::Failure(FieldError::InvalidPhoneNumber)
        );
        assert_success!(phone_number("(123) 456-7890"));
    }

    #[test]
    fn test_pin_exact_length() {
        assert_eq!(spidr_pin("1234-5678-9012"), Validation::Failure(FieldError::PinLength));
        assert_success!(spidr_pin("1234-5678-9012-3456"));
    }

    #[test]
    fn test_cost_has_no_numeric_check() {
        assert_success!(air_fryer_cost("1.2.3"));
        assert_success!(air_fryer_cost("."));
        assert_failure!(air_fryer_cost(""));
    }

    #[test]
    fn test_empty_record_fails_every_field() {
        let errors = validate_record(&FormRecord::new());
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, Field::ALL.to_vec());
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let record = valid_record();
        assert_eq!(check_record(&record), Validation::Success(&record));
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_only_failing_fields_are_reported() {
        let record = valid_record()
            .with_field(Field::Email, "invalid-email")
            .with_field(Field::SpidrPin, "1234");
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::SpidrPin), Some(&FieldError::PinLength));
    }

    #[test]
    fn test_validation_is_repeatable() {
        let record = valid_record().with_field(Field::PhoneNumber, "(555) 12");
        assert_eq!(validate_record(&record), validate_record(&record));
    }

    #[test]
    fn test_whitespace_names_are_blank() {
        let record = valid_record().with_field(Field::FirstName, " \t ");
        assert_eq!(
            validate_record(&record).message(Field::FirstName),
            Some("First name is required")
        );
    }
}
