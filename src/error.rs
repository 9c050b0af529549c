//! Field errors and the per-field error map.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::{Field, Semigroup};

/// A single validation rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The field is empty after trimming.
    Required(Field),
    /// The phone number has fewer than ten digits.
    InvalidPhoneNumber,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
    /// The PIN does not contain exactly sixteen digits.
    PinLength,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidPhoneNumber => Field::PhoneNumber,
            FieldError::InvalidEmail => Field::Email,
            FieldError::PinLength => Field::SpidrPin,
        }
    }

    /// The message shown under the field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required(Field::FirstName) => "First name is required",
            FieldError::Required(Field::LastName) => "Last name is required",
            FieldError::Required(Field::PhoneNumber) => "Phone number is required",
            FieldError::Required(Field::Email) => "Email is required",
            FieldError::Required(Field::AirFryerCost) => "Air fryer cost guess is required",
            FieldError::Required(Field::SpidrPin) => "Spidr PIN is required",
            FieldError::InvalidPhoneNumber => {
                "Please enter a valid phone number (at least 10 digits)"
            }
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::PinLength => "Spidr PIN must be exactly 16 digits",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Errors for the fields that currently fail validation.
///
/// An empty map is the only success condition. Iteration follows form order.
///
/// ```
/// use spidr_form::{ErrorMap, Field, FieldError};
///
/// let mut errors = ErrorMap::new();
/// errors.insert(FieldError::InvalidEmail);
/// assert_eq!(errors.message(Field::Email), Some("Please enter a valid email address"));
///
/// errors.clear_field(Field::Email);
/// assert!(errors.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding one error for `field`.
    pub fn single(field: Field, error: FieldError) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field, error);
        Self { errors }
    }

    /// Record `error` under its own field, replacing any earlier one.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    /// Drop the error for `field`, returning it if one was present.
    pub fn clear_field(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// The error for `field`, if it is failing.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// The message for `field`, if it is failing.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(FieldError::message)
    }

    /// Whether `field` is failing.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Whether no field is failing.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// `(field, error)` pairs in form order.
    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.errors.iter()
    }
}

impl Semigroup for ErrorMap {
    // The first error recorded for a field wins.
    fn combine(mut self, other: Self) -> Self {
        for (field, error) in other.errors {
            self.errors.entry(field).or_insert(error);
        }
        self
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for error in iter {
            map.insert(error);
        }
        map
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMap {}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.name(), error.message())?;
        }
        map.end()
    }
}
