//! The form session's record of stored field values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Field;

/// Stored values for one form session.
///
/// Values are already formatted: `phone_number` holds `(123) 456-7890`,
/// `spidr_pin` holds `1234-5678-9012-3456`. Records are never mutated in
/// place by the session; [`FormRecord::with_field`] returns a new value.
///
/// ```
/// use spidr_form::{Field, FormRecord};
///
/// let empty = FormRecord::new();
/// let named = empty.with_field(Field::FirstName, "John");
///
/// assert_eq!(empty.get(Field::FirstName), "");
/// assert_eq!(named.get(Field::FirstName), "John");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormRecord {
    /// Applicant first name.
    pub first_name: String,
    /// Applicant last name.
    pub last_name: String,
    /// Formatted phone number.
    pub phone_number: String,
    /// Email address.
    pub email: String,
    /// Price guess, digits and `.` only.
    pub air_fryer_cost: String,
    /// Formatted PIN.
    pub spidr_pin: String,
}

impl FormRecord {
    /// A record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::AirFryerCost => &self.air_fryer_cost,
            Field::SpidrPin => &self.spidr_pin,
        }
    }

    /// A copy of this record with `field` replaced by `value`.
    ///
    /// The value is stored as given; run it through the field's
    /// [`Formatter`](crate::Formatter) first.
    #[must_use]
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::AirFryerCost => &mut self.air_fryer_cost,
            Field::SpidrPin => &mut self.spidr_pin,
        }
    }
}
