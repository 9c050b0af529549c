//! The six fields of the contest entry form.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A form field, in the order the form renders and validates them.
///
/// The derived `Ord` follows declaration order, so an
/// [`ErrorMap`](crate::ErrorMap) iterates fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// Applicant first name, free text.
    FirstName,
    /// Applicant last name, free text.
    LastName,
    /// Phone number, stored as `(XXX) XXX-XXXX`.
    PhoneNumber,
    /// Email address, free text.
    Email,
    /// Air fryer price guess, digits and `.` only.
    AirFryerCost,
    /// 16-digit PIN, stored in dash-separated groups of four.
    SpidrPin,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Email,
        Field::AirFryerCost,
        Field::SpidrPin,
    ];

    /// The field's name as the host UI keys it.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
            Field::AirFryerCost => "airFryerCost",
            Field::SpidrPin => "spidrPin",
        }
    }

    /// The visible label rendered above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email Address",
            Field::AirFryerCost => "Guess the Air Fryer's Cost",
            Field::SpidrPin => "Very, Very Secret 16-digit Spidr PIN",
        }
    }

    /// Placeholder shown in an empty input, if any.
    ///
    /// The PIN placeholder depends on visibility, see
    /// [`PinVisibility::placeholder`](crate::PinVisibility::placeholder).
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::PhoneNumber => Some("(123) 456-7890"),
            Field::Email => Some("example@email.com"),
            Field::AirFryerCost => Some("0.00"),
            Field::FirstName | Field::LastName | Field::SpidrPin => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    name: String,
}

impl ParseFieldError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {:?}", self.name)
    }
}

impl std::error::Error for ParseFieldError {}

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseFieldError {
                name: s.to_string(),
            })
    }
}
