//! Input masks applied to raw keystroke values before they are stored.
//!
//! Every formatter is a pure, total function. The only rejection is a length
//! cap on the phone and PIN fields: when the formatted value would exceed it,
//! the edit is refused and the prior value stays, so typing past the end of
//! a full PIN does nothing.
//!
//! ```
//! use spidr_form::format::{format_cost, format_phone, format_pin};
//!
//! assert_eq!(format_phone("1234567890"), "(123) 456-7890");
//! assert_eq!(format_pin("1234567890123456"), "1234-5678-9012-3456");
//! assert_eq!(format_cost("abc123.45def"), "123.45");
//! ```

use crate::Field;

/// Longest stored phone number: `(XXX) XXX-XXXX`.
pub const PHONE_MAX_LEN: usize = 14;

/// Longest stored PIN: 16 digits and 3 dashes.
pub const PIN_MAX_LEN: usize = 19;

const PHONE_DIGITS: usize = 10;
const PIN_GROUP: usize = 4;

/// A formatter as stored in the strategy table.
pub type FormatFn = fn(&str) -> String;

/// The ASCII digits of `raw`, in order.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Format a phone number as `(XXX) XXX-XXXX`, or a prefix of it while typing.
///
/// Digits past the tenth are ignored.
///
/// ```
/// use spidr_form::format::format_phone;
///
/// assert_eq!(format_phone("12"), "12");
/// assert_eq!(format_phone("12345"), "(123) 45");
/// assert_eq!(format_phone("(123) 456-78901234"), "(123) 456-7890");
/// ```
pub fn format_phone(raw: &str) -> String {
    let all = digits(raw);
    let d = &all[..all.len().min(PHONE_DIGITS)];

    match d.len() {
        0..=3 => d.to_string(),
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

/// Group PIN digits in fours separated by dashes.
///
/// A dash only follows a group that has more digits after it, so the result
/// never ends with `-`. The digit count is not capped here.
pub fn format_pin(raw: &str) -> String {
    let d = digits(raw);
    let mut out = String::with_capacity(d.len() + d.len() / PIN_GROUP);
    for (i, c) in d.chars().enumerate() {
        if i > 0 && i % PIN_GROUP == 0 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Keep only ASCII digits and `.`.
///
/// Repeated decimal points are kept as typed.
pub fn format_cost(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Free-text fields are stored as typed.
pub fn format_plain(raw: &str) -> String {
    raw.to_string()
}

/// Outcome of running one edit through a field's formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedEdit {
    /// The formatted value fits and should be stored.
    Accepted(String),
    /// The formatted value exceeds the field's cap; keep the prior value.
    Rejected {
        /// What the formatter produced.
        attempted: String,
    },
}

impl FormattedEdit {
    /// Whether the edit is to be stored.
    pub fn is_accepted(&self) -> bool {
        matches!(self, FormattedEdit::Accepted(_))
    }

    /// The value to store, if accepted.
    pub fn accepted(&self) -> Option<&str> {
        match self {
            FormattedEdit::Accepted(value) => Some(value),
            FormattedEdit::Rejected { .. } => None,
        }
    }
}

/// A field's formatter together with its stored length cap.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: FormatFn,
    max_len: Option<usize>,
}

impl Formatter {
    /// Look up the formatter for `field`.
    ///
    /// ```
    /// use spidr_form::{Field, Formatter};
    ///
    /// let phone = Formatter::for_field(Field::PhoneNumber);
    /// assert_eq!(phone.max_len(), Some(14));
    /// assert_eq!(phone.format("5551234567"), "(555) 123-4567");
    /// ```
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::PhoneNumber => Self::capped(format_phone, PHONE_MAX_LEN),
            Field::SpidrPin => Self::capped(format_pin, PIN_MAX_LEN),
            Field::AirFryerCost => Self::uncapped(format_cost),
            Field::FirstName | Field::LastName | Field::Email => Self::uncapped(format_plain),
        }
    }

    const fn capped(format: FormatFn, max_len: usize) -> Self {
        Self {
            format,
            max_len: Some(max_len),
        }
    }

    const fn uncapped(format: FormatFn) -> Self {
        Self {
            format,
            max_len: None,
        }
    }

    /// The stored length cap, if the field has one.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Run the formatter without the length check.
    pub fn format(&self, raw: &str) -> String {
        (self.format)(raw)
    }

    /// Format `raw` and decide whether it may be stored.
    pub fn apply(&self, raw: &str) -> FormattedEdit {
        let formatted = self.format(raw);
        match self.max_len {
            Some(max) if formatted.chars().count() > max => {
                FormattedEdit::Rejected { attempted: formatted }
            }
            _ => FormattedEdit::Accepted(formatted),
        }
    }
}
