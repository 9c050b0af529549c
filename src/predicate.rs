//! String predicates the form validator is built from
//!
//! A predicate is a reusable yes/no check. [`validate`] turns a predicate and
//! an error into a [`Validation`], which is how each field rule is written.
//!
//! ```rust
//! use spidr_form::predicate::*;
//!
//! assert!(not_blank().check("John"));
//! assert!(!not_blank().check("   "));
//! assert!(digits_at_least(10).check("(123) 456-7890"));
//! assert!(email_shape().check("john.doe@example.com"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::Validation;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// A composable predicate over values of type `T`.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Predicate that passes when a string has non-whitespace content.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Create a predicate that rejects empty and whitespace-only strings.
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate on the number of ASCII digits in a string, ignoring everything else.
#[derive(Clone, Copy, Debug)]
pub struct DigitCount {
    min: usize,
    max: usize,
}

impl Predicate<str> for DigitCount {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let count = value.chars().filter(char::is_ascii_digit).count();
        count >= self.min && count <= self.max
    }
}

/// Create a predicate requiring at least `min` digits.
///
/// ```rust
/// use spidr_form::predicate::*;
///
/// assert!(digits_at_least(3).check("a1b2c3"));
/// assert!(!digits_at_least(3).check("(12)"));
/// ```
pub fn digits_at_least(min: usize) -> DigitCount {
    DigitCount {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate requiring exactly `count` digits.
///
/// ```rust
/// use spidr_form::predicate::*;
///
/// assert!(digits_exactly(4).check("12-34"));
/// assert!(!digits_exactly(4).check("12-345"));
/// ```
pub fn digits_exactly(count: usize) -> DigitCount {
    DigitCount {
        min: count,
        max: count,
    }
}

/// Predicate for a loose `local@domain.tld` email shape.
///
/// Each of the three parts must be non-empty and free of whitespace and `@`.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmailShape;

impl Predicate<str> for EmailShape {
    fn check(&self, value: &str) -> bool {
        EMAIL.is_match(value)
    }
}

/// Create the email shape predicate.
pub fn email_shape() -> EmailShape {
    EmailShape
}

/// Validate a string using a predicate.
///
/// Returns `Validation::success(value)` if the predicate holds, otherwise
/// `Validation::failure(error)`.
///
/// ```rust
/// use spidr_form::{Validation, predicate::*};
///
/// let result = validate("   ", not_blank(), "required");
/// assert_eq!(result, Validation::failure("required"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    T: AsRef<str>,
    P: Predicate<str>,
{
    if predicate.check(value.as_ref()) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}
