//! Validation type for accumulating field errors
//!
//! `Validation` is shaped like `Result`, but combining two failures keeps
//! both error sets instead of returning the first one. The form validator
//! runs one validation per field and folds them together, so a submit reports
//! every broken field at once.
//!
//! # Examples
//!
//! ```
//! use spidr_form::{ErrorMap, Field, FieldError, Validation};
//!
//! let checks = vec![
//!     Validation::<&str, ErrorMap>::success("John"),
//!     Validation::failure(ErrorMap::single(Field::Email, FieldError::InvalidEmail)),
//!     Validation::failure(ErrorMap::single(Field::SpidrPin, FieldError::PinLength)),
//! ];
//!
//! match Validation::all(checks) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` to accumulate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if this validation is successful.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present.
    ///
    /// Used to lift a single [`FieldError`](crate::FieldError) into an
    /// [`ErrorMap`](crate::ErrorMap) keyed by its field.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent check.
    ///
    /// The closure only runs when this validation succeeded, which is how
    /// "required" gates the format rule for the same field: a blank phone
    /// number reports "required", never "invalid".
    ///
    /// ```
    /// use spidr_form::Validation;
    ///
    /// let v = Validation::<_, &str>::success("(123) 456");
    /// let result = v.and_then(|phone| {
    ///     if phone.chars().filter(char::is_ascii_digit).count() >= 10 {
    ///         Validation::success(phone)
    ///     } else {
    ///         Validation::failure("too short")
    ///     }
    /// });
    /// assert_eq!(result, Validation::Failure("too short"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine any number of validations.
    ///
    /// Succeeds with every value in order when nothing failed. Otherwise all
    /// failures are folded left to right.
    ///
    /// ```
    /// use spidr_form::Validation;
    ///
    /// let checks = vec![
    ///     Validation::<i32, _>::failure(vec!["first"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["second"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all(checks),
    ///     Validation::Failure(vec!["first", "second"])
    /// );
    /// ```
    pub fn all<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
