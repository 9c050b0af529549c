//! Semigroup trait for accumulating validation errors
//!
//! Form validation never stops at the first broken field. Every field is
//! checked, and the failures are folded together with [`Semigroup::combine`].
//! [`ErrorMap`](crate::ErrorMap) is the accumulator the form validator uses;
//! `Vec<T>` is provided for ad-hoc accumulation in tests and host code.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use spidr_form::{ErrorMap, Field, FieldError, Semigroup};
//!
//! let first = ErrorMap::single(Field::FirstName, FieldError::Required(Field::FirstName));
//! let email = ErrorMap::single(Field::Email, FieldError::InvalidEmail);
//!
//! let all = first.combine(email);
//! assert_eq!(all.len(), 2);
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes both sides by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    ///
    /// ```
    /// use spidr_form::Semigroup;
    ///
    /// let messages = vec!["First name is required"];
    /// let more = vec!["Email is required"];
    /// assert_eq!(
    ///     messages.combine(more),
    ///     vec!["First name is required", "Email is required"]
    /// );
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
