// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Flagged Results
//!
//! `Fallible<T>` pairs a computed value with an error flag. Range and overflow
//! conditions never unwind: the operation still produces its wrapped (or
//! otherwise meaningful) value and merely raises the flag, so batch-oriented
//! numeric code can defer the check or chain several operations and inspect
//! the combined flag once.
//!
//! ## Highlights
//!
//! - `veto`, `and_then` and `zip` combine flags with logical OR.
//! - `optional` and `result` turn the flag into `Option`/`Result` for callers
//!   that want the exact behavior.
//! - `Fallible<Vec<T>>` can be collected from an iterator of `Fallible<T>`.
//!
//! ## Usage
//!
//! ```rust
//! use binint_core::fallible::Fallible;
//!
//! let sum = Fallible::new(200u8).and_then(|x| {
//!     let (value, overflow) = x.overflowing_add(100);
//!     Fallible::with_error(value, overflow)
//! });
//! assert_eq!(sum.components(), (44, true));
//! assert_eq!(sum.optional(), None);
//! ```

/// A value paired with an error flag.
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Fallible<T> {
    value: T,
    error: bool,
}

impl<T> Fallible<T> {
    /// Creates a value without an error.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            error: false,
        }
    }

    /// Creates a value with the given error flag.
    #[inline(always)]
    pub const fn with_error(value: T, error: bool) -> Self {
        Self { value, error }
    }

    /// Creates a value with the error flag set.
    #[inline(always)]
    pub const fn failure(value: T) -> Self {
        Self { value, error: true }
    }

    /// Returns the value, discarding the error flag.
    #[inline(always)]
    pub fn value(self) -> T {
        self.value
    }

    /// Returns `true` if the error flag is set.
    #[inline(always)]
    pub const fn error(&self) -> bool {
        self.error
    }

    /// Returns the value and the error flag.
    #[inline(always)]
    pub fn components(self) -> (T, bool) {
        (self.value, self.error)
    }

    /// Returns a reference view of this value with the same flag.
    #[inline(always)]
    pub const fn as_ref(&self) -> Fallible<&T> {
        Fallible {
            value: &self.value,
            error: self.error,
        }
    }

    /// Raises the error flag if `condition` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::fallible::Fallible;
    ///
    /// assert!(!Fallible::new(1).veto(false).error());
    /// assert!(Fallible::new(1).veto(true).error());
    /// assert!(Fallible::failure(1).veto(false).error());
    /// ```
    #[inline(always)]
    pub fn veto(self, condition: bool) -> Self {
        Self {
            value: self.value,
            error: self.error | condition,
        }
    }

    /// Maps the value and keeps the flag.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> U,
    {
        Fallible {
            value: f(self.value),
            error: self.error,
        }
    }

    /// Chains a dependent fallible operation; the result is erroneous if either
    /// step is.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Fallible<U>
    where
        F: FnOnce(T) -> Fallible<U>,
    {
        f(self.value).veto(self.error)
    }

    /// Pairs two fallible values; the pair is erroneous if either one is.
    #[inline]
    pub fn zip<U>(self, other: Fallible<U>) -> Fallible<(T, U)> {
        Fallible {
            value: (self.value, other.value),
            error: self.error | other.error,
        }
    }

    /// Returns the value if no error occurred.
    #[inline]
    pub fn optional(self) -> Option<T> {
        if self.error { None } else { Some(self.value) }
    }

    /// Returns the value if no error occurred, or the wrapped value inside a
    /// [`Lossy`] error otherwise.
    #[inline]
    pub fn result(self) -> Result<T, Lossy<T>> {
        if self.error {
            Err(Lossy { value: self.value })
        } else {
            Ok(self.value)
        }
    }
}

impl<T> From<T> for Fallible<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> FromIterator<Fallible<T>> for Fallible<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Fallible<T>>>(iter: I) -> Self {
        let mut error = false;
        let values = iter
            .into_iter()
            .map(|element| {
                error |= element.error;
                element.value
            })
            .collect();
        Fallible::with_error(values, error)
    }
}

/// The error returned by [`Fallible::result`] when the flag is set.
///
/// It carries the value the operation produced anyway (usually the wrapped
/// or truncated result).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lossy<T> {
    /// The value produced by the failed operation.
    pub value: T,
}

impl<T> std::fmt::Display for Lossy<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Result is not exactly representable (wrapped value: {:?})",
            self.value
        )
    }
}

impl<T> std::error::Error for Lossy<T> where T: std::fmt::Debug {}
