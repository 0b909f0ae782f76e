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

//! # Nonzero Values
//!
//! `Nonzero<T>` proves at the type level that a value is not zero, which is
//! the precondition of every division in this workspace. Wrapping a zero is a
//! contract violation and panics; callers that cannot rule zero out should
//! use [`Nonzero::exactly`] and branch on the result.

use num_traits::Zero;

/// A value that is guaranteed not to be zero.
///
/// # Examples
///
/// ```rust
/// # use binint_core::nonzero::Nonzero;
///
/// let divisor = Nonzero::new(7u32);
/// assert_eq!(divisor.get(), 7);
/// assert!(Nonzero::exactly(0u32).is_none());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Nonzero<T> {
    value: T,
}

impl<T> Nonzero<T>
where
    T: Zero,
{
    /// Wraps `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    #[inline]
    pub fn new(value: T) -> Self {
        assert!(!value.is_zero(), "Nonzero::new called with a zero value");
        Self { value }
    }

    /// Wraps `value` if it is not zero.
    #[inline]
    pub fn exactly(value: T) -> Option<Self> {
        if value.is_zero() {
            None
        } else {
            Some(Self { value })
        }
    }
}

impl<T> Nonzero<T> {
    /// Returns a reference to the wrapped value.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the value.
    #[inline(always)]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Nonzero<T>
where
    T: Copy,
{
    /// Returns a copy of the wrapped value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.value
    }
}

impl<T> AsRef<T> for Nonzero<T> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> std::fmt::Display for Nonzero<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let n = Nonzero::new(-3i8);
        assert_eq!(n.get(), -3);
        assert_eq!(*n.value(), -3);
        assert_eq!(n.into_value(), -3);
    }

    #[test]
    fn test_exactly() {
        assert_eq!(Nonzero::exactly(5u8).map(|n| n.get()), Some(5));
        assert!(Nonzero::exactly(0i64).is_none());
    }

    #[test]
    #[should_panic(expected = "Nonzero::new called with a zero value")]
    fn test_new_zero_panics() {
        let _ = Nonzero::new(0u16);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Nonzero::new(42usize)), "42");
    }
}
