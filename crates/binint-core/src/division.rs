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

//! # Division Results
//!
//! The quotient and remainder produced by every division routine.

/// A quotient and a remainder.
///
/// # Examples
///
/// ```rust
/// # use binint_core::division::Division;
///
/// let division = Division::new(3, 1);
/// assert_eq!(division.quotient, 3);
/// assert_eq!(division.remainder, 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Division<Q, R> {
    /// The quotient.
    pub quotient: Q,
    /// The remainder.
    pub remainder: R,
}

impl<Q, R> Division<Q, R> {
    /// Creates a division result.
    #[inline(always)]
    pub const fn new(quotient: Q, remainder: R) -> Self {
        Self {
            quotient,
            remainder,
        }
    }

    /// Returns the quotient and the remainder as a tuple.
    #[inline(always)]
    pub fn into_parts(self) -> (Q, R) {
        (self.quotient, self.remainder)
    }

    /// Maps both components.
    #[inline]
    pub fn map<Q2, R2, F, G>(self, quotient: F, remainder: G) -> Division<Q2, R2>
    where
        F: FnOnce(Q) -> Q2,
        G: FnOnce(R) -> R2,
    {
        Division::new(quotient(self.quotient), remainder(self.remainder))
    }
}

impl<Q, R> From<(Q, R)> for Division<Q, R> {
    #[inline(always)]
    fn from((quotient, remainder): (Q, R)) -> Self {
        Self::new(quotient, remainder)
    }
}
