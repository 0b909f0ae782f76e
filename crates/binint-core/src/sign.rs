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

//! # Sign
//!
//! The two-valued sign of an integer. Signs only support identity comparison:
//! `Plus == Plus`, `Minus == Minus`, and nothing else is equal. There is
//! intentionally no ordering between the two.

/// The sign of an integer value.
///
/// # Examples
///
/// ```rust
/// # use binint_core::sign::Sign;
///
/// assert_eq!(Sign::Plus, Sign::Plus);
/// assert_ne!(Sign::Plus, Sign::Minus);
/// assert_eq!(!Sign::Plus, Sign::Minus);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Sign {
    /// Nonnegative.
    #[default]
    Plus,
    /// Negative.
    Minus,
}

impl Sign {
    /// Creates a sign from a sign bit, where `true` means `Minus`.
    #[inline(always)]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Sign::Minus } else { Sign::Plus }
    }

    /// Returns the sign bit, where `Minus` is `true`.
    #[inline(always)]
    pub const fn bit(self) -> bool {
        matches!(self, Sign::Minus)
    }

    /// Returns the opposite sign.
    #[inline(always)]
    pub const fn toggled(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

impl std::ops::Not for Sign {
    type Output = Sign;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.toggled()
    }
}

impl From<bool> for Sign {
    #[inline(always)]
    fn from(bit: bool) -> Self {
        Self::from_bit(bit)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}
