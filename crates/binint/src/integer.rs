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

//! # Binary Integers
//!
//! `BinaryInteger` is the read/construct surface shared by every integer
//! representation in this crate: the fixed-width systems integers and the
//! infinite integers. Every value is viewed as a little-endian sequence of
//! [`Word`]s (its *body*) followed by an infinite run of its *appendix* bit.
//! Conversions between representations only ever go through this view, so
//! any pair of representations converts without a dedicated implementation.
//!
//! ## Usage
//!
//! ```rust
//! use binint::{BinaryInteger, Count, UnsignedInfinite};
//!
//! assert_eq!((-1i16).word(3), usize::MAX);
//! assert!(!0xFFu8.appendix());
//! assert_eq!(i32::SIZE, Count::new(32));
//! assert_eq!(UnsignedInfinite::SIZE, Count::INFINITY);
//!
//! let wide: i64 = (-3i8).exactly().value();
//! assert_eq!(wide, -3);
//! ```

use crate::convert;
use binint_core::{count::Count, fallible::Fallible, word::Word};
use num_traits::Bounded;

/// A binary integer viewed as words plus an appendix bit.
pub trait BinaryInteger: Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug {
    /// Whether the representation is signed.
    const IS_SIGNED: bool;

    /// The bit width: finite for systems integers, infinite otherwise.
    const SIZE: Count;

    /// The bit that extends the body infinitely.
    fn appendix(&self) -> bool;

    /// The number of words in the body.
    fn body_len(&self) -> usize;

    /// Returns the word at `index`; words past the body are the appendix
    /// extension.
    fn word(&self, index: usize) -> Word;

    /// Builds a value from little-endian words followed by the extension of
    /// `appendix`, keeping only as many low bits as the representation holds.
    fn from_words<I>(words: I, appendix: bool) -> Self
    where
        I: IntoIterator<Item = Word>;

    /// Counts the run of `bit` starting at the least significant bit.
    fn ascending(&self, bit: bool) -> Count;

    /// Counts the run of `bit` starting at the most significant bit.
    fn descending(&self, bit: bool) -> Count;

    /// Counts the bits equal to `bit`.
    fn count(&self, bit: bool) -> Count;

    /// Returns `true` if the value is below zero.
    #[inline]
    fn is_negative(&self) -> bool {
        Self::IS_SIGNED && self.appendix()
    }

    /// Returns `true` if the value is an unsigned value with an infinite run
    /// of ones, i.e. it exceeds every finite value.
    #[inline]
    fn is_infinite(&self) -> bool {
        !Self::IS_SIGNED && self.appendix()
    }

    /// Converts to `T`, flagging any loss of information.
    #[inline]
    fn exactly<T>(&self) -> Fallible<T>
    where
        T: BinaryInteger,
    {
        convert::exactly(self)
    }

    /// Converts to `T` by keeping as many low bits as `T` holds.
    #[inline]
    fn truncating<T>(&self) -> T
    where
        T: BinaryInteger,
    {
        convert::truncating(self)
    }

    /// Converts to `T`, saturating at `T`'s bounds when out of range.
    #[inline]
    fn clamping<T>(&self) -> T
    where
        T: BinaryInteger + Bounded,
    {
        convert::clamping(self)
    }
}
