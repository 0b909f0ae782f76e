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

//! # Conversion Policies
//!
//! Converts between any two [`BinaryInteger`] representations under one of
//! three policies:
//!
//! - **Exact**: succeeds only if the target represents the source
//!   losslessly; otherwise the truncated value is returned with the error
//!   flag raised.
//! - **Clamping**: saturates at the target's minimum or maximum. Negative
//!   sources clamp down, everything else (including infinite unsigned values)
//!   clamps up.
//! - **Masking**: keeps the low bits of the source's two's-complement
//!   pattern and reinterprets them under the target's signedness. Always
//!   succeeds, including for infinite sources.
//!
//! ## Usage
//!
//! ```rust
//! use binint::convert::{self, Policy};
//!
//! assert_eq!(convert::exactly::<u8, i16>(&255).components(), (255, false));
//! assert_eq!(convert::exactly::<u8, i16>(&256).components(), (0, true));
//! assert_eq!(convert::clamping::<i8, i32>(&-1000), i8::MIN);
//! assert_eq!(convert::truncating::<i8, u16>(&0x1FF), -1);
//! assert_eq!(convert::convert::<u8, i8>(&-1, Policy::Clamping).value(), 0);
//! ```

use crate::integer::BinaryInteger;
use binint_core::fallible::Fallible;
use num_traits::Bounded;

/// A conversion policy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Policy {
    /// Flag the result when the value does not fit.
    Exact,
    /// Saturate at the target's bounds.
    Clamping,
    /// Keep the low bits.
    Masking,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Exact => write!(f, "exact"),
            Policy::Clamping => write!(f, "clamping"),
            Policy::Masking => write!(f, "masking"),
        }
    }
}

/// Keeps as many low bits of `source` as `T` holds.
#[inline]
pub fn truncating<T, S>(source: &S) -> T
where
    T: BinaryInteger,
    S: BinaryInteger,
{
    T::from_words(
        (0..source.body_len()).map(|index| source.word(index)),
        source.appendix(),
    )
}

/// Converts `source` to `T`, flagging any loss of information.
///
/// The conversion is lossless when the truncated value reproduces every
/// word and the appendix of the source and, if the appendix is set, both
/// sides read it with the same signedness (a negative value is never an
/// infinite unsigned value and vice versa).
pub fn exactly<T, S>(source: &S) -> Fallible<T>
where
    T: BinaryInteger,
    S: BinaryInteger,
{
    let target: T = truncating(source);
    let appendix = source.appendix();
    let words = source.body_len().max(target.body_len());
    let lossless = target.appendix() == appendix
        && (!appendix || S::IS_SIGNED == T::IS_SIGNED)
        && (0..words).all(|index| target.word(index) == source.word(index));
    Fallible::with_error(target, !lossless)
}

/// Converts `source` to `T`, saturating at `T`'s bounds.
pub fn clamping<T, S>(source: &S) -> T
where
    T: BinaryInteger + Bounded,
    S: BinaryInteger,
{
    let (target, error) = exactly::<T, S>(source).components();
    if !error {
        target
    } else if source.is_negative() {
        T::min_value()
    } else {
        T::max_value()
    }
}

/// Converts `source` to `T` under `policy`.
///
/// Only the exact policy can raise the error flag.
pub fn convert<T, S>(source: &S, policy: Policy) -> Fallible<T>
where
    T: BinaryInteger + Bounded,
    S: BinaryInteger,
{
    match policy {
        Policy::Exact => exactly(source),
        Policy::Clamping => Fallible::new(clamping(source)),
        Policy::Masking => Fallible::new(truncating(source)),
    }
}
