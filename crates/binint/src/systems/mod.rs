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

//! # Systems Integers
//!
//! Fixed-width two's-complement integers: Rust's primitives from 8 to 64
//! bits, `isize`/`usize`, and the 1-bit types [`I1`] and [`U1`]. Every
//! arithmetic operation comes in a flagged form that returns the wrapped
//! result together with an overflow flag; the wrapping and exact forms follow
//! from it by discarding the flag or branching on it.
//!
//! ## Highlights
//!
//! - `widening_times` returns the full product as a [`Doublet`], and
//!   `division_wide` divides a doublet back down to one width.
//! - `division` only flags for `MIN / -1`; the remainder alone never fails.
//! - Shifts flag when the distance is at least the bit width and, like the
//!   primitives, shift by the distance modulo the width.
//! - The saturating operations clamp at the type's bounds.
//!
//! ## Usage
//!
//! ```rust
//! use binint::{Nonzero, SystemsInteger};
//!
//! assert_eq!(200u8.plus(100).components(), (44, true));
//! assert_eq!(i8::MIN.negated().components(), (i8::MIN, true));
//! assert_eq!(100i8.saturating_times(2), i8::MAX);
//! assert_eq!(i8::MIN.division(Nonzero::new(-1)).error(), true);
//! assert_eq!(i8::MIN.remainder(Nonzero::new(-1)), 0);
//! assert_eq!(u16::MAX.widening_times(u16::MAX).into_parts(), (1, 0xFFFE));
//! ```

mod bit;

pub use bit::{I1, U1};

use crate::integer::BinaryInteger;
use binint_core::{
    count::Count, division::Division, doublet::Doublet, fallible::Fallible, nonzero::Nonzero,
    primitive::Base, word::Word,
};
use num_traits::{Bounded, Zero};
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A fixed-width binary integer with flagged arithmetic.
pub trait SystemsInteger:
    BinaryInteger
    + Base
    + Bounded
    + Zero
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Computes `self + rhs`, wrapping on overflow.
    fn plus(self, rhs: Self) -> Fallible<Self>;

    /// Computes `self - rhs`, wrapping on overflow.
    fn minus(self, rhs: Self) -> Fallible<Self>;

    /// Computes `self * rhs`, wrapping on overflow.
    fn times(self, rhs: Self) -> Fallible<Self>;

    /// Computes `-self`, wrapping on overflow.
    fn negated(self) -> Fallible<Self>;

    /// Computes the truncated quotient, wrapping on overflow.
    fn quotient(self, divisor: Nonzero<Self>) -> Fallible<Self>;

    /// Computes the remainder, which takes the sign of the dividend.
    fn remainder(self, divisor: Nonzero<Self>) -> Self;

    /// Computes quotient and remainder; only the quotient can overflow.
    fn division(self, divisor: Nonzero<Self>) -> Fallible<Division<Self, Self>>;

    /// Shifts left by `distance` modulo the bit width, flagging distances of
    /// at least the bit width.
    fn shifted_left(self, distance: u32) -> Fallible<Self>;

    /// Shifts right (arithmetically for signed types) by `distance` modulo
    /// the bit width, flagging distances of at least the bit width.
    fn shifted_right(self, distance: u32) -> Fallible<Self>;

    /// Returns the full product as a doublet.
    fn widening_times(self, rhs: Self) -> Doublet<Self>;

    /// Divides a doublet by a single value, flagging quotients that do not
    /// fit.
    fn division_wide(dividend: Doublet<Self>, divisor: Nonzero<Self>)
    -> Fallible<Division<Self, Self>>;

    /// Computes `self + rhs`, saturating at the bounds.
    #[inline]
    fn saturating_plus(self, rhs: Self) -> Self {
        let (sum, overflow) = self.plus(rhs).components();
        match (overflow, rhs.is_negative()) {
            (false, _) => sum,
            (true, true) => Self::min_value(),
            (true, false) => Self::max_value(),
        }
    }

    /// Computes `self - rhs`, saturating at the bounds.
    #[inline]
    fn saturating_minus(self, rhs: Self) -> Self {
        let (difference, overflow) = self.minus(rhs).components();
        match (overflow, rhs.is_negative()) {
            (false, _) => difference,
            (true, true) => Self::max_value(),
            (true, false) => Self::min_value(),
        }
    }

    /// Computes `self * rhs`, saturating at the bounds.
    #[inline]
    fn saturating_times(self, rhs: Self) -> Self {
        let (product, overflow) = self.times(rhs).components();
        match (overflow, self.is_negative() != rhs.is_negative()) {
            (false, _) => product,
            (true, true) => Self::min_value(),
            (true, false) => Self::max_value(),
        }
    }

    /// Computes `-self`, saturating at the bounds.
    #[inline]
    fn saturating_negated(self) -> Self {
        let (negation, overflow) = self.negated().components();
        match (overflow, self.is_negative()) {
            (false, _) => negation,
            (true, true) => Self::max_value(),
            (true, false) => Self::min_value(),
        }
    }
}

macro_rules! impl_systems_integer {
    ($t:ty, $u:ty, $wide:ty, $signed:expr) => {
        impl BinaryInteger for $t {
            const IS_SIGNED: bool = $signed;
            const SIZE: Count = Count::new(<$t>::BITS as isize);

            #[inline(always)]
            fn appendix(&self) -> bool {
                Base::sign_bit(*self)
            }

            #[inline(always)]
            fn body_len(&self) -> usize {
                (<$t>::BITS as usize).div_ceil(Word::BITS as usize)
            }

            #[inline]
            fn word(&self, index: usize) -> Word {
                let shift = index.saturating_mul(Word::BITS as usize).min(127) as u32;
                ((*self as $wide) >> shift) as Word
            }

            #[inline]
            fn from_words<I>(words: I, appendix: bool) -> Self
            where
                I: IntoIterator<Item = Word>,
            {
                let extension = if appendix { Word::MAX } else { 0 };
                let mut words = words.into_iter();
                let mut accumulator = 0u128;
                let mut shift = 0;
                while shift < <$t>::BITS {
                    let word = words.next().unwrap_or(extension);
                    accumulator |= (word as u128) << shift;
                    shift += Word::BITS;
                }
                accumulator as $t
            }

            #[inline]
            fn ascending(&self, bit: bool) -> Count {
                Count::from(if bit {
                    self.trailing_ones()
                } else {
                    self.trailing_zeros()
                })
            }

            #[inline]
            fn descending(&self, bit: bool) -> Count {
                Count::from(if bit {
                    self.leading_ones()
                } else {
                    self.leading_zeros()
                })
            }

            #[inline]
            fn count(&self, bit: bool) -> Count {
                Count::from(if bit {
                    self.count_ones()
                } else {
                    self.count_zeros()
                })
            }
        }

        impl SystemsInteger for $t {
            #[inline(always)]
            fn plus(self, rhs: Self) -> Fallible<Self> {
                let (sum, overflow) = self.overflowing_add(rhs);
                Fallible::with_error(sum, overflow)
            }

            #[inline(always)]
            fn minus(self, rhs: Self) -> Fallible<Self> {
                let (difference, overflow) = self.overflowing_sub(rhs);
                Fallible::with_error(difference, overflow)
            }

            #[inline(always)]
            fn times(self, rhs: Self) -> Fallible<Self> {
                let (product, overflow) = self.overflowing_mul(rhs);
                Fallible::with_error(product, overflow)
            }

            #[inline(always)]
            fn negated(self) -> Fallible<Self> {
                let (negation, overflow) = self.overflowing_neg();
                Fallible::with_error(negation, overflow)
            }

            #[inline(always)]
            fn quotient(self, divisor: Nonzero<Self>) -> Fallible<Self> {
                let (quotient, overflow) = self.overflowing_div(divisor.get());
                Fallible::with_error(quotient, overflow)
            }

            #[inline(always)]
            fn remainder(self, divisor: Nonzero<Self>) -> Self {
                self.wrapping_rem(divisor.get())
            }

            #[inline]
            fn division(self, divisor: Nonzero<Self>) -> Fallible<Division<Self, Self>> {
                let (quotient, overflow) = self.overflowing_div(divisor.get());
                let remainder = self.wrapping_rem(divisor.get());
                Fallible::with_error(Division::new(quotient, remainder), overflow)
            }

            #[inline(always)]
            fn shifted_left(self, distance: u32) -> Fallible<Self> {
                let (shifted, overflow) = self.overflowing_shl(distance);
                Fallible::with_error(shifted, overflow)
            }

            #[inline(always)]
            fn shifted_right(self, distance: u32) -> Fallible<Self> {
                let (shifted, overflow) = self.overflowing_shr(distance);
                Fallible::with_error(shifted, overflow)
            }

            #[inline(always)]
            fn widening_times(self, rhs: Self) -> Doublet<Self> {
                let product = (self as $wide) * (rhs as $wide);
                Doublet::from_parts(product as $u, (product >> <$t>::BITS) as $t)
            }

            #[inline]
            fn division_wide(
                dividend: Doublet<Self>,
                divisor: Nonzero<Self>,
            ) -> Fallible<Division<Self, Self>> {
                let (low, high) = dividend.into_parts();
                let wide = ((high as $wide) << <$t>::BITS) | (low as $wide);
                let divisor = divisor.get() as $wide;
                let quotient = wide.wrapping_div(divisor);
                let remainder = wide.wrapping_rem(divisor);
                let narrowed = quotient as $t;
                Fallible::with_error(
                    Division::new(narrowed, remainder as $t),
                    narrowed as $wide != quotient,
                )
            }

            #[inline(always)]
            fn saturating_plus(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline(always)]
            fn saturating_minus(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline(always)]
            fn saturating_times(self, rhs: Self) -> Self {
                <$t>::saturating_mul(self, rhs)
            }
        }
    };
}

impl_systems_integer!(i8, u8, i128, true);
impl_systems_integer!(i16, u16, i128, true);
impl_systems_integer!(i32, u32, i128, true);
impl_systems_integer!(i64, u64, i128, true);
impl_systems_integer!(isize, usize, i128, true);
impl_systems_integer!(u8, u8, u128, false);
impl_systems_integer!(u16, u16, u128, false);
impl_systems_integer!(u32, u32, u128, false);
impl_systems_integer!(u64, u64, u128, false);
impl_systems_integer!(usize, usize, u128, false);
