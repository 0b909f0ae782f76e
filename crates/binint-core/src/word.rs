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

//! # Words and Limbs
//!
//! `Word` is the machine word that infinite integers are made of. The `Limb`
//! trait is the unsigned-integer capability that every multi-word algorithm in
//! the workspace is written against, so the same long division can be tested
//! exhaustively with `u8` limbs and run with `Word` limbs in production.
//!
//! ## Highlights
//!
//! - Full-width products and the 2-by-1 narrowing division go through the
//!   next wider primitive, which compiles to a single instruction on common
//!   targets.
//! - Bit-run counting (`ascending`, `descending`) takes the bit to count, so
//!   callers never need to branch on zeros versus ones.

use crate::{division::Division, doublet::Doublet, primitive::Base};
use num_traits::{PrimInt, Unsigned};

/// The machine word, the element type of infinite integers.
pub type Word = usize;

/// An unsigned machine integer usable as a multi-word digit.
pub trait Limb: Base<Magnitude = Self> + PrimInt + Unsigned {
    /// Returns the full product `self * rhs` as a doublet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::word::Limb;
    ///
    /// let product = 0xFFu8.multiplication(0xFF);
    /// assert_eq!(product.into_parts(), (0x01, 0xFE));
    /// ```
    fn multiplication(self, rhs: Self) -> Doublet<Self>;

    /// Returns `self * rhs + addend + carry` as a doublet. The result never
    /// overflows two limbs.
    fn multiply_add(self, rhs: Self, addend: Self, carry: Self) -> Doublet<Self>;

    /// Divides a doublet by a single limb.
    ///
    /// The high half of `dividend` must be smaller than `divisor` so that the
    /// quotient fits one limb.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::{doublet::Doublet, word::Limb};
    ///
    /// let division = u8::narrowing_division(Doublet::from_parts(0x34, 0x12), 0x56);
    /// assert_eq!((division.quotient, division.remainder), (0x36, 0x10));
    /// ```
    fn narrowing_division(dividend: Doublet<Self>, divisor: Self) -> Division<Self, Self>;

    /// Counts the run of `bit` starting at the least significant bit.
    #[inline(always)]
    fn ascending(self, bit: bool) -> u32 {
        if bit {
            (!self).trailing_zeros()
        } else {
            self.trailing_zeros()
        }
    }

    /// Counts the run of `bit` starting at the most significant bit.
    #[inline(always)]
    fn descending(self, bit: bool) -> u32 {
        if bit {
            (!self).leading_zeros()
        } else {
            self.leading_zeros()
        }
    }

    /// Counts the bits equal to `bit`.
    #[inline(always)]
    fn population(self, bit: bool) -> u32 {
        if bit {
            self.count_ones()
        } else {
            self.count_zeros()
        }
    }

    /// Returns the most significant bit.
    #[inline(always)]
    fn most_significant_bit(self) -> bool {
        self.leading_zeros() == 0
    }
}

macro_rules! impl_limb {
    ($t:ty, $wide:ty) => {
        impl Limb for $t {
            #[inline(always)]
            fn multiplication(self, rhs: Self) -> Doublet<Self> {
                let product = (self as $wide) * (rhs as $wide);
                Doublet::from_parts(product as $t, (product >> <$t>::BITS) as $t)
            }

            #[inline(always)]
            fn multiply_add(self, rhs: Self, addend: Self, carry: Self) -> Doublet<Self> {
                let product =
                    (self as $wide) * (rhs as $wide) + (addend as $wide) + (carry as $wide);
                Doublet::from_parts(product as $t, (product >> <$t>::BITS) as $t)
            }

            #[inline(always)]
            fn narrowing_division(dividend: Doublet<Self>, divisor: Self) -> Division<Self, Self> {
                debug_assert!(
                    dividend.high() < divisor,
                    "narrowing division quotient does not fit one limb"
                );
                let (low, high) = dividend.into_parts();
                let wide = ((high as $wide) << <$t>::BITS) | (low as $wide);
                let divisor = divisor as $wide;
                Division::new((wide / divisor) as $t, (wide % divisor) as $t)
            }
        }
    };
}

impl_limb!(u8, u16);
impl_limb!(u16, u32);
impl_limb!(u32, u64);
impl_limb!(u64, u128);
impl_limb!(usize, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_exhaustive_u8() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let (low, high) = a.multiplication(b).into_parts();
                assert_eq!(((high as u16) << 8) | low as u16, a as u16 * b as u16);
            }
        }
    }

    #[test]
    fn test_multiply_add_never_overflows() {
        let (low, high) = u64::MAX.multiply_add(u64::MAX, u64::MAX, u64::MAX).into_parts();
        assert_eq!((low, high), (u64::MAX, u64::MAX));
    }

    #[test]
    fn test_narrowing_division_u16() {
        let division = u16::narrowing_division(Doublet::from_parts(0xFFFF, 0x1233), 0x1234);
        let dividend = 0x1233_FFFFu32;
        assert_eq!(division.quotient as u32, dividend / 0x1234);
        assert_eq!(division.remainder as u32, dividend % 0x1234);
    }

    #[test]
    fn test_bit_runs() {
        assert_eq!(0b0000_0111u8.ascending(true), 3);
        assert_eq!(0b0000_0111u8.ascending(false), 0);
        assert_eq!(0b1000_0000u8.ascending(false), 7);
        assert_eq!(0b1100_0000u8.descending(true), 2);
        assert_eq!(0b0001_0000u8.descending(false), 3);
        assert_eq!(0u8.descending(false), 8);
        assert_eq!(u8::MAX.ascending(true), 8);
    }

    #[test]
    fn test_population_and_msb() {
        assert_eq!(0b1011u16.population(true), 3);
        assert_eq!(0b1011u16.population(false), 13);
        assert!(0x80u8.most_significant_bit());
        assert!(!0x7Fu8.most_significant_bit());
        assert!(!0u8.most_significant_bit());
    }
}
