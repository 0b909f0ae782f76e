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

//! # Doublets
//!
//! A `Doublet<B>` is a value of twice the width of `B`: an unsigned low half
//! (`B::Magnitude`) and a high half of type `B` that carries the signedness.
//! Doublets hold full-width products and wide dividends.
//!
//! ## Usage
//!
//! ```rust
//! use binint_core::doublet::Doublet;
//!
//! let minus_one = Doublet::new(-1i8);
//! assert_eq!(minus_one.into_parts(), (0xFF, -1));
//!
//! let sum = minus_one.plus(Doublet::new(2));
//! assert_eq!(sum.components(), (Doublet::from_parts(1, 0), false));
//! ```

use crate::{fallible::Fallible, primitive::Base};

/// A two-limb value whose high limb carries the signedness of `B`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Doublet<B: Base> {
    low: B::Magnitude,
    high: B,
}

impl<B: Base> Doublet<B> {
    /// Widens `value`: the low half holds its bits and the high half its
    /// sign extension.
    #[inline(always)]
    pub fn new(value: B) -> Self {
        Self {
            low: value.magnitude_bits(),
            high: value.extension(),
        }
    }

    /// Creates a doublet from its halves.
    #[inline(always)]
    pub const fn from_parts(low: B::Magnitude, high: B) -> Self {
        Self { low, high }
    }

    /// Returns the low half.
    #[inline(always)]
    pub const fn low(&self) -> B::Magnitude {
        self.low
    }

    /// Returns the high half.
    #[inline(always)]
    pub const fn high(&self) -> B {
        self.high
    }

    /// Returns `(low, high)`.
    #[inline(always)]
    pub fn into_parts(self) -> (B::Magnitude, B) {
        (self.low, self.high)
    }

    /// Computes `self + rhs`, wrapping on overflow.
    #[inline]
    pub fn plus(self, rhs: Self) -> Fallible<Self> {
        let (low, carry) = self.low.carrying_plus(rhs.low, false);
        let (high, overflow) = self.high.carrying_plus(rhs.high, carry);
        Fallible::with_error(Self { low, high }, overflow)
    }

    /// Computes `self - rhs`, wrapping on overflow.
    #[inline]
    pub fn minus(self, rhs: Self) -> Fallible<Self> {
        let (low, borrow) = self.low.borrowing_minus(rhs.low, false);
        let (high, overflow) = self.high.borrowing_minus(rhs.high, borrow);
        Fallible::with_error(Self { low, high }, overflow)
    }

    /// Computes `-self`, wrapping on overflow.
    ///
    /// Unsigned doublets overflow for every nonzero value; signed doublets
    /// overflow only for the minimum.
    #[inline]
    pub fn negated(self) -> Fallible<Self> {
        Self::from_parts(<B::Magnitude as Base>::ZERO, B::ZERO).minus(self)
    }
}

impl<B: Base> From<B> for Doublet<B> {
    #[inline(always)]
    fn from(value: B) -> Self {
        Self::new(value)
    }
}

impl<B: Base> PartialOrd for Doublet<B> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Base> Ord for Doublet<B> {
    /// Compares the high halves under `B`'s signedness, then the low halves
    /// as unsigned.
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_i8(doublet: Doublet<i8>) -> i16 {
        let (low, high) = doublet.into_parts();
        ((high as i16) << 8) | low as i16
    }

    fn wide_u8(doublet: Doublet<u8>) -> u16 {
        let (low, high) = doublet.into_parts();
        ((high as u16) << 8) | low as u16
    }

    fn from_i16(value: i16) -> Doublet<i8> {
        Doublet::from_parts(value as u8, (value >> 8) as i8)
    }

    #[test]
    fn test_new_sign_extends() {
        assert_eq!(Doublet::new(-1i8).into_parts(), (0xFF, -1));
        assert_eq!(Doublet::new(5i8).into_parts(), (5, 0));
        assert_eq!(Doublet::new(200u8).into_parts(), (200, 0));
        assert_eq!(Doublet::from(-128i8).into_parts(), (0x80, -1));
        for v in i8::MIN..=i8::MAX {
            let high = if v < 0 { -1 } else { 0 };
            assert_eq!(Doublet::new(v).into_parts(), (v as u8, high));
        }
        for v in 0..=u8::MAX {
            assert_eq!(Doublet::new(v).into_parts(), (v, 0));
        }
    }

    #[test]
    fn test_plus_minus_signed_against_i16() {
        let samples = [
            i16::MIN,
            -30000,
            -257,
            -256,
            -1,
            0,
            1,
            255,
            256,
            30000,
            i16::MAX,
        ];
        for &a in &samples {
            for &b in &samples {
                let (sum, overflow) = a.overflowing_add(b);
                let result = from_i16(a).plus(from_i16(b));
                assert_eq!((wide_i8(result.value()), result.error()), (sum, overflow));

                let (difference, overflow) = a.overflowing_sub(b);
                let result = from_i16(a).minus(from_i16(b));
                assert_eq!(
                    (wide_i8(result.value()), result.error()),
                    (difference, overflow)
                );
            }
        }
    }

    #[test]
    fn test_plus_minus_unsigned() {
        let max = Doublet::from_parts(u8::MAX, u8::MAX);
        let one = Doublet::new(1u8);
        let wrapped = max.plus(one);
        assert_eq!((wide_u8(wrapped.value()), wrapped.error()), (0, true));
        let borrowed = Doublet::new(0u8).minus(one);
        assert_eq!(
            (wide_u8(borrowed.value()), borrowed.error()),
            (u16::MAX, true)
        );
        let carried = Doublet::new(0xFFu8).plus(one);
        assert_eq!((wide_u8(carried.value()), carried.error()), (0x100, false));
    }

    #[test]
    fn test_negated() {
        assert_eq!(Doublet::new(0u8).negated().error(), false);
        assert_eq!(Doublet::new(1u8).negated().error(), true);
        let min = from_i16(i16::MIN);
        assert_eq!(min.negated().components(), (min, true));
        let negated = from_i16(-300).negated();
        assert_eq!((wide_i8(negated.value()), negated.error()), (300, false));
    }

    #[test]
    fn test_order_is_numeric() {
        let mut values: Vec<i16> = vec![0, -1, 1, i16::MIN, i16::MAX, -256, 255, 256, -257];
        let mut doublets: Vec<Doublet<i8>> = values.iter().map(|&v| from_i16(v)).collect();
        values.sort();
        doublets.sort();
        let round_trip: Vec<i16> = doublets.into_iter().map(wide_i8).collect();
        assert_eq!(round_trip, values);
    }
}
