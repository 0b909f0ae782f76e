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

//! # Reciprocal Dividers
//!
//! Division by a divisor that is reused many times can be replaced by a
//! multiplication with a precomputed reciprocal, a few shifts and at most one
//! correction. This module provides two such dividers:
//!
//! - [`Divider`] divides a primitive by a primitive of the same type using a
//!   "magic number" multiplier on the magnitude, in the manner of round-up
//!   reciprocal division. It produces truncating quotients; the remainder
//!   takes the sign of the dividend.
//! - [`Divider21`] divides a two-limb value by a single limb whose quotient
//!   fits in one limb, using the normalized-reciprocal method of Möller and
//!   Granlund. It is the inner step of multi-word division.
//!
//! ## Motivation
//!
//! Hardware division is an order of magnitude slower than multiplication on
//! most targets, and a 2-by-1 division is not expressible at all without a
//! wider type. Precomputing the reciprocal once amortizes the cost over every
//! subsequent division by the same divisor.
//!
//! ## Usage
//!
//! ```rust
//! use binint_core::{divider::Divider, nonzero::Nonzero};
//!
//! let by_seven = Divider::new(Nonzero::new(7u32));
//! let division = by_seven.divide(100);
//! assert_eq!((division.quotient, division.remainder), (14, 2));
//!
//! let by_minus_three = Divider::new(Nonzero::new(-3i16));
//! assert_eq!(by_minus_three.divide(-7).into_parts(), (2, -1));
//! ```

use crate::{
    division::Division,
    doublet::Doublet,
    nonzero::Nonzero,
    primitive::{Base, Primitive},
    sign::Sign,
    word::Limb,
};
use num_traits::{One, PrimInt, Zero};

/// A precomputed reciprocal for dividing primitives by a fixed divisor.
///
/// The multiplier is zero exactly when the divisor's magnitude is a power of
/// two, in which case division is a plain shift.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Divider<B: Primitive> {
    divisor: B,
    multiplier: B::Magnitude,
    shift: u32,
    increment: bool,
}

impl<B: Primitive> Divider<B> {
    /// Precomputes the reciprocal of `divisor`.
    pub fn new(divisor: Nonzero<B>) -> Self {
        let divisor = divisor.get();
        let (_, magnitude) = divisor.sign_and_magnitude();
        let bits = <B::Magnitude as Base>::BITS;
        let shift = bits - 1 - magnitude.leading_zeros();
        let power = B::Magnitude::one() << shift as usize;

        if magnitude == power {
            return Self {
                divisor,
                multiplier: B::Magnitude::zero(),
                shift,
                increment: false,
            };
        }

        // floor(2^(bits + shift) / magnitude), which fits one limb because
        // magnitude > 2^shift.
        let Division {
            quotient,
            remainder,
        } = B::Magnitude::narrowing_division(
            Doublet::from_parts(B::Magnitude::zero(), power),
            magnitude,
        );
        let error = magnitude.wrapping_minus(remainder);

        let (proposed, increment) = if error < power {
            (quotient, false)
        } else {
            // The multiplier needs one bit more than a limb; the implicit top
            // bit is restored by the add-and-halve step in `quotient_of`.
            let mut proposed = quotient.wrapping_plus(quotient);
            let (twice_remainder, overflow) = remainder.carrying_plus(remainder, false);
            if overflow || twice_remainder >= magnitude {
                proposed = proposed.wrapping_plus(B::Magnitude::one());
            }
            (proposed, true)
        };

        let multiplier = proposed.wrapping_plus(B::Magnitude::one());
        log::trace!(
            "reciprocal of {:?}: multiplier {:?}, shift {}, increment {}",
            divisor,
            multiplier,
            shift,
            increment
        );

        Self {
            divisor,
            multiplier,
            shift,
            increment,
        }
    }

    /// Returns the divisor.
    #[inline(always)]
    pub fn divisor(&self) -> B {
        self.divisor
    }

    /// Returns the magic multiplier; zero for power-of-two magnitudes.
    #[inline(always)]
    pub fn multiplier(&self) -> B::Magnitude {
        self.multiplier
    }

    /// Returns the final right shift.
    #[inline(always)]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Returns `true` if the multiplier carries an implicit extra bit.
    #[inline(always)]
    pub fn increment(&self) -> bool {
        self.increment
    }

    #[inline(always)]
    fn quotient_of(&self, numerator: B::Magnitude) -> B::Magnitude {
        let shift = self.shift as usize;
        if self.multiplier.is_zero() {
            return numerator >> shift;
        }
        let high = numerator.multiplication(self.multiplier).high();
        if self.increment {
            let halved = numerator.wrapping_minus(high) >> 1usize;
            halved.wrapping_plus(high) >> shift
        } else {
            high >> shift
        }
    }

    /// Divides `dividend` by the divisor, truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if the quotient is not representable, which only happens for
    /// the signed minimum divided by minus one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::{divider::Divider, nonzero::Nonzero};
    ///
    /// let divider = Divider::new(Nonzero::new(-7i8));
    /// assert_eq!(divider.divide(-128).into_parts(), (18, -2));
    /// assert_eq!(divider.divide(127).into_parts(), (-18, 1));
    /// ```
    pub fn divide(&self, dividend: B) -> Division<B, B> {
        let (dividend_sign, numerator) = dividend.sign_and_magnitude();
        let (divisor_sign, denominator) = self.divisor.sign_and_magnitude();

        let quotient = self.quotient_of(numerator);
        let remainder = numerator.wrapping_minus(quotient.multiplication(denominator).low());

        let quotient_sign = if dividend_sign == divisor_sign {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let quotient = B::from_sign_and_magnitude(quotient_sign, quotient);
        assert!(!quotient.error(), "attempt to divide with overflow");
        let remainder = B::from_sign_and_magnitude(dividend_sign, remainder).value();

        Division::new(quotient.value(), remainder)
    }

    /// Returns the truncated quotient.
    #[inline]
    pub fn quotient(&self, dividend: B) -> B {
        self.divide(dividend).quotient
    }

    /// Returns the remainder, which takes the sign of the dividend.
    #[inline]
    pub fn remainder(&self, dividend: B) -> B {
        self.divide(dividend).remainder
    }
}

/// A precomputed normalized reciprocal for dividing two limbs by one.
///
/// # Examples
///
/// ```rust
/// # use binint_core::{divider::Divider21, doublet::Doublet, nonzero::Nonzero};
///
/// let divider = Divider21::new(Nonzero::new(10u8));
/// let division = divider.divide(Doublet::from_parts(0xE7, 0x03));
/// assert_eq!(division.into_parts(), (99, 9));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Divider21<L: Limb> {
    divisor: L,
    normalized: L,
    shift: u32,
    reciprocal: L,
}

impl<L: Limb> Divider21<L> {
    /// Precomputes the reciprocal of `divisor`.
    pub fn new(divisor: Nonzero<L>) -> Self {
        let divisor = divisor.get();
        let shift = divisor.leading_zeros();
        let normalized = divisor << shift as usize;
        // floor((2^(2 * bits) - 1) / normalized) - 2^bits
        let reciprocal =
            L::narrowing_division(Doublet::from_parts(L::max_value(), !normalized), normalized)
                .quotient;
        Self {
            divisor,
            normalized,
            shift,
            reciprocal,
        }
    }

    /// Returns the divisor.
    #[inline(always)]
    pub fn divisor(&self) -> L {
        self.divisor
    }

    /// Returns the reciprocal of the normalized divisor.
    #[inline(always)]
    pub fn reciprocal(&self) -> L {
        self.reciprocal
    }

    /// Returns the normalization shift.
    #[inline(always)]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Divides a doublet whose high half is smaller than the divisor.
    #[inline]
    pub fn divide(&self, dividend: Doublet<L>) -> Division<L, L> {
        debug_assert!(
            dividend.high() < self.divisor,
            "Divider21::divide quotient does not fit one limb"
        );
        let (low, high) = dividend.into_parts();
        if self.shift == 0 {
            return self.divide_normalized(high, low);
        }
        let shift = self.shift as usize;
        let spill = <L as Base>::BITS as usize - shift;
        let division = self.divide_normalized((high << shift) | (low >> spill), low << shift);
        Division::new(division.quotient, division.remainder >> shift)
    }

    /// Divides the little-endian limbs in place and returns the remainder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::{divider::Divider21, nonzero::Nonzero};
    ///
    /// let mut limbs = [0x39u8, 0x30]; // 12345
    /// let remainder = Divider21::new(Nonzero::new(100u8)).divide_in_place(&mut limbs);
    /// assert_eq!((limbs, remainder), ([123, 0], 45));
    /// ```
    pub fn divide_in_place(&self, limbs: &mut [L]) -> L {
        let mut remainder = <L as Base>::ZERO;
        for limb in limbs.iter_mut().rev() {
            let division = self.divide(Doublet::from_parts(*limb, remainder));
            *limb = division.quotient;
            remainder = division.remainder;
        }
        remainder
    }

    #[inline(always)]
    fn divide_normalized(&self, high: L, low: L) -> Division<L, L> {
        let divisor = self.normalized;
        let estimate = self.reciprocal.multiplication(high);
        let (fraction, carry) = estimate.low().carrying_plus(low, false);
        let (quotient, _) = estimate.high().carrying_plus(high, carry);
        let mut quotient = quotient.wrapping_plus(L::one());
        let mut remainder = low.wrapping_minus(quotient.multiplication(divisor).low());
        if remainder > fraction {
            quotient = quotient.wrapping_minus(L::one());
            remainder = remainder.wrapping_plus(divisor);
        }
        if remainder >= divisor {
            quotient = quotient.wrapping_plus(L::one());
            remainder = remainder.wrapping_minus(divisor);
        }
        Division::new(quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_divider_exhaustive_u8() {
        for d in 1..=u8::MAX {
            let divider = Divider::new(Nonzero::new(d));
            for n in 0..=u8::MAX {
                assert_eq!(
                    divider.divide(n).into_parts(),
                    (n / d, n % d),
                    "{} / {}",
                    n,
                    d
                );
            }
        }
    }

    #[test]
    fn test_divider_exhaustive_i8() {
        for d in i8::MIN..=i8::MAX {
            if d == 0 {
                continue;
            }
            let divider = Divider::new(Nonzero::new(d));
            for n in i8::MIN..=i8::MAX {
                if n == i8::MIN && d == -1 {
                    continue;
                }
                assert_eq!(
                    divider.divide(n).into_parts(),
                    (n / d, n % d),
                    "{} / {}",
                    n,
                    d
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "attempt to divide with overflow")]
    fn test_divider_min_by_minus_one_panics() {
        let _ = Divider::new(Nonzero::new(-1i8)).divide(i8::MIN);
    }

    #[test]
    fn test_divider_power_of_two_is_shift_only() {
        let divider = Divider::new(Nonzero::new(64u32));
        assert_eq!(divider.multiplier(), 0);
        assert_eq!(divider.shift(), 6);
        assert_eq!(divider.quotient(1000), 15);
        assert_eq!(divider.remainder(1000), 40);

        let divider = Divider::new(Nonzero::new(i16::MIN));
        assert_eq!(divider.multiplier(), 0);
        assert_eq!(divider.divide(i16::MIN).into_parts(), (1, 0));
        assert_eq!(divider.divide(i16::MAX).into_parts(), (0, i16::MAX));
    }

    #[test]
    fn test_divider_accessors() {
        let divider = Divider::new(Nonzero::new(7u8));
        assert_eq!(divider.divisor(), 7);
        assert!(divider.increment());
        let divider = Divider::new(Nonzero::new(3u8));
        assert_eq!((divider.multiplier(), divider.shift()), (171, 1));
        assert!(!divider.increment());
    }

    #[test]
    fn test_divider_random_u16_u32_u64() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..2_000 {
            let d: u16 = rng.random_range(1..=u16::MAX);
            let n: u16 = rng.random();
            assert_eq!(
                Divider::new(Nonzero::new(d)).divide(n).into_parts(),
                (n / d, n % d)
            );

            let d: u32 = rng.random_range(1..=u32::MAX);
            let n: u32 = rng.random();
            assert_eq!(
                Divider::new(Nonzero::new(d)).divide(n).into_parts(),
                (n / d, n % d)
            );

            let d: u64 = rng.random_range(1..=u64::MAX) >> rng.random_range(0..64);
            let n: u64 = rng.random();
            let d = d.max(1);
            assert_eq!(
                Divider::new(Nonzero::new(d)).divide(n).into_parts(),
                (n / d, n % d)
            );
        }
    }

    #[test]
    fn test_divider_random_signed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let d: i32 = rng.random();
            let n: i32 = rng.random();
            if d == 0 || (n == i32::MIN && d == -1) {
                continue;
            }
            assert_eq!(
                Divider::new(Nonzero::new(d)).divide(n).into_parts(),
                (n / d, n % d)
            );

            let d: i64 = rng.random::<i64>() >> rng.random_range(0..63);
            let n: i64 = rng.random();
            if d == 0 || (n == i64::MIN && d == -1) {
                continue;
            }
            assert_eq!(
                Divider::new(Nonzero::new(d)).divide(n).into_parts(),
                (n / d, n % d)
            );
        }
    }

    #[test]
    fn test_divider_edge_divisors_u64() {
        let divisors = [
            1,
            2,
            3,
            7,
            10,
            641,
            u64::MAX / 3,
            (1 << 63) + 1,
            u64::MAX - 1,
            u64::MAX,
        ];
        let dividends = [0, 1, 2, 9, 1 << 32, u64::MAX / 2, u64::MAX - 1, u64::MAX];
        for &d in &divisors {
            let divider = Divider::new(Nonzero::new(d));
            for &n in &dividends {
                assert_eq!(
                    divider.divide(n).into_parts(),
                    (n / d, n % d),
                    "{} / {}",
                    n,
                    d
                );
            }
        }
    }

    #[test]
    fn test_divider21_exhaustive_u8() {
        for d in 1..=u8::MAX {
            let divider = Divider21::new(Nonzero::new(d));
            for high in 0..d {
                for low in 0..=u8::MAX {
                    let n = ((high as u16) << 8) | low as u16;
                    let expected = ((n / d as u16) as u8, (n % d as u16) as u8);
                    let division = divider.divide(Doublet::from_parts(low, high));
                    assert_eq!(division.into_parts(), expected, "{} / {}", n, d);
                }
            }
        }
    }

    #[test]
    fn test_divider21_random_u64() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let d: u64 = (rng.random::<u64>() >> rng.random_range(0..64)).max(1);
            let high: u64 = rng.random_range(0..d);
            let low: u64 = rng.random();
            let n = ((high as u128) << 64) | low as u128;
            let division = Divider21::new(Nonzero::new(d)).divide(Doublet::from_parts(low, high));
            assert_eq!(division.quotient as u128, n / d as u128);
            assert_eq!(division.remainder as u128, n % d as u128);
        }
    }

    #[test]
    fn test_divide_in_place_matches_native() {
        let value = 0x0123_4567_89AB_CDEFu64;
        let mut limbs = value.to_le_bytes();
        let remainder = Divider21::new(Nonzero::new(251u8)).divide_in_place(&mut limbs);
        assert_eq!(u64::from_le_bytes(limbs), value / 251);
        assert_eq!(remainder as u64, value % 251);
    }
}
