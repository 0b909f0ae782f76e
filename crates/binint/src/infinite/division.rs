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

//! Truncating division of infinite integers.
//!
//! Signed values divide their magnitudes and restore signs afterwards: the
//! quotient is negative when exactly one operand is, the remainder takes the
//! dividend's sign. Unsigned values with a set appendix sit above every
//! finite value, which decides most of their cases without any word
//! arithmetic.

use super::{InfiniteInt, SignednessTag, Words};
use crate::long_division;
use binint_core::{
    divider::Divider21, division::Division, fallible::Fallible, nonzero::Nonzero, word::Word,
};
use num_traits::Zero;
use smallvec::{SmallVec, smallvec};

impl<S: SignednessTag> InfiniteInt<S> {
    fn from_magnitude(words: Words, negative: bool) -> Self {
        let magnitude = Self::from_raw_parts(words, false);
        if negative {
            magnitude.negated().value()
        } else {
            magnitude
        }
    }

    fn magnitude_division(&self, divisor: &Self) -> Division<Self, Self> {
        let (dividend, divisor_magnitude) = (self.magnitude(), divisor.magnitude());
        let (quotient, remainder) =
            long_division::divide(dividend.words(), divisor_magnitude.words()).into_parts();
        Division::new(
            Self::from_magnitude(
                SmallVec::from_vec(quotient),
                self.appendix != divisor.appendix,
            ),
            Self::from_magnitude(SmallVec::from_vec(remainder), self.appendix),
        )
    }

    /// Divides `self` by `divisor`, truncating toward zero.
    ///
    /// Signed division never fails. Unsigned division fails only when an
    /// infinite dividend is divided by a finite divisor other than one; the
    /// flagged result is the dividend itself with a zero remainder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint::{Nonzero, SignedInfinite};
    ///
    /// let dividend = SignedInfinite::from(-7);
    /// let division = dividend.division(&Nonzero::new(SignedInfinite::from(2))).value();
    /// assert_eq!(division.quotient, SignedInfinite::from(-3));
    /// assert_eq!(division.remainder, SignedInfinite::from(-1));
    /// ```
    pub fn division(&self, divisor: &Nonzero<Self>) -> Fallible<Division<Self, Self>> {
        let divisor = divisor.value();
        if S::IS_SIGNED {
            return Fallible::new(self.magnitude_division(divisor));
        }
        match (self.appendix, divisor.appendix) {
            (false, false) => Fallible::new(self.magnitude_division(divisor)),
            (false, true) => Fallible::new(Division::new(Self::zero(), self.clone())),
            (true, true) => {
                // Both sit below the infinite maximum by their negations.
                let (lhs, rhs) = (self.negated().value(), divisor.negated().value());
                if lhs <= rhs {
                    let remainder = self.minus(divisor).value();
                    let one = Self::from_magnitude(smallvec![1], false);
                    Fallible::new(Division::new(one, remainder))
                } else {
                    Fallible::new(Division::new(Self::zero(), self.clone()))
                }
            }
            (true, false) => Fallible::with_error(
                Division::new(self.clone(), Self::zero()),
                !divisor.is_zero_or_one(),
            ),
        }
    }

    /// Returns the truncated quotient of `self / divisor`.
    #[inline]
    pub fn quotient(&self, divisor: &Nonzero<Self>) -> Fallible<Self> {
        self.division(divisor).map(|division| division.quotient)
    }

    /// Returns the remainder of `self / divisor`, with the dividend's sign.
    #[inline]
    pub fn remainder(&self, divisor: &Nonzero<Self>) -> Fallible<Self> {
        self.division(divisor).map(|division| division.remainder)
    }

    /// Divides by the positive one-word divisor behind `divider`.
    ///
    /// Agrees with [`InfiniteInt::division`] for the same divisor but reuses
    /// the divider's reciprocal, which pays off when the same word divides
    /// many values (radix conversion, for one).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint::{Divider21, Nonzero, UnsignedInfinite};
    ///
    /// let ten = Divider21::new(Nonzero::new(10usize));
    /// let value = UnsignedInfinite::from(u64::MAX);
    /// let division = value.division_with(&ten).value();
    /// assert_eq!(division.quotient, UnsignedInfinite::from(u64::MAX / 10));
    /// assert_eq!(division.remainder, UnsignedInfinite::from(5u8));
    /// ```
    pub fn division_with(&self, divider: &Divider21<Word>) -> Fallible<Division<Self, Self>> {
        if !S::IS_SIGNED && self.appendix {
            return Fallible::with_error(
                Division::new(self.clone(), Self::zero()),
                divider.divisor() != 1,
            );
        }
        let (mut words, _) = self.magnitude().into_raw_parts();
        let remainder = divider.divide_in_place(&mut words);
        Fallible::new(Division::new(
            Self::from_magnitude(words, self.appendix),
            Self::from_magnitude(smallvec![remainder], self.appendix),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        convert,
        infinite::{SignedInfinite, UnsignedInfinite},
        integer::BinaryInteger,
    };
    use binint_core::{divider::Divider21, nonzero::Nonzero};
    use num_traits::{Bounded, One, Zero};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn signed(value: i128) -> SignedInfinite {
        SignedInfinite::from_words(
            [value as u64 as usize, (value >> 64) as u64 as usize],
            value < 0,
        )
    }

    fn unsigned(value: u128) -> UnsignedInfinite {
        UnsignedInfinite::from_words(
            [value as u64 as usize, (value >> 64) as u64 as usize],
            false,
        )
    }

    fn back(value: &SignedInfinite) -> i128 {
        let high = convert::exactly::<i64, _>(&value.shifted_right(64));
        assert!(!high.error());
        ((high.value() as i128) << 64) | (value.word(0) as u64 as i128)
    }

    #[test]
    fn test_signed_against_i128() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..5_000 {
            let dividend: i128 = rng.random::<i128>() >> rng.random_range(0..127);
            let divisor: i128 = rng.random::<i128>() >> rng.random_range(0..127);
            if divisor == 0 || (dividend == i128::MIN && divisor == -1) {
                continue;
            }
            let (division, error) = signed(dividend)
                .division(&Nonzero::new(signed(divisor)))
                .components();
            assert!(!error);
            assert_eq!(
                back(&division.quotient),
                dividend / divisor,
                "{} / {}",
                dividend,
                divisor
            );
            assert_eq!(
                back(&division.remainder),
                dividend % divisor,
                "{} % {}",
                dividend,
                divisor
            );
        }
    }

    #[test]
    fn test_unsigned_against_u128() {
        let mut rng = StdRng::seed_from_u64(0xD1CE);
        for _ in 0..5_000 {
            let dividend: u128 = rng.random::<u128>() >> rng.random_range(0..128);
            let divisor: u128 = (rng.random::<u128>() >> rng.random_range(0..128)).max(1);
            let division = unsigned(dividend).division(&Nonzero::new(unsigned(divisor)));
            assert!(!division.error());
            let division = division.value();
            assert_eq!(division.quotient, unsigned(dividend / divisor));
            assert_eq!(division.remainder, unsigned(dividend % divisor));
        }
    }

    #[test]
    fn test_division_identity_with_wide_operands() {
        let a = signed(-(1 << 120) + 12345) * signed(i128::MAX);
        let d = signed(-(1 << 70) - 3);
        let division = a.division(&Nonzero::new(d.clone())).value();
        assert_eq!(&(&division.quotient * &d) + &division.remainder, a);
        assert!(division.remainder.magnitude() < d.magnitude());
        assert!(division.remainder.is_zero() || division.remainder.is_negative());
    }

    #[test]
    fn test_unsigned_infinite_cases() {
        let max = UnsignedInfinite::max_value();
        let below = max.minus(&UnsignedInfinite::from(9u8)).value();
        let five = UnsignedInfinite::from(5u8);

        let division = five.division(&Nonzero::new(max.clone()));
        assert_eq!(division.components().0.quotient, UnsignedInfinite::zero());

        let (division, error) = max.division(&Nonzero::new(below.clone())).components();
        assert!(!error);
        assert_eq!(division.quotient, UnsignedInfinite::one());
        assert_eq!(division.remainder, UnsignedInfinite::from(9u8));

        let (division, error) = below.division(&Nonzero::new(max.clone())).components();
        assert!(!error);
        assert_eq!(division.quotient, UnsignedInfinite::zero());
        assert_eq!(division.remainder, below);

        assert!(max.division(&Nonzero::new(five)).error());
        let (division, error) = max.division(&Nonzero::new(UnsignedInfinite::one())).components();
        assert!(!error);
        assert_eq!(division.quotient, max);
        assert!(division.remainder.is_zero());
    }

    #[test]
    fn test_quotient_and_remainder() {
        let divisor = Nonzero::new(SignedInfinite::from(-4));
        assert_eq!(
            SignedInfinite::from(9).quotient(&divisor).value(),
            SignedInfinite::from(-2)
        );
        assert_eq!(
            SignedInfinite::from(9).remainder(&divisor).value(),
            SignedInfinite::one()
        );
    }

    #[test]
    fn test_division_with_matches_division() {
        let mut rng = StdRng::seed_from_u64(0xACE);
        for _ in 0..2_000 {
            let dividend: i128 = rng.random::<i128>() >> rng.random_range(0..127);
            let divisor: usize = (rng.random::<u64>() >> rng.random_range(0..64)).max(1) as usize;
            let divider = Divider21::new(Nonzero::new(divisor));
            let fast = signed(dividend).division_with(&divider).value();
            let slow = signed(dividend)
                .division(&Nonzero::new(SignedInfinite::from(divisor)))
                .value();
            assert_eq!(fast, slow);
        }
    }

    #[test]
    fn test_division_with_infinite_unsigned() {
        let max = UnsignedInfinite::max_value();
        assert!(max.division_with(&Divider21::new(Nonzero::new(3))).error());
        let (division, error) = max.division_with(&Divider21::new(Nonzero::new(1))).components();
        assert!(!error);
        assert_eq!(division.quotient, max);
    }
}
