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

//! Ripple-carry addition, schoolbook multiplication, bitwise operations and
//! shifts on infinite integers, plus the operator impls built on them.
//!
//! Every routine works on the two's-complement view of the words extended by
//! the appendix, and reads the result's appendix from the most significant
//! bit of one guard word past the longest operand.

use super::{InfiniteInt, SignednessTag, Words, extension};
use binint_core::{
    fallible::Fallible,
    primitive::Base,
    word::{Limb, Word},
};
use num_traits::Zero;
use smallvec::{SmallVec, smallvec};

const WORD_BITS: usize = Word::BITS as usize;

/// Subtracts `operand`, shifted up by `offset` words, from `words` modulo
/// the length of `words`.
fn subtract_shifted(words: &mut [Word], operand: &[Word], offset: usize) {
    let mut borrow = false;
    for index in offset..words.len() {
        let subtrahend = operand.get(index - offset).copied().unwrap_or(0);
        (words[index], borrow) = words[index].borrowing_minus(subtrahend, borrow);
    }
}

impl<S: SignednessTag> InfiniteInt<S> {
    fn sum(&self, rhs: &Self, subtract: bool) -> Self {
        let length = self.words.len().max(rhs.words.len()) + 1;
        let flip = extension(subtract);
        let mut words = Words::with_capacity(length);
        let mut carry = subtract;
        for index in 0..length {
            let (word, next) = self
                .extended(index)
                .carrying_plus(rhs.extended(index) ^ flip, carry);
            words.push(word);
            carry = next;
        }
        let appendix = words[length - 1].most_significant_bit();
        Self::from_raw_parts(words, appendix)
    }

    /// Computes `self + rhs`.
    ///
    /// Signed sums never fail. Unsigned sums fail when they pass the largest
    /// infinite value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint::{SignedInfinite, UnsignedInfinite};
    /// # use num_traits::{Bounded, One};
    ///
    /// let sum = SignedInfinite::from(u64::MAX).plus(&SignedInfinite::from(1));
    /// assert_eq!(sum.value().words(), &[0, 1]);
    ///
    /// let overflow = UnsignedInfinite::max_value().plus(&UnsignedInfinite::one());
    /// assert!(overflow.error());
    /// ```
    pub fn plus(&self, rhs: &Self) -> Fallible<Self> {
        let sum = self.sum(rhs, false);
        let (a, b, r) = (self.appendix, rhs.appendix, sum.appendix);
        let error = !S::IS_SIGNED && ((a && b) || ((a || b) && !r));
        Fallible::with_error(sum, error)
    }

    /// Computes `self - rhs`.
    ///
    /// Signed differences never fail. Unsigned differences fail when they
    /// drop below zero.
    pub fn minus(&self, rhs: &Self) -> Fallible<Self> {
        let difference = self.sum(rhs, true);
        let (a, b, r) = (self.appendix, rhs.appendix, difference.appendix);
        let error = !S::IS_SIGNED && ((!a && b) || (a == b && r));
        Fallible::with_error(difference, error)
    }

    /// Computes `-self`. Unsigned negation fails for every nonzero value.
    #[inline]
    pub fn negated(&self) -> Fallible<Self> {
        Self::zero().minus(self)
    }

    /// Computes `self * rhs`.
    ///
    /// The product is formed on the raw two's-complement words: the body
    /// product is corrected by the cross terms of each set appendix, so
    /// negative operands never need a magnitude pass. Unsigned products fail
    /// when an infinite value is multiplied by anything but zero or one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint::SignedInfinite;
    ///
    /// let a = SignedInfinite::from(-3);
    /// let b = SignedInfinite::from(i64::MIN);
    /// let product = a.times(&b).value();
    /// assert_eq!(product.words(), &[1usize << 63, 1]);
    /// ```
    pub fn times(&self, rhs: &Self) -> Fallible<Self> {
        let (n, m) = (self.words.len(), rhs.words.len());
        let length = n + m + 1;
        let mut words: Words = smallvec![0; length];

        for (i, &a) in self.words.iter().enumerate() {
            let mut carry = 0;
            for (j, &b) in rhs.words.iter().enumerate() {
                let product = a.multiply_add(b, words[i + j], carry);
                words[i + j] = product.low();
                carry = product.high();
            }
            words[i + m] = carry;
        }

        if self.appendix {
            subtract_shifted(&mut words, &rhs.words, n);
        }
        if rhs.appendix {
            subtract_shifted(&mut words, &self.words, m);
        }
        if self.appendix && rhs.appendix {
            words[n + m] = words[n + m].wrapping_plus(1);
        }

        let appendix = words[length - 1].most_significant_bit();
        let product = Self::from_raw_parts(words, appendix);
        let error = !S::IS_SIGNED
            && ((self.appendix && !rhs.is_zero_or_one())
                || (rhs.appendix && !self.is_zero_or_one()));
        Fallible::with_error(product, error)
    }

    fn bitwise<F>(&self, rhs: &Self, operation: F) -> Self
    where
        F: Fn(Word, Word) -> Word,
    {
        let length = self.words.len().max(rhs.words.len());
        let words = (0..length)
            .map(|index| operation(self.extended(index), rhs.extended(index)))
            .collect::<Words>();
        let appendix = operation(extension(self.appendix), extension(rhs.appendix)) != 0;
        Self::from_raw_parts(words, appendix)
    }

    /// Computes `self & rhs`.
    #[inline]
    pub fn bitwise_and(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a & b)
    }

    /// Computes `self | rhs`.
    #[inline]
    pub fn bitwise_or(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a | b)
    }

    /// Computes `self ^ rhs`.
    #[inline]
    pub fn bitwise_xor(&self, rhs: &Self) -> Self {
        self.bitwise(rhs, |a, b| a ^ b)
    }

    /// Flips every bit, including the appendix.
    #[inline]
    pub fn complement(&self) -> Self {
        let words = self.words.iter().map(|&word| !word).collect::<Words>();
        Self::from_raw_parts(words, !self.appendix)
    }

    /// Shifts left by `distance` bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint::SignedInfinite;
    ///
    /// let value = SignedInfinite::from(-1).shifted_left(68);
    /// assert_eq!(value.words(), &[0, !0xF]);
    /// ```
    pub fn shifted_left(&self, distance: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let (skip, shift) = (distance / WORD_BITS, distance % WORD_BITS);
        let mut words = Words::with_capacity(skip + self.words.len() + 1);
        words.extend(std::iter::repeat_n(0, skip));
        for index in 0..=self.words.len() {
            let word = self.extended(index);
            if shift == 0 {
                words.push(word);
            } else {
                let lower = if index == 0 { 0 } else { self.extended(index - 1) };
                words.push((word << shift) | (lower >> (WORD_BITS - shift)));
            }
        }
        Self::from_raw_parts(words, self.appendix)
    }

    /// Shifts right by `distance` bits, filling with the appendix.
    pub fn shifted_right(&self, distance: usize) -> Self {
        let (skip, shift) = (distance / WORD_BITS, distance % WORD_BITS);
        if skip >= self.words.len() {
            return Self::from_raw_parts(SmallVec::new(), self.appendix);
        }
        let words = (skip..self.words.len())
            .map(|index| {
                let word = self.extended(index);
                if shift == 0 {
                    word
                } else {
                    (word >> shift) | (self.extended(index + 1) << (WORD_BITS - shift))
                }
            })
            .collect::<Words>();
        Self::from_raw_parts(words, self.appendix)
    }
}

macro_rules! forward_binary_operator {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<S: SignednessTag> std::ops::$trait<&InfiniteInt<S>> for &InfiniteInt<S> {
            type Output = InfiniteInt<S>;

            #[inline]
            fn $method(self, rhs: &InfiniteInt<S>) -> InfiniteInt<S> {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl<S: SignednessTag> std::ops::$trait<&InfiniteInt<S>> for InfiniteInt<S> {
            type Output = InfiniteInt<S>;

            #[inline]
            fn $method(self, rhs: &InfiniteInt<S>) -> InfiniteInt<S> {
                std::ops::$trait::$method(&self, rhs)
            }
        }

        impl<S: SignednessTag> std::ops::$trait for InfiniteInt<S> {
            type Output = InfiniteInt<S>;

            #[inline]
            fn $method(self, rhs: InfiniteInt<S>) -> InfiniteInt<S> {
                std::ops::$trait::$method(&self, &rhs)
            }
        }
    };
}

forward_binary_operator!(Add, add, |a, b| a.plus(b).value());
forward_binary_operator!(Sub, sub, |a, b| a.minus(b).value());
forward_binary_operator!(Mul, mul, |a, b| a.times(b).value());
forward_binary_operator!(BitAnd, bitand, |a, b| a.bitwise_and(b));
forward_binary_operator!(BitOr, bitor, |a, b| a.bitwise_or(b));
forward_binary_operator!(BitXor, bitxor, |a, b| a.bitwise_xor(b));

impl<S: SignednessTag> std::ops::Neg for &InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn neg(self) -> InfiniteInt<S> {
        self.negated().value()
    }
}

impl<S: SignednessTag> std::ops::Neg for InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn neg(self) -> InfiniteInt<S> {
        self.negated().value()
    }
}

impl<S: SignednessTag> std::ops::Not for &InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn not(self) -> InfiniteInt<S> {
        self.complement()
    }
}

impl<S: SignednessTag> std::ops::Not for InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn not(self) -> InfiniteInt<S> {
        self.complement()
    }
}

impl<S: SignednessTag> std::ops::Shl<usize> for &InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn shl(self, distance: usize) -> InfiniteInt<S> {
        self.shifted_left(distance)
    }
}

impl<S: SignednessTag> std::ops::Shl<usize> for InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn shl(self, distance: usize) -> InfiniteInt<S> {
        self.shifted_left(distance)
    }
}

impl<S: SignednessTag> std::ops::Shr<usize> for &InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn shr(self, distance: usize) -> InfiniteInt<S> {
        self.shifted_right(distance)
    }
}

impl<S: SignednessTag> std::ops::Shr<usize> for InfiniteInt<S> {
    type Output = InfiniteInt<S>;

    #[inline]
    fn shr(self, distance: usize) -> InfiniteInt<S> {
        self.shifted_right(distance)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        convert,
        infinite::{SignedInfinite, UnsignedInfinite},
        integer::BinaryInteger,
    };
    use num_traits::{Bounded, One, Zero};

    fn wide(value: i128) -> SignedInfinite {
        SignedInfinite::from_words(
            [value as u64 as usize, (value >> 64) as u64 as usize],
            value < 0,
        )
    }

    fn narrow(value: &SignedInfinite) -> i128 {
        convert::exactly::<i64, _>(&value.shifted_right(64)).value() as i128 * (1i128 << 64)
            + (value.word(0) as u64 as i128)
    }

    #[test]
    fn test_self_subtraction_is_canonical_zero() {
        for value in [
            i128::MIN,
            -1,
            0,
            1,
            1 << 100,
            i64::MIN as i128,
            u64::MAX as i128,
        ] {
            let value = wide(value);
            let (difference, error) = value.minus(&value).components();
            assert!(!error);
            assert_eq!(difference, SignedInfinite::zero());
            let (words, appendix) = difference.into_raw_parts();
            assert!(words.is_empty());
            assert!(!appendix);
        }
    }

    #[test]
    fn test_signed_arithmetic_against_i128() {
        let samples = [
            i128::MIN / 2,
            -(1 << 80),
            i64::MIN as i128,
            -65_536,
            -1,
            0,
            1,
            255,
            u64::MAX as i128,
            1 << 90,
            i128::MAX / 2,
        ];
        for &a in &samples {
            for &b in &samples {
                let (x, y) = (wide(a), wide(b));
                assert_eq!(narrow(&x.plus(&y).value()), a + b, "{} + {}", a, b);
                assert_eq!(narrow(&x.minus(&y).value()), a - b, "{} - {}", a, b);
                if let Some(product) = a.checked_mul(b) {
                    assert_eq!(narrow(&x.times(&y).value()), product, "{} * {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_unsigned_flags() {
        let max = UnsignedInfinite::max_value();
        let one = UnsignedInfinite::one();
        let two = UnsignedInfinite::from(2u8);
        let zero = UnsignedInfinite::zero();

        assert!(max.plus(&one).error());
        assert!(!max.plus(&zero).error());
        assert!(max.plus(&max).error());
        assert!(!two.plus(&two).error());

        assert!(zero.minus(&one).error());
        assert!(one.minus(&two).error());
        assert!(one.minus(&max).error());
        assert!(!max.minus(&one).error());
        assert!(!max.minus(&max).error());

        assert!(one.negated().error());
        assert!(!zero.negated().error());

        assert!(max.times(&two).error());
        assert!(!max.times(&one).error());
        assert!(!zero.times(&max).error());
        assert!(!two.times(&two).error());
    }

    #[test]
    fn test_times_against_signed_products() {
        let minus_one = SignedInfinite::from(-1);
        assert_eq!(&minus_one * &minus_one, SignedInfinite::one());
        let big = SignedInfinite::from(u64::MAX);
        let square = &big * &big;
        assert_eq!(square.words(), &[1, usize::MAX - 1]);
        assert!(!square.appendix());
        let negative = &(-&big) * &big;
        assert_eq!(negative, -square);
    }

    #[test]
    fn test_bitwise() {
        let a = SignedInfinite::from(-4);
        let b = SignedInfinite::from(6);
        assert_eq!(&a & &b, SignedInfinite::from(-4 & 6));
        assert_eq!(&a | &b, SignedInfinite::from(-4 | 6));
        assert_eq!(&a ^ &b, SignedInfinite::from(-4 ^ 6));
        assert_eq!(!a.clone(), SignedInfinite::from(3));
        assert_eq!(!UnsignedInfinite::zero(), UnsignedInfinite::max_value());
    }

    #[test]
    fn test_shifts() {
        let one = SignedInfinite::one();
        assert_eq!((&one << 64).words(), &[0, 1]);
        assert_eq!(&(&one << 64) >> 64, one);
        assert_eq!(SignedInfinite::from(-5) >> 1, SignedInfinite::from(-3));
        assert_eq!(SignedInfinite::from(-5) >> 1000, SignedInfinite::from(-1));
        assert_eq!(SignedInfinite::from(5) >> 3, SignedInfinite::zero());
        assert_eq!(SignedInfinite::from(-3) << 2, SignedInfinite::from(-12));
        assert_eq!(SignedInfinite::zero() << 200, SignedInfinite::zero());
        for shift in [0, 1, 31, 63, 64, 65, 100] {
            let value = wide(-0x1234_5678_9ABC_DEF0);
            assert_eq!(
                narrow(&(&value >> shift)),
                -0x1234_5678_9ABC_DEF0i128 >> shift
            );
        }
    }

    #[test]
    fn test_operators_wrap() {
        let max = UnsignedInfinite::max_value();
        assert_eq!(&max + &UnsignedInfinite::one(), UnsignedInfinite::zero());
        assert_eq!(UnsignedInfinite::zero() - UnsignedInfinite::one(), max);
        assert_eq!(-SignedInfinite::from(7), SignedInfinite::from(-7));
    }
}
