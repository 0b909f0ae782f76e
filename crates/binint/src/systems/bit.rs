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

//! One-bit systems integers.
//!
//! `U1` holds `0` or `1`; `I1` holds `0` or `-1`. Both store a single `bool`
//! bit and follow the same flagged two's-complement rules as the wider
//! primitives, so generic code can treat them as the smallest systems width.

use super::SystemsInteger;
use crate::integer::BinaryInteger;
use binint_core::{
    count::Count, division::Division, doublet::Doublet, fallible::Fallible, nonzero::Nonzero,
    primitive::Base, word::Word,
};
use num_traits::{Bounded, Zero};

/// An unsigned one-bit integer: `0` or `1`.
///
/// # Examples
///
/// ```rust
/// # use binint::{SystemsInteger, U1};
///
/// let one = U1::new(true);
/// assert_eq!(one.plus(one).components(), (U1::new(false), true));
/// assert_eq!(u8::from(one), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct U1(bool);

/// A signed one-bit integer: `0` or `-1`.
///
/// # Examples
///
/// ```rust
/// # use binint::{I1, SystemsInteger};
///
/// let minus_one = I1::new(true);
/// assert!(minus_one < I1::new(false));
/// assert_eq!(minus_one.times(minus_one).components(), (minus_one, true));
/// assert_eq!(i8::from(minus_one), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct I1(bool);

impl U1 {
    /// Creates a value from its bit.
    #[inline(always)]
    pub const fn new(bit: bool) -> Self {
        Self(bit)
    }

    /// Returns the bit.
    #[inline(always)]
    pub const fn bit(self) -> bool {
        self.0
    }
}

impl I1 {
    /// Creates a value from its bit, where `true` is `-1`.
    #[inline(always)]
    pub const fn new(bit: bool) -> Self {
        Self(bit)
    }

    /// Returns the bit, where `true` is `-1`.
    #[inline(always)]
    pub const fn bit(self) -> bool {
        self.0
    }
}

impl PartialOrd for I1 {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for I1 {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.0.cmp(&self.0)
    }
}

impl From<U1> for u8 {
    #[inline(always)]
    fn from(value: U1) -> Self {
        value.0 as u8
    }
}

impl From<I1> for i8 {
    #[inline(always)]
    fn from(value: I1) -> Self {
        -(value.0 as i8)
    }
}

impl std::fmt::Display for U1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl std::fmt::Display for I1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", i8::from(*self))
    }
}

/// Sums three bits with the given weights and returns the parity together
/// with whether the total stays inside `range`.
#[inline(always)]
fn ripple(total: i8, range: std::ops::RangeInclusive<i8>) -> (bool, bool) {
    (total & 1 != 0, !range.contains(&total))
}

impl Base for U1 {
    type Magnitude = U1;

    const SIGNED: bool = false;
    const BITS: u32 = 1;
    const ZERO: Self = U1(false);

    #[inline(always)]
    fn magnitude_bits(self) -> U1 {
        self
    }

    #[inline(always)]
    fn from_magnitude_bits(bits: U1) -> Self {
        bits
    }

    #[inline(always)]
    fn sign_bit(self) -> bool {
        false
    }

    #[inline(always)]
    fn extension(self) -> Self {
        U1(false)
    }

    #[inline(always)]
    fn carrying_plus(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (bit, overflow) = ripple(self.0 as i8 + rhs.0 as i8 + carry as i8, 0..=1);
        (U1(bit), overflow)
    }

    #[inline(always)]
    fn borrowing_minus(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (bit, overflow) = ripple(self.0 as i8 - rhs.0 as i8 - borrow as i8, 0..=1);
        (U1(bit), overflow)
    }
}

impl Base for I1 {
    type Magnitude = U1;

    const SIGNED: bool = true;
    const BITS: u32 = 1;
    const ZERO: Self = I1(false);

    #[inline(always)]
    fn magnitude_bits(self) -> U1 {
        U1(self.0)
    }

    #[inline(always)]
    fn from_magnitude_bits(bits: U1) -> Self {
        I1(bits.0)
    }

    #[inline(always)]
    fn sign_bit(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn extension(self) -> Self {
        self
    }

    #[inline(always)]
    fn carrying_plus(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (bit, overflow) = ripple(carry as i8 - self.0 as i8 - rhs.0 as i8, -1..=0);
        (I1(bit), overflow)
    }

    #[inline(always)]
    fn borrowing_minus(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (bit, overflow) = ripple(rhs.0 as i8 - self.0 as i8 - borrow as i8, -1..=0);
        (I1(bit), overflow)
    }
}

macro_rules! impl_bit_operators {
    ($t:ident) => {
        impl std::ops::Add for $t {
            type Output = $t;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                $t(self.0 ^ rhs.0)
            }
        }

        impl std::ops::BitAnd for $t {
            type Output = $t;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                $t(self.0 & rhs.0)
            }
        }

        impl std::ops::BitOr for $t {
            type Output = $t;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                $t(self.0 | rhs.0)
            }
        }

        impl std::ops::BitXor for $t {
            type Output = $t;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                $t(self.0 ^ rhs.0)
            }
        }

        impl std::ops::Not for $t {
            type Output = $t;

            #[inline(always)]
            fn not(self) -> Self {
                $t(!self.0)
            }
        }

        impl Zero for $t {
            #[inline(always)]
            fn zero() -> Self {
                $t(false)
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                !self.0
            }
        }

        impl BinaryInteger for $t {
            const IS_SIGNED: bool = <$t as Base>::SIGNED;
            const SIZE: Count = Count::new(1);

            #[inline(always)]
            fn appendix(&self) -> bool {
                self.sign_bit()
            }

            #[inline(always)]
            fn body_len(&self) -> usize {
                1
            }

            #[inline]
            fn word(&self, index: usize) -> Word {
                match (index, self.0) {
                    (_, false) => 0,
                    (0, true) if !Self::IS_SIGNED => 1,
                    (_, true) if Self::IS_SIGNED => Word::MAX,
                    _ => 0,
                }
            }

            #[inline]
            fn from_words<I>(words: I, appendix: bool) -> Self
            where
                I: IntoIterator<Item = Word>,
            {
                let first = words.into_iter().next().map_or(appendix, |word| word & 1 != 0);
                $t(first)
            }

            #[inline]
            fn ascending(&self, bit: bool) -> Count {
                Count::new((self.0 == bit) as isize)
            }

            #[inline]
            fn descending(&self, bit: bool) -> Count {
                Count::new((self.0 == bit) as isize)
            }

            #[inline]
            fn count(&self, bit: bool) -> Count {
                Count::new((self.0 == bit) as isize)
            }
        }
    };
}

impl_bit_operators!(U1);
impl_bit_operators!(I1);

impl Bounded for U1 {
    #[inline(always)]
    fn min_value() -> Self {
        U1(false)
    }

    #[inline(always)]
    fn max_value() -> Self {
        U1(true)
    }
}

impl Bounded for I1 {
    #[inline(always)]
    fn min_value() -> Self {
        I1(true)
    }

    #[inline(always)]
    fn max_value() -> Self {
        I1(false)
    }
}

impl SystemsInteger for U1 {
    #[inline(always)]
    fn plus(self, rhs: Self) -> Fallible<Self> {
        Fallible::with_error(U1(self.0 ^ rhs.0), self.0 & rhs.0)
    }

    #[inline(always)]
    fn minus(self, rhs: Self) -> Fallible<Self> {
        Fallible::with_error(U1(self.0 ^ rhs.0), !self.0 & rhs.0)
    }

    #[inline(always)]
    fn times(self, rhs: Self) -> Fallible<Self> {
        Fallible::new(U1(self.0 & rhs.0))
    }

    #[inline(always)]
    fn negated(self) -> Fallible<Self> {
        Fallible::with_error(self, self.0)
    }

    #[inline(always)]
    fn quotient(self, _divisor: Nonzero<Self>) -> Fallible<Self> {
        Fallible::new(self)
    }

    #[inline(always)]
    fn remainder(self, _divisor: Nonzero<Self>) -> Self {
        U1(false)
    }

    #[inline(always)]
    fn division(self, _divisor: Nonzero<Self>) -> Fallible<Division<Self, Self>> {
        Fallible::new(Division::new(self, U1(false)))
    }

    #[inline(always)]
    fn shifted_left(self, distance: u32) -> Fallible<Self> {
        Fallible::with_error(self, distance >= 1)
    }

    #[inline(always)]
    fn shifted_right(self, distance: u32) -> Fallible<Self> {
        Fallible::with_error(self, distance >= 1)
    }

    #[inline(always)]
    fn widening_times(self, rhs: Self) -> Doublet<Self> {
        Doublet::from_parts(U1(self.0 & rhs.0), U1(false))
    }

    #[inline]
    fn division_wide(
        dividend: Doublet<Self>,
        _divisor: Nonzero<Self>,
    ) -> Fallible<Division<Self, Self>> {
        let (low, high) = dividend.into_parts();
        Fallible::with_error(Division::new(low, U1(false)), high.0)
    }
}

impl SystemsInteger for I1 {
    #[inline(always)]
    fn plus(self, rhs: Self) -> Fallible<Self> {
        Fallible::with_error(I1(self.0 ^ rhs.0), self.0 & rhs.0)
    }

    #[inline(always)]
    fn minus(self, rhs: Self) -> Fallible<Self> {
        Fallible::with_error(I1(self.0 ^ rhs.0), !self.0 & rhs.0)
    }

    #[inline(always)]
    fn times(self, rhs: Self) -> Fallible<Self> {
        let product = self.0 & rhs.0;
        Fallible::with_error(I1(product), product)
    }

    #[inline(always)]
    fn negated(self) -> Fallible<Self> {
        Fallible::with_error(self, self.0)
    }

    #[inline(always)]
    fn quotient(self, _divisor: Nonzero<Self>) -> Fallible<Self> {
        Fallible::with_error(self, self.0)
    }

    #[inline(always)]
    fn remainder(self, _divisor: Nonzero<Self>) -> Self {
        I1(false)
    }

    #[inline(always)]
    fn division(self, _divisor: Nonzero<Self>) -> Fallible<Division<Self, Self>> {
        Fallible::with_error(Division::new(self, I1(false)), self.0)
    }

    #[inline(always)]
    fn shifted_left(self, distance: u32) -> Fallible<Self> {
        Fallible::with_error(self, distance >= 1)
    }

    #[inline(always)]
    fn shifted_right(self, distance: u32) -> Fallible<Self> {
        Fallible::with_error(self, distance >= 1)
    }

    #[inline(always)]
    fn widening_times(self, rhs: Self) -> Doublet<Self> {
        Doublet::from_parts(U1(self.0 & rhs.0), I1(false))
    }

    #[inline]
    fn division_wide(
        dividend: Doublet<Self>,
        _divisor: Nonzero<Self>,
    ) -> Fallible<Division<Self, Self>> {
        let (low, high) = dividend.into_parts();
        Fallible::with_error(Division::new(I1(low.0), I1(false)), high.0)
    }
}
