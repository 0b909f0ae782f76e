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

//! # Primitive Bases
//!
//! Capability traits implemented once per concrete integer width and
//! signedness, selected at compile time. `Base` is the minimal surface a
//! [`Doublet`](crate::doublet::Doublet) limb needs; `Primitive` adds the
//! `num_traits::PrimInt` toolbox and sign/magnitude conversions used by the
//! reciprocal [`Divider`](crate::divider::Divider).
//!
//! ## Highlights
//!
//! - `Magnitude` is the unsigned type of the same width; `magnitude_bits` and
//!   `from_magnitude_bits` reinterpret the bit pattern without changing it.
//! - `carrying_plus` and `borrowing_minus` report overflow under the type's
//!   own signedness, so they chain limb by limb for unsigned types and detect
//!   the final signed overflow for signed ones.
//! - Implementations are generated by macros for `i8`..`i64`, `isize`,
//!   `u8`..`u64` and `usize`.

use crate::{fallible::Fallible, sign::Sign, word::Limb};
use num_traits::PrimInt;

/// A fixed-width binary integer usable as the high limb of a doublet.
pub trait Base: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    /// The unsigned type of the same width.
    type Magnitude: Base;

    /// Whether the type is signed.
    const SIGNED: bool;

    /// The bit width of the type.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// Reinterprets the bit pattern as the unsigned magnitude type.
    fn magnitude_bits(self) -> Self::Magnitude;

    /// Reinterprets an unsigned bit pattern as this type.
    fn from_magnitude_bits(bits: Self::Magnitude) -> Self;

    /// Returns `true` if the type is signed and the top bit is set.
    fn sign_bit(self) -> bool;

    /// Returns the word that extends this value: all ones if it is negative,
    /// zero otherwise.
    fn extension(self) -> Self;

    /// Computes `self + rhs + carry`, wrapping, together with the overflow
    /// flag under this type's signedness.
    fn carrying_plus(self, rhs: Self, carry: bool) -> (Self, bool);

    /// Computes `self - rhs - borrow`, wrapping, together with the overflow
    /// flag under this type's signedness.
    fn borrowing_minus(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Computes `self + rhs`, wrapping.
    #[inline(always)]
    fn wrapping_plus(self, rhs: Self) -> Self {
        self.carrying_plus(rhs, false).0
    }

    /// Computes `self - rhs`, wrapping.
    #[inline(always)]
    fn wrapping_minus(self, rhs: Self) -> Self {
        self.borrowing_minus(rhs, false).0
    }
}

/// A Rust integer primitive with sign/magnitude conversions.
pub trait Primitive: Base<Magnitude: Limb> + PrimInt {
    /// Splits the value into its sign and absolute value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::{primitive::Primitive, sign::Sign};
    ///
    /// assert_eq!((-128i8).sign_and_magnitude(), (Sign::Minus, 128u8));
    /// assert_eq!(200u8.sign_and_magnitude(), (Sign::Plus, 200u8));
    /// ```
    fn sign_and_magnitude(self) -> (Sign, Self::Magnitude);

    /// Builds a value from a sign and an absolute value.
    ///
    /// The error flag is set, and the value wrapped, when the result is not
    /// representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::{primitive::Primitive, sign::Sign};
    ///
    /// assert_eq!(i8::from_sign_and_magnitude(Sign::Minus, 128).components(), (-128, false));
    /// assert_eq!(i8::from_sign_and_magnitude(Sign::Plus, 128).components(), (-128, true));
    /// assert_eq!(u8::from_sign_and_magnitude(Sign::Minus, 1).components(), (255, true));
    /// ```
    fn from_sign_and_magnitude(sign: Sign, magnitude: Self::Magnitude) -> Fallible<Self>;
}

macro_rules! impl_primitive_signed {
    ($t:ty, $u:ty) => {
        impl Base for $t {
            type Magnitude = $u;

            const SIGNED: bool = true;
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;

            #[inline(always)]
            fn magnitude_bits(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_magnitude_bits(bits: $u) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn sign_bit(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn extension(self) -> Self {
                self >> (<$t>::BITS - 1)
            }

            #[inline(always)]
            fn carrying_plus(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (partial, first) = self.overflowing_add(rhs);
                let (sum, second) = partial.overflowing_add(carry as $t);
                (sum, first ^ second)
            }

            #[inline(always)]
            fn borrowing_minus(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (partial, first) = self.overflowing_sub(rhs);
                let (difference, second) = partial.overflowing_sub(borrow as $t);
                (difference, first ^ second)
            }
        }

        impl Primitive for $t {
            #[inline(always)]
            fn sign_and_magnitude(self) -> (Sign, $u) {
                (Sign::from_bit(self < 0), self.unsigned_abs())
            }

            #[inline]
            fn from_sign_and_magnitude(sign: Sign, magnitude: $u) -> Fallible<Self> {
                match sign {
                    Sign::Plus => {
                        let value = magnitude as $t;
                        Fallible::with_error(value, value < 0)
                    }
                    Sign::Minus => {
                        let value = magnitude.wrapping_neg() as $t;
                        Fallible::with_error(value, magnitude != 0 && value >= 0)
                    }
                }
            }
        }
    };
}

macro_rules! impl_primitive_unsigned {
    ($t:ty) => {
        impl Base for $t {
            type Magnitude = $t;

            const SIGNED: bool = false;
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;

            #[inline(always)]
            fn magnitude_bits(self) -> $t {
                self
            }

            #[inline(always)]
            fn from_magnitude_bits(bits: $t) -> Self {
                bits
            }

            #[inline(always)]
            fn sign_bit(self) -> bool {
                false
            }

            #[inline(always)]
            fn extension(self) -> Self {
                0
            }

            #[inline(always)]
            fn carrying_plus(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (partial, first) = self.overflowing_add(rhs);
                let (sum, second) = partial.overflowing_add(carry as $t);
                (sum, first | second)
            }

            #[inline(always)]
            fn borrowing_minus(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (partial, first) = self.overflowing_sub(rhs);
                let (difference, second) = partial.overflowing_sub(borrow as $t);
                (difference, first | second)
            }
        }

        impl Primitive for $t {
            #[inline(always)]
            fn sign_and_magnitude(self) -> (Sign, $t) {
                (Sign::Plus, self)
            }

            #[inline]
            fn from_sign_and_magnitude(sign: Sign, magnitude: $t) -> Fallible<Self> {
                match sign {
                    Sign::Plus => Fallible::new(magnitude),
                    Sign::Minus => Fallible::with_error(magnitude.wrapping_neg(), magnitude != 0),
                }
            }
        }
    };
}

impl_primitive_signed!(i8, u8);
impl_primitive_signed!(i16, u16);
impl_primitive_signed!(i32, u32);
impl_primitive_signed!(i64, u64);
impl_primitive_signed!(isize, usize);

impl_primitive_unsigned!(u8);
impl_primitive_unsigned!(u16);
impl_primitive_unsigned!(u32);
impl_primitive_unsigned!(u64);
impl_primitive_unsigned!(usize);
