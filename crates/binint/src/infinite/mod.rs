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

//! # Infinite Integers
//!
//! An `InfiniteInt` is a little-endian sequence of [`Word`]s followed by an
//! infinite run of its *appendix* bit. With appendix `0` the value is the
//! plain word sequence; with appendix `1` the sequence is extended by
//! all-ones words, which reads as a negative number for
//! [`SignedInfinite`] and as a value beyond every finite one for
//! [`UnsignedInfinite`].
//!
//! ## Canonical form
//!
//! The stored sequence never ends in a word equal to the appendix
//! extension. Every constructor and every operation normalizes its result,
//! so structural equality is value equality and zero is always the empty
//! sequence with appendix `0`.
//!
//! ## Storage
//!
//! Words live in a `SmallVec<[Word; 2]>`: values of up to two words never
//! allocate, larger ones grow by exactly the words their result needs.
//!
//! ## Usage
//!
//! ```rust
//! use binint::{BinaryInteger, SignedInfinite, UnsignedInfinite};
//! use num_traits::{Bounded, Zero};
//!
//! let a = SignedInfinite::from(-5);
//! assert!(a.is_negative());
//! assert_eq!(a.words(), &[!4usize]);
//! assert_eq!((&a - &a), SignedInfinite::zero());
//!
//! let max = UnsignedInfinite::max_value();
//! assert!(max.is_infinite());
//! assert!(max.words().is_empty());
//! ```

mod arithmetic;
mod division;

use crate::integer::BinaryInteger;
use binint_core::{
    count::Count,
    word::{Limb, Word},
};
use num_traits::{Bounded, One, Zero};
use smallvec::{SmallVec, smallvec};
use std::marker::PhantomData;

/// Compile-time signedness of an [`InfiniteInt`].
pub trait SignednessTag:
    Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + Default + Send + Sync + 'static
{
    /// Whether the appendix reads as a sign.
    const IS_SIGNED: bool;

    /// The name used when formatting values.
    const NAME: &'static str;
}

/// Marker for signed infinite integers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SignedTag;

/// Marker for unsigned infinite integers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct UnsignedTag;

impl SignednessTag for SignedTag {
    const IS_SIGNED: bool = true;
    const NAME: &'static str = "SignedInfinite";
}

impl SignednessTag for UnsignedTag {
    const IS_SIGNED: bool = false;
    const NAME: &'static str = "UnsignedInfinite";
}

/// An arbitrary-precision signed integer.
pub type SignedInfinite = InfiniteInt<SignedTag>;

/// An arbitrary-precision unsigned integer, including infinite values.
pub type UnsignedInfinite = InfiniteInt<UnsignedTag>;

pub(crate) type Words = SmallVec<[Word; 2]>;

/// Words plus an appendix bit, kept in canonical form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct InfiniteInt<S: SignednessTag> {
    words: Words,
    appendix: bool,
    signedness: PhantomData<S>,
}

#[inline(always)]
pub(crate) const fn extension(appendix: bool) -> Word {
    if appendix { Word::MAX } else { 0 }
}

impl<S: SignednessTag> InfiniteInt<S> {
    /// Creates a value from words and an appendix, normalizing the words.
    #[inline]
    pub fn from_raw_parts(words: SmallVec<[Word; 2]>, appendix: bool) -> Self {
        let mut value = Self {
            words,
            appendix,
            signedness: PhantomData,
        };
        value.normalize();
        value
    }

    /// Returns the canonical word sequence.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Decomposes the value into its words and appendix.
    #[inline]
    pub fn into_raw_parts(self) -> (SmallVec<[Word; 2]>, bool) {
        (self.words, self.appendix)
    }

    /// Trims trailing words equal to the appendix extension.
    fn normalize(&mut self) {
        let extension = extension(self.appendix);
        while self.words.last() == Some(&extension) {
            self.words.pop();
        }
    }

    /// Returns the word at `index`, extended past the body.
    #[inline(always)]
    pub(crate) fn extended(&self, index: usize) -> Word {
        self.words
            .get(index)
            .copied()
            .unwrap_or(extension(self.appendix))
    }

    /// Returns `true` if the value is zero or one.
    #[inline]
    pub(crate) fn is_zero_or_one(&self) -> bool {
        !self.appendix && matches!(self.words.as_slice(), [] | [1])
    }

    /// Returns the absolute value.
    ///
    /// Infinite unsigned values are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint::{SignedInfinite, UnsignedInfinite};
    ///
    /// assert_eq!(SignedInfinite::from(-7).magnitude(), UnsignedInfinite::from(7u8));
    /// assert_eq!(SignedInfinite::from(i64::MIN).magnitude(), UnsignedInfinite::from(1u64 << 63));
    /// ```
    pub fn magnitude(&self) -> UnsignedInfinite {
        if S::IS_SIGNED && self.appendix {
            let (words, appendix) = self.negated().value().into_raw_parts();
            UnsignedInfinite::from_raw_parts(words, appendix)
        } else {
            UnsignedInfinite::from_raw_parts(self.words.clone(), self.appendix)
        }
    }
}

impl<S: SignednessTag> BinaryInteger for InfiniteInt<S> {
    const IS_SIGNED: bool = S::IS_SIGNED;
    const SIZE: Count = Count::INFINITY;

    #[inline(always)]
    fn appendix(&self) -> bool {
        self.appendix
    }

    #[inline(always)]
    fn body_len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    fn word(&self, index: usize) -> Word {
        self.extended(index)
    }

    fn from_words<I>(words: I, appendix: bool) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        Self::from_raw_parts(words.into_iter().collect::<Words>(), appendix)
    }

    fn ascending(&self, bit: bool) -> Count {
        let mut run = 0usize;
        for &word in &self.words {
            let length = Limb::ascending(word, bit);
            run += length as usize;
            if length != Word::BITS {
                return Count::new(run as isize);
            }
        }
        if self.appendix == bit {
            Count::INFINITY
        } else {
            Count::new(run as isize)
        }
    }

    fn descending(&self, bit: bool) -> Count {
        if self.appendix != bit {
            return Count::ZERO;
        }
        match self.words.last() {
            None => Count::INFINITY,
            Some(&top) => {
                let body = self.words.len() * Word::BITS as usize;
                let below = body - Limb::descending(top, bit) as usize;
                Count::INFINITY.minus(below).value()
            }
        }
    }

    fn count(&self, bit: bool) -> Count {
        if self.appendix == bit {
            let others: usize = self
                .words
                .iter()
                .map(|&word| word.population(!bit) as usize)
                .sum();
            Count::INFINITY.minus(others).value()
        } else {
            let matches: usize = self
                .words
                .iter()
                .map(|&word| word.population(bit) as usize)
                .sum();
            Count::new(matches as isize)
        }
    }
}

impl<S: SignednessTag> PartialOrd for InfiniteInt<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: SignednessTag> Ord for InfiniteInt<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        if self.appendix != other.appendix {
            // A set appendix is negative when signed and infinite when not.
            return if S::IS_SIGNED == self.appendix {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        let length = self.words.len().max(other.words.len());
        (0..length)
            .rev()
            .map(|index| self.extended(index).cmp(&other.extended(index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<S: SignednessTag> std::fmt::Debug for InfiniteInt<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:x?}, appendix: {})",
            S::NAME,
            self.words.as_slice(),
            self.appendix as u8
        )
    }
}

impl<S: SignednessTag> Default for InfiniteInt<S> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: SignednessTag> Zero for InfiniteInt<S> {
    #[inline]
    fn zero() -> Self {
        Self {
            words: SmallVec::new(),
            appendix: false,
            signedness: PhantomData,
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.words.is_empty() && !self.appendix
    }
}

impl<S: SignednessTag> One for InfiniteInt<S> {
    #[inline]
    fn one() -> Self {
        Self::from_raw_parts(smallvec![1], false)
    }
}

impl Bounded for UnsignedInfinite {
    #[inline]
    fn min_value() -> Self {
        Self::zero()
    }

    /// The infinite value with every bit set.
    #[inline]
    fn max_value() -> Self {
        Self::from_raw_parts(SmallVec::new(), true)
    }
}

macro_rules! impl_from_primitive {
    ($tag:ty; $($t:ty),*) => {
        $(
            impl From<$t> for InfiniteInt<$tag> {
                #[inline]
                fn from(value: $t) -> Self {
                    crate::convert::truncating(&value)
                }
            }
        )*
    };
}

impl_from_primitive!(SignedTag; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_from_primitive!(UnsignedTag; u8, u16, u32, u64, usize);
