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

//! # Finite and Infinite Counts
//!
//! A `Count` measures bits (sizes, runs of equal bits, populations) of values
//! that may be infinitely long. It packs both kinds into one machine word
//! without a tag bit:
//!
//! - `raw >= 0` is the finite count `raw`.
//! - `raw < 0` is the infinite count "infinity minus deficit", where
//!   `deficit = !raw`. `raw == -1` is exact infinity and `raw == isize::MIN`
//!   is the infinite count with the largest deficit.
//!
//! Reinterpreting `raw` as unsigned yields the total order: every finite
//! count sits below every infinite count, and among infinite counts a
//! smaller deficit is larger.
//!
//! ## Usage
//!
//! ```rust
//! use binint_core::count::Count;
//!
//! assert_eq!(Count::new(0).to_string(), "0");
//! assert_eq!(Count::INFINITY.to_string(), "log2(&0+1)");
//! assert_eq!(Count::new(-4).to_string(), "log2(&0+1)-3");
//! assert!(Count::new(isize::MAX) < Count::new(isize::MIN));
//! ```

use crate::fallible::Fallible;

/// A finite or infinite bit count.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Count {
    raw: isize,
}

impl Count {
    /// The finite count zero.
    pub const ZERO: Count = Count { raw: 0 };

    /// Exact infinity.
    pub const INFINITY: Count = Count { raw: -1 };

    /// Creates a count from its raw encoding. Every raw value is legal.
    #[inline(always)]
    pub const fn new(raw: isize) -> Self {
        Self { raw }
    }

    /// Creates the infinite count `infinity - deficit`.
    ///
    /// A deficit larger than `isize::MAX` saturates at the largest
    /// representable deficit and raises the error flag.
    #[inline]
    pub const fn below_infinity(deficit: usize) -> Fallible<Self> {
        if deficit > isize::MAX as usize {
            Fallible::failure(Self { raw: isize::MIN })
        } else {
            Fallible::new(Self {
                raw: !(deficit as isize),
            })
        }
    }

    /// Returns the raw encoding.
    #[inline(always)]
    pub const fn raw(self) -> isize {
        self.raw
    }

    /// Returns `true` if the count is infinite.
    #[inline(always)]
    pub const fn is_infinite(self) -> bool {
        self.raw < 0
    }

    /// Returns the distance below exact infinity, or `None` for finite counts.
    #[inline]
    pub const fn deficit(self) -> Option<usize> {
        if self.raw < 0 {
            Some(!self.raw as usize)
        } else {
            None
        }
    }

    /// Returns the raw value, flagged as erroneous when the count is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::count::Count;
    ///
    /// assert_eq!(Count::new(12).natural().components(), (12, false));
    /// assert_eq!(Count::new(-5).natural().components(), (-5, true));
    /// ```
    #[inline(always)]
    pub const fn natural(self) -> Fallible<isize> {
        Fallible::with_error(self.raw, self.raw < 0)
    }

    /// Moves the count `k` steps up.
    ///
    /// Finite counts saturate at `isize::MAX` and infinite counts saturate at
    /// exact infinity; saturation raises the error flag. The result never
    /// changes between finite and infinite.
    pub fn plus(self, k: usize) -> Fallible<Self> {
        match self.deficit() {
            None => {
                let room = (isize::MAX - self.raw) as usize;
                if k <= room {
                    Fallible::new(Self::new(self.raw + k as isize))
                } else {
                    Fallible::failure(Self::new(isize::MAX))
                }
            }
            Some(deficit) => match deficit.checked_sub(k) {
                Some(deficit) => Self::below_infinity(deficit),
                None => Fallible::failure(Self::INFINITY),
            },
        }
    }

    /// Moves the count `k` steps down.
    ///
    /// Finite counts saturate at zero and infinite counts saturate at the
    /// largest deficit; saturation raises the error flag. The result never
    /// changes between finite and infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use binint_core::count::Count;
    ///
    /// assert_eq!(Count::INFINITY.minus(3).value(), Count::new(-4));
    /// assert_eq!(Count::new(2).minus(3).components(), (Count::ZERO, true));
    /// ```
    pub fn minus(self, k: usize) -> Fallible<Self> {
        match self.deficit() {
            None => {
                if k <= self.raw as usize {
                    Fallible::new(Self::new(self.raw - k as isize))
                } else {
                    Fallible::failure(Self::ZERO)
                }
            }
            Some(deficit) => match deficit.checked_add(k) {
                Some(deficit) => Self::below_infinity(deficit),
                None => Fallible::failure(Self::new(isize::MIN)),
            },
        }
    }

    #[inline(always)]
    const fn ordinal(self) -> usize {
        self.raw as usize
    }
}

impl From<u32> for Count {
    #[inline(always)]
    fn from(bits: u32) -> Self {
        Self::new(bits as isize)
    }
}

impl PartialOrd for Count {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Count {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.deficit() {
            None => write!(f, "{}", self.raw),
            Some(0) => write!(f, "log2(&0+1)"),
            Some(deficit) => write!(f, "log2(&0+1)-{}", deficit),
        }
    }
}

impl std::fmt::Debug for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Count({})", self)
    }
}
