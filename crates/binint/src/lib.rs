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

//! # Binint
//!
//! Fixed-width and arbitrary-precision binary integers over one shared
//! little-endian word layout. Every value reads as a sequence of machine
//! words followed by an infinite run of its appendix bit, which lets the
//! 1-bit types, Rust's primitives and the infinite integers convert into
//! each other through a single code path.
//!
//! ## Modules
//!
//! - `integer`: the `BinaryInteger` trait, the words-plus-appendix view and
//!   bit counting shared by every representation.
//! - `systems`: the `SystemsInteger` trait for fixed widths, implemented for
//!   Rust's integer primitives and the 1-bit `I1`/`U1`, with flagged,
//!   wrapping, saturating and widening arithmetic.
//! - `infinite`: `InfiniteInt` with its `SignedInfinite` and
//!   `UnsignedInfinite` flavors, canonical after every operation.
//! - `convert`: exact, clamping and masking conversions between any two
//!   representations.
//!
//! The primitive vocabulary (`Word`, `Count`, `Doublet`, `Divider`,
//! `Fallible`, ...) lives in `binint_core` and is re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use binint::{BinaryInteger, Nonzero, SignedInfinite, SystemsInteger};
//!
//! let (sum, overflow) = 200u8.plus(100).components();
//! assert_eq!((sum, overflow), (44, true));
//!
//! let big = SignedInfinite::from(u64::MAX) * SignedInfinite::from(u64::MAX);
//! let division = big.division(&Nonzero::new(SignedInfinite::from(u64::MAX))).value();
//! assert_eq!(division.quotient, SignedInfinite::from(u64::MAX));
//!
//! let narrow: u64 = division.quotient.exactly().value();
//! assert_eq!(narrow, u64::MAX);
//! ```

pub mod convert;
pub mod infinite;
pub mod integer;
pub(crate) mod long_division;
pub mod systems;

pub use binint_core;
pub use binint_core::{
    count::Count,
    divider::{Divider, Divider21},
    division::Division,
    doublet::Doublet,
    fallible::{Fallible, Lossy},
    nonzero::Nonzero,
    primitive::{Base, Primitive},
    sign::Sign,
    word::{Limb, Word},
};
pub use convert::Policy;
pub use infinite::{
    InfiniteInt, SignedInfinite, SignedTag, SignednessTag, UnsignedInfinite, UnsignedTag,
};
pub use integer::BinaryInteger;
pub use systems::{I1, SystemsInteger, U1};
