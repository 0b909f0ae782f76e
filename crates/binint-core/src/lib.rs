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

//! # Binint Core
//!
//! Primitive building blocks of the binint integer kernel: machine words and
//! limbs, doublets, finite and infinite bit counts, error-flagged results,
//! nonzero proofs and reciprocal dividers. The `binint` crate builds the
//! systems integers, infinite integers and conversions on top of these.
//!
//! ## Modules
//!
//! - `count`: `Count`, a bit count that is either finite or "infinity minus
//!   k", totally ordered in one machine word.
//! - `divider`: `Divider` (reciprocal division of primitives) and
//!   `Divider21` (normalized 2-by-1 limb division).
//! - `division`: the `Division` quotient/remainder pair.
//! - `doublet`: `Doublet`, a value of twice a base width.
//! - `fallible`: `Fallible`, a value paired with an error flag.
//! - `nonzero`: `Nonzero`, a value proven not to be zero.
//! - `primitive`: the `Base` and `Primitive` capability traits implemented
//!   for Rust's integer primitives.
//! - `sign`: the two-valued `Sign`.
//! - `word`: the `Word` alias and the `Limb` trait for multi-word digits.
//!
//! ## Purpose
//!
//! Every arithmetic result in this workspace reports overflow and range
//! errors as data rather than by unwinding, so that numeric pipelines stay
//! branch-light and composable. Only contract violations (a zero passed as a
//! `Nonzero`, an undersized dividend for a 2-by-1 division) panic.

pub mod count;
pub mod divider;
pub mod division;
pub mod doublet;
pub mod fallible;
pub mod nonzero;
pub mod primitive;
pub mod sign;
pub mod word;
