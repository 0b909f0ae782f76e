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

//! # Long Division
//!
//! Schoolbook division of little-endian limb sequences, generic over the
//! [`Limb`] type so it can be checked exhaustively with narrow limbs.
//!
//! A single-limb divisor runs through [`Divider21`] in one pass. Longer
//! divisors use normalized long division: the divisor is shifted until its
//! top bit is set, each quotient limb is estimated from the top two
//! remainder limbs with a `Divider21` on the divisor's top limb, refined
//! against the divisor's second limb (at most twice), and corrected by at
//! most one add-back after the multiply-subtract step.

use binint_core::{
    divider::Divider21, division::Division, doublet::Doublet, nonzero::Nonzero, primitive::Base,
    word::Limb,
};

/// Returns `limbs` without its most significant zero limbs.
#[inline]
pub(crate) fn significant<L: Limb>(limbs: &[L]) -> &[L] {
    let length = limbs
        .iter()
        .rposition(|limb| !limb.is_zero())
        .map_or(0, |index| index + 1);
    &limbs[..length]
}

fn shifted_left<L: Limb>(limbs: &[L], shift: usize, spill: bool) -> Vec<L> {
    let mut shifted = Vec::with_capacity(limbs.len() + 1);
    let mut carry = L::zero();
    for &limb in limbs {
        if shift == 0 {
            shifted.push(limb);
        } else {
            shifted.push((limb << shift) | carry);
            carry = limb >> (<L as Base>::BITS as usize - shift);
        }
    }
    if spill {
        shifted.push(carry);
    }
    shifted
}

fn shifted_right<L: Limb>(limbs: &[L], shift: usize) -> Vec<L> {
    if shift == 0 {
        return limbs.to_vec();
    }
    let complement = <L as Base>::BITS as usize - shift;
    (0..limbs.len())
        .map(|index| {
            let high = limbs
                .get(index + 1)
                .map_or(L::zero(), |&limb| limb << complement);
            (limbs[index] >> shift) | high
        })
        .collect()
}

/// Divides `dividend` by `divisor`, truncating.
///
/// Neither input needs to be trimmed; the results are not trimmed either.
///
/// # Panics
///
/// Panics if `divisor` has no nonzero limb.
pub(crate) fn divide<L: Limb>(dividend: &[L], divisor: &[L]) -> Division<Vec<L>, Vec<L>> {
    let divisor = significant(divisor);
    let dividend = significant(dividend);
    assert!(!divisor.is_empty(), "attempt to divide by zero");

    if dividend.len() < divisor.len() {
        return Division::new(Vec::new(), dividend.to_vec());
    }

    if let [single] = divisor {
        let mut quotient = dividend.to_vec();
        let remainder = Divider21::new(Nonzero::new(*single)).divide_in_place(&mut quotient);
        return Division::new(quotient, vec![remainder]);
    }

    let n = divisor.len();
    let m = dividend.len() - n;
    let shift = divisor[n - 1].leading_zeros() as usize;
    let v = shifted_left(divisor, shift, false);
    let mut u = shifted_left(dividend, shift, true);

    let top = v[n - 1];
    let next = v[n - 2];
    let divider = Divider21::new(Nonzero::new(top));
    let mut quotient = vec![L::zero(); m + 1];

    for j in (0..=m).rev() {
        let (u2, u1, u0) = (u[j + n], u[j + n - 1], u[j + n - 2]);

        let (mut estimate, mut rest, mut overflow) = if u2 == top {
            let (rest, overflow) = u1.carrying_plus(top, false);
            (L::max_value(), rest, overflow)
        } else {
            let division = divider.divide(Doublet::from_parts(u1, u2));
            (division.quotient, division.remainder, false)
        };

        while !overflow && estimate.multiplication(next) > Doublet::from_parts(u0, rest) {
            estimate = estimate.wrapping_minus(L::one());
            (rest, overflow) = rest.carrying_plus(top, false);
        }

        let mut borrow = false;
        let mut carry = L::zero();
        for i in 0..n {
            let product = estimate.multiply_add(v[i], carry, L::zero());
            carry = product.high();
            (u[i + j], borrow) = u[i + j].borrowing_minus(product.low(), borrow);
        }
        (u[j + n], borrow) = u[j + n].borrowing_minus(carry, borrow);

        if borrow {
            log::trace!("long division add-back at quotient limb {}", j);
            estimate = estimate.wrapping_minus(L::one());
            let mut carry = false;
            for i in 0..n {
                (u[i + j], carry) = u[i + j].carrying_plus(v[i], carry);
            }
            u[j + n] = u[j + n].wrapping_plus(if carry { L::one() } else { L::zero() });
        }

        quotient[j] = estimate;
    }

    Division::new(quotient, shifted_right(&u[..n], shift))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn to_limbs(value: u64) -> Vec<u8> {
        value.to_le_bytes().to_vec()
    }

    fn from_limbs(limbs: &[u8]) -> u64 {
        assert!(significant(limbs).len() <= 8);
        limbs
            .iter()
            .enumerate()
            .take(8)
            .fold(0, |value, (index, &limb)| {
                value | (limb as u64) << (8 * index)
            })
    }

    fn check(dividend: u64, divisor: u64) {
        let division = divide(&to_limbs(dividend), &to_limbs(divisor));
        assert_eq!(
            from_limbs(&division.quotient),
            dividend / divisor,
            "{} / {}",
            dividend,
            divisor
        );
        assert_eq!(
            from_limbs(&division.remainder),
            dividend % divisor,
            "{} % {}",
            dividend,
            divisor
        );
    }

    #[test]
    fn test_significant() {
        assert_eq!(significant(&[1u8, 0, 2, 0, 0]), &[1, 0, 2]);
        assert_eq!(significant::<u8>(&[0, 0]), &[] as &[u8]);
    }

    #[test]
    fn test_shorter_dividend() {
        let division = divide(&[5u8], &[0, 1]);
        assert_eq!(division.quotient, Vec::<u8>::new());
        assert_eq!(division.remainder, vec![5]);
    }

    #[test]
    fn test_single_limb_divisor() {
        check(0x0123_4567_89AB_CDEF, 0xFB);
        check(u64::MAX, 1);
        check(0, 7);
    }

    #[test]
    fn test_sampled_two_by_two_limbs() {
        for divisor in (0x100u64..=0xFFFF).step_by(0x65) {
            for dividend in (0u64..=0xFFFF).step_by(0x7) {
                check(dividend, divisor);
            }
        }
    }

    #[test]
    fn test_exhaustive_two_by_two_limbs_at_extreme_top_limbs() {
        // Every low limb under the smallest, the two half-range and the
        // largest top limbs, against every two-limb dividend.
        for top in [0x01u64, 0x7F, 0x80, 0xFF] {
            for low in 0..=0xFFu64 {
                let divisor = (top << 8) | low;
                for dividend in 0..=0xFFFFu64 {
                    check(dividend, divisor);
                }
            }
        }
    }

    #[test]
    fn test_dense_three_by_two_limbs_near_divisor() {
        // Top dividend limbs at or just below the normalized divisor's top
        // limb produce the estimates that need refinement and add-back.
        for divisor in 0x8000u64..=0xFFFF {
            let top = divisor >> 8;
            for high in [top - 1, top] {
                for middle in 0..=0xFFu64 {
                    for low in [0x00u64, 0xFF] {
                        check((high << 16) | (middle << 8) | low, divisor);
                    }
                }
            }
        }
    }

    #[test]
    fn test_add_back_edge_cases() {
        // Dividends that make the first estimate one too large.
        check(0x7FFF_8000_0000_0000, 0x8000_0000_0001);
        check(0x8000_0000_0000_0000, 0x8000_0001);
        check(0x0000_8000_0000_FFFF, 0x0000_0001_FFFF);
        check(u64::MAX, 0x0101);
        check(u64::MAX, u64::MAX);
        check(u64::MAX - 1, u64::MAX);
        check(0xFFFE_0000_0000_0000, 0xFFFF_0000_0001);
    }

    #[test]
    fn test_random_u8_limbs() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..50_000 {
            let dividend: u64 = rng.random::<u64>() >> rng.random_range(0..64);
            let divisor: u64 = (rng.random::<u64>() >> rng.random_range(0..64)).max(1);
            check(dividend, divisor);
        }
    }

    #[test]
    fn test_random_u32_limbs_against_u128() {
        let mut rng = StdRng::seed_from_u64(0xBEEF);
        for _ in 0..10_000 {
            let dividend: u128 = rng.random::<u128>() >> rng.random_range(0..128);
            let divisor: u128 = (rng.random::<u128>() >> rng.random_range(0..128)).max(1);
            let limbs = |value: u128| -> Vec<u32> {
                (0..4).map(|index| (value >> (32 * index)) as u32).collect()
            };
            let value = |limbs: &[u32]| -> u128 {
                limbs
                    .iter()
                    .enumerate()
                    .fold(0, |value, (index, &limb)| {
                        value | (limb as u128) << (32 * index)
                    })
            };
            let division = divide(&limbs(dividend), &limbs(divisor));
            assert_eq!(value(&division.quotient), dividend / divisor);
            assert_eq!(value(&division.remainder), dividend % divisor);
        }
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_zero_divisor_panics() {
        let _ = divide(&[1u16], &[0, 0]);
    }
}
