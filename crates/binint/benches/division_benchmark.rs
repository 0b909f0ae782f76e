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

use binint::{Divider, Divider21, Doublet, Nonzero, SignedInfinite, UnsignedInfinite};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use num_traits::One;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const BATCH: usize = 4096;

fn dividends(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..BATCH).map(|_| rng.random::<u64>()).collect()
}

/// Builds a value of `words` random words.
fn infinite(rng: &mut StdRng, words: usize) -> UnsignedInfinite {
    let mut value = UnsignedInfinite::one();
    for _ in 0..words {
        value = (value << 64usize) + UnsignedInfinite::from(rng.random::<u64>());
    }
    value
}

fn bench_word_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_division");
    group.throughput(Throughput::Elements(BATCH as u64));

    let values = dividends(0x5EED);
    for divisor in [3u64, 10, 1 << 20, 0x1234_5678_9ABC_DEF1] {
        group.bench_with_input(BenchmarkId::new("hardware", divisor), &divisor, |b, &divisor| {
            b.iter(|| {
                values.iter().fold(0u64, |acc, &value| {
                    acc ^ (black_box(value) / black_box(divisor))
                })
            })
        });

        let divider = Divider::new(Nonzero::new(divisor));
        group.bench_with_input(BenchmarkId::new("divider", divisor), &divider, |b, divider| {
            b.iter(|| {
                values.iter().fold(0u64, |acc, &value| {
                    acc ^ divider.quotient(black_box(value))
                })
            })
        });

        let divider = Divider21::new(Nonzero::new(divisor));
        group.bench_with_input(BenchmarkId::new("divider21", divisor), &divider, |b, divider| {
            b.iter(|| {
                values.iter().fold(0u64, |acc, &value| {
                    let dividend = Doublet::from_parts(black_box(value), 0);
                    acc ^ divider.divide(dividend).quotient
                })
            })
        });
    }
    group.finish();
}

fn bench_infinite(c: &mut Criterion) {
    let mut group = c.benchmark_group("infinite");
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for words in [2usize, 8, 32] {
        let a = infinite(&mut rng, words);
        let b = infinite(&mut rng, words);
        group.bench_with_input(
            BenchmarkId::new("times", words),
            &(a.clone(), b.clone()),
            |bench, (a, b)| bench.iter(|| black_box(a).times(black_box(b))),
        );

        let product = &a * &b;
        let divisor = Nonzero::new(b);
        group.bench_with_input(
            BenchmarkId::new("division", words),
            &product,
            |bench, product| bench.iter(|| black_box(product).division(black_box(&divisor))),
        );

        let signed = SignedInfinite::from_raw_parts(product.into_raw_parts().0, true);
        let ten = Divider21::new(Nonzero::new(10usize));
        group.bench_with_input(
            BenchmarkId::new("division_with", words),
            &signed,
            |bench, signed| bench.iter(|| black_box(signed).division_with(black_box(&ten))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_word_division, bench_infinite);
criterion_main!(benches);
