//! Benchmark – parsing, array growth and the full input pipeline
#![allow(missing_docs)]

use std::{io, io::Cursor, time::Duration};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use drillkit::{DynArray, IntInput, NextInt, parse_int};

/// Deterministic script of `lines` integer lines, every tenth one preceded by
/// a line the parser rejects.
fn make_script(lines: usize) -> String {
    let mut s = String::new();
    for i in 0..lines {
        if i % 10 == 0 {
            s.push_str("oops\n");
        }
        let n = i32::try_from(i).unwrap_or(i32::MAX).wrapping_mul(7919).wrapping_sub(1_000_000);
        s.push_str(&n.to_string());
        s.push('\n');
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_int");
    for text in ["7", "-2147483648", "2147483647", "12a", "99999999999999999999"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text.as_bytes(), |b, t| {
            b.iter(|| black_box(parse_int(black_box(t))));
        });
    }
    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("dyn_array_push");
    for &n in &[1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut array = DynArray::new();
                for i in 0..n {
                    array.push(i).unwrap();
                }
                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let script = make_script(10_000);
    c.bench_function("int_input_script", |b| {
        b.iter(|| {
            let mut input = IntInput::new(Cursor::new(script.as_bytes()), io::sink(), io::sink());
            let mut sum = 0i64;
            while let NextInt::Value(n) = input.next_int("") {
                sum += i64::from(n);
            }
            black_box(sum)
        });
    });
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse, bench_push, bench_pipeline }
criterion_main!(benches);
