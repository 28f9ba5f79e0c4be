// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_provider`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicU64, Ordering};

use understory_provider::{ErasedValue, Fixed, Property, Provider, SharedProvider, from_fn};

fn bench_provider(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Property<f64>={} Property<String>={} ErasedValue={}",
            core::mem::size_of::<Property<f64>>(),
            core::mem::size_of::<Property<String>>(),
            core::mem::size_of::<ErasedValue>(),
        );
    });

    let mut group = c.benchmark_group("provider/read");

    group.bench_function("absent", |b| {
        let prop = Property::<f64>::new();
        b.iter(|| black_box(prop.get_or_none()))
    });

    group.bench_function("fixed", |b| {
        let prop = Property::from(100.0_f64);
        b.iter(|| black_box(prop.get_or_none()))
    });

    group.bench_function("provider/fixed", |b| {
        let mut prop = Property::new();
        prop.set_provider(Fixed::new(100.0_f64));
        b.iter(|| black_box(prop.get_or_none()))
    });

    group.bench_function("provider/from_fn", |b| {
        let counter = Arc::new(AtomicU64::new(0));
        let mut prop = Property::new();
        prop.set_provider(from_fn(move || Some(counter.fetch_add(1, Ordering::Relaxed))));
        b.iter(|| black_box(prop.get_or_none()))
    });

    group.bench_function("provider/chain_8", |b| {
        let mut inner: SharedProvider<f64> = Arc::new(Fixed::new(1.0_f64));
        for _ in 0..8 {
            let next = Arc::clone(&inner);
            inner = Arc::new(from_fn(move || next.get_or_none()));
        }
        let mut prop = Property::new();
        prop.set_shared_provider(inner);
        b.iter(|| black_box(prop.get_or_none()))
    });

    group.finish();

    let mut group = c.benchmark_group("provider/read_string");

    group.bench_function("fixed_clone", |b| {
        let prop = Property::from("hello world hello world hello world".to_string());
        b.iter(|| black_box(prop.get_or_none()))
    });

    group.bench_function("display", |b| {
        let prop = Property::from("hello world".to_string());
        b.iter(|| black_box(prop.to_string()))
    });

    group.finish();

    let mut group = c.benchmark_group("provider/mutate");

    group.bench_function("set/f64", |b| {
        b.iter_batched(
            Property::<f64>::new,
            |mut prop| {
                prop.set(123.0);
                black_box(prop);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_erased/f64", |b| {
        b.iter_batched(
            || (Property::<f64>::new(), ErasedValue::new(123.0_f64)),
            |(mut prop, value)| {
                let _ = black_box(prop.set_erased(value));
                black_box(prop);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_erased/rejected", |b| {
        b.iter_batched(
            || (Property::<f64>::new(), ErasedValue::new(123_u32)),
            |(mut prop, value)| {
                let _ = black_box(prop.set_erased(value));
                black_box(prop);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_provider);
criterion_main!(benches);
