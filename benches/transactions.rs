// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for transaction command throughput.

use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rubidiumdb::{Database, DatabaseConfig, IsolationLevel};

fn bench_begin(c: &mut Criterion) {
    let db = Database::new();

    c.bench_function("txn::begin", |b| {
        b.iter_batched(
            || db.connection(),
            |mut conn| black_box(conn.begin()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_get(c: &mut Criterion) {
    let db = Database::new();
    let mut writer = db.connection();
    writer.begin();
    writer.set("hot", "value");
    writer.commit().unwrap();

    let mut reader = db.connection();
    reader.begin();

    c.bench_function("txn::get", |b| {
        b.iter(|| black_box(reader.get("hot").unwrap()))
    });
}

fn bench_set(c: &mut Criterion) {
    let db = Database::new();
    let mut conn = db.connection();
    conn.begin();

    let counter = AtomicU64::new(0);

    c.bench_function("txn::set", |b| {
        b.iter(|| {
            let i = counter.fetch_add(1, Ordering::Relaxed);
            black_box(conn.set(format!("key{}", i), "value"))
        })
    });
}

fn bench_commit(c: &mut Criterion) {
    let db = Database::with_config(
        DatabaseConfig::default().with_default_isolation(IsolationLevel::Snapshot),
    );

    let counter = AtomicU64::new(0);

    c.bench_function("txn::commit", |b| {
        b.iter_batched(
            || {
                let i = counter.fetch_add(1, Ordering::Relaxed);
                let mut conn = db.connection();
                conn.begin();
                conn.set(format!("key{}", i), "value");
                conn
            },
            |mut conn| conn.commit().unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_begin, bench_get, bench_set, bench_commit);
criterion_main!(benches);
