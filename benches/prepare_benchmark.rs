//! Benchmark for the end-to-end preparation pipeline

use criterion::{criterion_group, criterion_main, Criterion};
use polars::prelude::*;
use tabprep::pipeline::{prepare_dataset, PrepConfig};

fn synthetic_frame(rows: usize) -> DataFrame {
    let categories = ["alpha", "beta", "gamma", "delta"];

    let id: Vec<i64> = (0..rows).map(|i| i as i64).collect();
    let score: Vec<Option<f64>> = (0..rows)
        .map(|i| {
            if i % 13 == 0 {
                None
            } else {
                Some((i * 37 % 1000) as f64)
            }
        })
        .collect();
    let category: Vec<&str> = (0..rows).map(|i| categories[i % 4]).collect();
    let outcome: Vec<f64> = (0..rows).map(|i| (i * 17 % 1000) as f64).collect();

    df! {
        "id" => id,
        "score" => score,
        "category" => category,
        "outcome" => outcome,
    }
    .unwrap()
}

fn bench_prepare(c: &mut Criterion) {
    let config = PrepConfig::new("outcome", "label").with_drop_columns(["id"]);

    for rows in [1000usize, 10000] {
        let df = synthetic_frame(rows);
        c.bench_function(&format!("prepare_{}_rows", rows), |b| {
            b.iter(|| prepare_dataset(df.clone(), &config).unwrap())
        });
    }
}

criterion_group!(benches, bench_prepare);
criterion_main!(benches);
