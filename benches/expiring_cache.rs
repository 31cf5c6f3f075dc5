//! Read and write throughput of `ExpiringCache`.
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use pokedex::adapters::cache::ExpiringCache;
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn bench_cache(c: &mut Criterion) {
    let runtime = Runtime::new().expect("build tokio runtime");
    let cache = runtime.block_on(async {
        let cache = ExpiringCache::new(Duration::from_secs(3600), Duration::from_secs(86_400));
        for i in 0..1_000 {
            cache
                .set(
                    format!("translation:yoda:text {i}"),
                    Arc::new(format!("translated {i}")),
                    None,
                )
                .await;
        }
        cache
    });

    c.bench_function("cache/get_typed_hit", |b| {
        b.to_async(&runtime).iter(|| async {
            let value = cache.get_typed::<String>(black_box("translation:yoda:text 500")).await;
            black_box(value);
        });
    });

    c.bench_function("cache/get_miss", |b| {
        b.to_async(&runtime).iter(|| async {
            let value = cache.get(black_box("pokeapi:species:missingno")).await;
            black_box(value);
        });
    });

    c.bench_function("cache/set_overwrite", |b| {
        b.to_async(&runtime).iter(|| async {
            cache
                .set(
                    black_box("pokeapi:species:pikachu"),
                    Arc::new("electric mouse".to_string()),
                    None,
                )
                .await;
        });
    });
}

criterion_group!(benches, bench_cache);
criterion_main!(benches);
