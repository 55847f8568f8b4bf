use chrono::TimeZone;
use chrono_tz::Tz;
use criterion::{criterion_group, criterion_main, Criterion};
use period_engine::{resolve, resolve_period, PeriodKey, ResolveOptions};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let tz: Tz = "Europe/Berlin".parse().unwrap();
    let now = tz.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap();
    let options = ResolveOptions::default();

    c.bench_function("resolve_all_keys", |b| {
        b.iter(|| {
            for key in PeriodKey::ALL {
                black_box(resolve(black_box(key), &now, &options));
            }
        })
    });

    c.bench_function("resolve_period_by_token", |b| {
        b.iter(|| black_box(resolve_period(black_box("last-quarter"), &now, &options)))
    });

    c.bench_function("resolve_period_unknown_token", |b| {
        b.iter(|| black_box(resolve_period(black_box("bogus"), &now, &options)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
