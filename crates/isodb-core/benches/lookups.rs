use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let countries = isodb_core::countries().unwrap();
    // Warm the indices so the benches measure lookup, not the first build.
    countries.find(&[("alpha_2", "DE")]).unwrap();
    countries.find(&[("name", "Germany")]).unwrap();

    c.bench_function("find alpha_2 (indexed)", |b| {
        b.iter(|| countries.find(black_box(&[("alpha_2", "DE")])).unwrap())
    });

    c.bench_function("get with two criteria (scan)", |b| {
        b.iter(|| {
            countries
                .get(black_box(&[("alpha_2", "DE"), ("numeric", "276")]))
                .unwrap()
        })
    });

    c.bench_function("search name substring", |b| {
        b.iter(|| countries.search(black_box(&[("name", "Island")])).unwrap())
    });

    c.bench_function("by_numeric sorted view", |b| {
        b.iter(|| countries.by_numeric())
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
