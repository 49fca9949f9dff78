/*
GPL-3.0 License

Copyright (c) 2026 xrd-rs contributors

Based on find_hkl, an XRD pattern calculator for Heusler alloys
Copyright (C) 2018-2023 Patrick R. LeClair
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xrd_rs::{compute_pattern, LatticeConstants, PatternConfig, SpaceGroup};

fn heusler_config(hkl_max: i32) -> PatternConfig {
    let mut config = PatternConfig::new(SpaceGroup::Fm3m, LatticeConstants::cubic(6.0))
        .with_occupant("Co", "c8", 1.0)
        .with_occupant("Fe", "b4", 1.0)
        .with_occupant("Ge", "a4", 1.0);
    config.hkl_max = [hkl_max; 3];
    config
}

fn pattern_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pattern Computation");

    group.bench_function("heusler_hkl_10", |b| {
        let config = heusler_config(10);
        b.iter(|| black_box(compute_pattern(black_box(&config)).unwrap()))
    });

    group.bench_function("heusler_hkl_20", |b| {
        let config = heusler_config(20);
        b.iter(|| black_box(compute_pattern(black_box(&config)).unwrap()))
    });

    group.finish();
}

fn structure_factor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Structure Factors");

    let p = xrd_rs::StructuralParameters::default();
    let sg = SpaceGroup::Fm3m;
    let c8 = sg.site("c8", &p).unwrap();

    group.bench_function("fm3m_c8_sweep", |b| {
        b.iter(|| {
            for h in -10..=10 {
                for k in -10..=10 {
                    black_box(sg.structure_factor(&c8, black_box(h), k, 2));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, pattern_benchmark, structure_factor_benchmark);
criterion_main!(benches);
