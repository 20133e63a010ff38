use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trailmark_core::{GameConfig, PathGenerator, RandomWalkGenerator};

fn path_gen(c: &mut Criterion) {
    let tiers = [
        ("7x7-d1", GameConfig::default()),
        ("10x10-d2", GameConfig::new((10, 10), 2, 40).unwrap()),
        ("16x16-d1", GameConfig::new((16, 16), 1, 40).unwrap()),
    ];

    let mut group = c.benchmark_group("path_gen");
    for (name, config) in tiers {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            let mut generator = RandomWalkGenerator::new(0xdead_beef);
            b.iter(|| black_box(generator.generate(black_box(config))));
        });
    }
    group.finish();
}

criterion_group!(benches, path_gen);
criterion_main!(benches);
