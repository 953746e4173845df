use cardlet::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_field_tick(c: &mut Criterion) {
    c.bench_function("field_tick_1000", |b| {
        b.iter(|| {
            let mut field =
                SparkleField::new(FieldConfig::default(), Randomness::from_seed(42));
            field.set_bounds(Vec2::new(1920.0, 1080.0));
            for _ in 0..1000 {
                field.tick();
            }
            field.len()
        })
    });

    c.bench_function("burst_frames_mid_flight", |b| {
        let mut rng = Randomness::from_seed(42);
        let burst = Burst::ignite(&CardConfig::default(), &mut rng, 0.0);
        b.iter(|| burst.frames(0.7).len())
    });
}

criterion_group!(benches, bench_field_tick);
criterion_main!(benches);
