use criterion::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fortuna::angle::spin_target;
use fortuna::drive::FrameDriver;
use fortuna::segment::{Segment, SegmentSet};
use fortuna::select::pick_weighted;
use fortuna::wheel::{SpinTuning, Wheel};

fn benchmark_pick_weighted(c: &mut Criterion) {
    let weights: Vec<f64> = (1..=64).map(f64::from).collect();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("pick_weighted_64", |b| {
        b.iter(|| pick_weighted(black_box(&weights), &mut rng))
    });
}

fn benchmark_spin_target(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("spin_target", |b| {
        b.iter(|| spin_target(black_box(5), 12, 123.4, 6, &mut rng))
    });
}

fn benchmark_driven_spin(c: &mut Criterion) {
    let set =
        SegmentSet::new((0..12).map(|i| Segment::new(format!("prize {i}"))).collect()).unwrap();
    let mut wheel = Wheel::new(set, SpinTuning::default());
    let mut rng = StdRng::seed_from_u64(3);
    let driver = FrameDriver::default();

    c.bench_function("driven_spin", |b| {
        b.iter(|| driver.run(&mut wheel, &mut rng, |_| {}).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_pick_weighted,
    benchmark_spin_target,
    benchmark_driven_spin
);
criterion_main!(benches);
