// benches/root_enumeration.rs
//! Cost of the exact type E computations
//!
//! Enumeration runs on a fresh ambient space each iteration so the
//! positive-root cache never short-circuits the measurement.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lie_engine::root_system::{dynkin_diagram, AmbientSpace, TypeE};

fn bench_positive_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("Positive_Roots");
    for flavor in TypeE::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(flavor), &flavor, |b, &flavor| {
            b.iter(|| {
                let e = AmbientSpace::for_flavor(flavor);
                black_box(e.positive_roots().len())
            });
        });
    }
    group.finish();
}

fn bench_cached_roots(c: &mut Criterion) {
    let e8 = AmbientSpace::for_flavor(TypeE::E8);
    e8.positive_roots();
    c.bench_function("Cached_Positive_Roots_E8", |b| {
        b.iter(|| black_box(e8.positive_roots().len()))
    });
}

fn bench_weyl_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Weyl_Dimensions");
    group.sample_size(20); // each sample multiplies 120 exact ratios per weight
    for flavor in TypeE::ALL {
        let e = AmbientSpace::for_flavor(flavor);
        let weights = e.fundamental_weights();
        group.bench_with_input(BenchmarkId::from_parameter(flavor), &weights, |b, weights| {
            b.iter(|| {
                for w in weights.values() {
                    black_box(e.weyl_dimension(w));
                }
            });
        });
    }
    group.finish();
}

fn bench_dynkin(c: &mut Criterion) {
    let ct = TypeE::E8.cartan_type();
    c.bench_function("Dynkin_Diagram_E8", |b| {
        b.iter(|| black_box(dynkin_diagram(&ct).map(|g| g.edges().len())))
    });
}

criterion_group!(
    benches,
    bench_positive_roots,
    bench_cached_roots,
    bench_weyl_dimensions,
    bench_dynkin
);
criterion_main!(benches);
