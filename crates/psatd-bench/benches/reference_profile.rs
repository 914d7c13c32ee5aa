//! Criterion benchmarks for full solver steps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use psatd_bench::{build_solver, reference_profile, stress_profile};
use psatd_core::{Complex64, Cylindrical};
use psatd_engine::SolverConfig;
use psatd_kernel::Backend;
use psatd_test_utils::{MockDeposition, MockTransform};

fn sources() -> MockDeposition {
    MockDeposition::uniform(
        Cylindrical::new(
            Complex64::new(1.0e-12, 0.0),
            Complex64::new(0.0, 1.0e-12),
            Complex64::new(1.0e-12, 0.0),
        ),
        Complex64::new(1.0e-20, 0.0),
    )
}

fn bench_profile(c: &mut Criterion, name: &str, config: SolverConfig) {
    let mut solver = build_solver(config).unwrap();
    let mut dep = sources();
    let mut fft = MockTransform::new();

    // Warm up: one step so the rayon pool is started.
    solver.step(&mut dep, &mut fft).unwrap();

    c.bench_function(name, |b| {
        b.iter(|| {
            let metrics = solver.step(&mut dep, &mut fft).unwrap();
            black_box(metrics.total_us);
        });
    });
}

fn bench_step_reference(c: &mut Criterion) {
    bench_profile(c, "step_256x128_seq", reference_profile(Backend::Sequential));
    bench_profile(c, "step_256x128_par", reference_profile(Backend::Parallel));
}

fn bench_step_stress(c: &mut Criterion) {
    bench_profile(c, "step_1024x256_par", stress_profile(Backend::Parallel));
}

criterion_group!(benches, bench_step_reference, bench_step_stress);
criterion_main!(benches);
