//! Criterion micro-benchmarks for the per-cell kernels on one mode.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use psatd_bench::{radial_wavenumbers, reference_profile};
use psatd_core::Mode;
use psatd_grid::{fft_wavenumbers, CoefficientCache, SpectralMode, Wavenumbers};
use psatd_kernel::{Backend, Parallel, Scheduler, Sequential};
use psatd_kernels::{CurrentCorrector, FieldPusher, PushOptions, RhoHistoryShifter};
use psatd_test_utils::fixtures::{random_spectral_mode, rng};

fn setup() -> (SpectralMode, CoefficientCache) {
    let config = reference_profile(Backend::Sequential);
    let kz = fft_wavenumbers(config.nz, config.dz);
    let kr = radial_wavenumbers(config.nr, config.dr);
    let w = Wavenumbers::from_axes(&kz, &kr).unwrap();
    let cache = CoefficientCache::new(&w, Mode::One, config.dt, config.v_galilean).unwrap();
    let mode = random_spectral_mode(&mut rng(42), Mode::One, w.shape(), 1.0);
    (mode, cache)
}

fn bench_push<S: Scheduler>(c: &mut Criterion, name: &str, scheduler: &S) {
    let (mut mode, cache) = setup();
    let pusher = FieldPusher::new(mode.shape(), &cache, PushOptions::default()).unwrap();
    c.bench_function(name, |b| {
        b.iter(|| {
            mode.apply(&pusher, scheduler);
            black_box(mode.cells()[0].e);
        });
    });
}

fn bench_push_eb(c: &mut Criterion) {
    bench_push(c, "push_eb_32k_seq", &Sequential);
    bench_push(c, "push_eb_32k_par", &Parallel);
}

fn bench_correct_currents(c: &mut Criterion) {
    let (mut mode, cache) = setup();
    let corrector = CurrentCorrector::new(mode.shape(), &cache).unwrap();
    c.bench_function("correct_currents_32k_par", |b| {
        b.iter(|| {
            mode.apply(&corrector, &Parallel);
            black_box(mode.cells()[0].j);
        });
    });
}

fn bench_shift_rho(c: &mut Criterion) {
    let (mut mode, _) = setup();
    c.bench_function("shift_rho_32k_seq", |b| {
        b.iter(|| {
            mode.apply(&RhoHistoryShifter, &Sequential);
            black_box(mode.cells()[0].rho_prev);
        });
    });
}

criterion_group!(
    benches,
    bench_push_eb,
    bench_correct_currents,
    bench_shift_rho
);
criterion_main!(benches);
