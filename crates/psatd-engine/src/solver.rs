//! The field solver: owns both grids and drives one PSATD step.
//!
//! # Step pipeline
//!
//! | stage | operation |
//! |---|---|
//! | `reset` | zero interpolation-grid `J` and `rho` |
//! | `deposit` | external [`Deposition`] |
//! | `divide_by_volume` | turn deposited sums into densities |
//! | `forward` | external [`SpectralTransform::forward`] into `J`, `rho_next` |
//! | `correct_currents` | charge-conserving projection of `J` (optional) |
//! | `push_eb` | analytic update of `E` and `B` |
//! | `filter` | spectral smoothing (optional) |
//! | `check_finite` | NaN/infinity scan (optional) |
//! | `shift_rho` | `rho_prev := rho_next`, `rho_next := 0` |
//! | `backward` | external [`SpectralTransform::backward`] of `E`, `B` |
//!
//! Every stage runs on mode 0, then mode 1. Metrics record the stages in
//! this order.

use std::time::Instant;

use psatd_core::{GridError, GridShape, Mode};
use psatd_grid::{
    fft_wavenumbers, CoefficientCache, Deposition, FilterWeights, InterpolationGrid,
    SpectralModeGrid, SpectralTransform, Wavenumbers,
};
use psatd_kernel::Backend;
use psatd_kernels::{
    CurrentCorrector, Deposit, FieldPusher, GridResetter, PushOptions, RhoHistoryShifter,
    SpectralFilter, VolumeNormalizer,
};

use crate::checkpoint::GridState;
use crate::config::{ConfigError, FilterMode, SolverConfig};
use crate::diagnostics::scan_non_finite;
use crate::error::{Direction, StepError};
use crate::metrics::StepMetrics;

/// Spectral field solver for azimuthal modes 0 and 1.
///
/// # Examples
///
/// ```
/// use psatd_engine::{SolverConfig, SpectralSolver};
///
/// let config = SolverConfig { nz: 8, nr: 4, ..SolverConfig::default() };
/// let kr: Vec<f64> = (1..=4).map(|i| i as f64 * 1.0e6).collect();
/// let axes = [kr.as_slice(), kr.as_slice()];
/// let mut solver = SpectralSolver::with_radial_axes(config, axes).unwrap();
/// solver.push_fields().unwrap();
/// assert_eq!(solver.step_count(), 0);
/// ```
#[derive(Debug)]
pub struct SpectralSolver {
    config: SolverConfig,
    shape: GridShape,
    interpolation: InterpolationGrid,
    spectral: SpectralModeGrid,
    wavenumbers: [Wavenumbers; 2],
    coeffs: [CoefficientCache; 2],
    filters: [FilterWeights; 2],
    step_count: u64,
    last_metrics: StepMetrics,
}

impl SpectralSolver {
    /// Build a solver from a configuration and the wavenumbers of each
    /// mode (mode 0 first).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid, if a
    /// wavenumber grid does not match `nz × nr`, or if a coefficient is
    /// not finite.
    pub fn new(config: SolverConfig, wavenumbers: [Wavenumbers; 2]) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = config.shape()?;
        for w in &wavenumbers {
            shape.check_same("wavenumbers", w.shape())?;
        }

        let interpolation = InterpolationGrid::new(shape, config.dz, config.dr)?;
        let spectral = SpectralModeGrid::new(shape);
        let coeffs = [
            CoefficientCache::new(&wavenumbers[0], Mode::Zero, config.dt, config.v_galilean)?,
            CoefficientCache::new(&wavenumbers[1], Mode::One, config.dt, config.v_galilean)?,
        ];
        let filters = [0, 1].map(|i| match config.filter {
            FilterMode::Binomial => FilterWeights::binomial(&wavenumbers[i], config.dz, config.dr),
            FilterMode::Off | FilterMode::Custom => FilterWeights::uniform(shape, 1.0),
        });

        log::info!(
            "PSATD solver on {shape} grid: dt={:e}, V={:e}, filter={:?}, backend={}",
            config.dt,
            config.v_galilean,
            config.filter,
            config.backend
        );

        Ok(Self {
            config,
            shape,
            interpolation,
            spectral,
            wavenumbers,
            coeffs,
            filters,
            step_count: 0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Build a solver with `kz = 2π fftfreq(nz, dz)` on both modes and the
    /// given radial wavenumbers (`nr` values per mode, mode 0 first).
    pub fn with_radial_axes(config: SolverConfig, kr: [&[f64]; 2]) -> Result<Self, ConfigError> {
        config.validate()?;
        let kz = fft_wavenumbers(config.nz, config.dz);
        let wavenumbers = [
            Wavenumbers::from_axes(&kz, kr[0])?,
            Wavenumbers::from_axes(&kz, kr[1])?,
        ];
        Self::new(config, wavenumbers)
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Real-space arrays.
    pub fn interpolation(&self) -> &InterpolationGrid {
        &self.interpolation
    }

    /// Real-space arrays, mutable (deposition, custom inverse volumes).
    pub fn interpolation_mut(&mut self) -> &mut InterpolationGrid {
        &mut self.interpolation
    }

    /// Spectral arrays.
    pub fn spectral(&self) -> &SpectralModeGrid {
        &self.spectral
    }

    /// Spectral arrays, mutable (initial conditions, external transform).
    pub fn spectral_mut(&mut self) -> &mut SpectralModeGrid {
        &mut self.spectral
    }

    /// Coefficient cache of one mode.
    pub fn coefficients(&self, mode: Mode) -> &CoefficientCache {
        &self.coeffs[mode.index()]
    }

    /// Wavenumbers of one mode.
    pub fn wavenumbers(&self, mode: Mode) -> &Wavenumbers {
        &self.wavenumbers[mode.index()]
    }

    /// Filter weights of one mode.
    pub fn filter_weights(&self, mode: Mode) -> &FilterWeights {
        &self.filters[mode.index()]
    }

    /// Number of completed calls to [`step`](Self::step).
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Metrics of the most recent completed step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Replace the filter weights of one mode.
    ///
    /// Only takes effect when the configured [`FilterMode`] is not `Off`.
    pub fn set_filter_weights(
        &mut self,
        mode: Mode,
        weights: FilterWeights,
    ) -> Result<(), GridError> {
        self.shape.check_same("filter weights", weights.shape())?;
        self.filters[mode.index()] = weights;
        Ok(())
    }

    // ── Stages ────────────────────────────────────────────────────

    /// Zero the targeted deposition buffers of both modes.
    pub fn reset_deposits(&mut self, target: Deposit) {
        let kernel = GridResetter::new(target);
        for mode in Mode::ALL {
            self.interpolation.apply(mode, &kernel, &self.config.backend);
        }
    }

    /// Multiply the targeted deposition buffers by each mode's inverse
    /// cell volumes.
    pub fn normalize_deposits(&mut self, target: Deposit) {
        for mode in Mode::ALL {
            let kernel = VolumeNormalizer::for_mode(self.interpolation.mode(mode), target);
            self.interpolation.apply(mode, &kernel, &self.config.backend);
        }
    }

    /// Charge-conserving correction of the spectral current.
    pub fn correct_currents(&mut self) -> Result<(), GridError> {
        for mode in Mode::ALL {
            let kernel = CurrentCorrector::new(self.shape, &self.coeffs[mode.index()])?;
            self.spectral.apply(mode, &kernel, &self.config.backend);
        }
        Ok(())
    }

    /// Advance `E` and `B` of both modes by one timestep.
    pub fn push_fields(&mut self) -> Result<(), GridError> {
        let options = PushOptions {
            ptcl_feedback: self.config.ptcl_feedback,
            use_true_rho: self.config.use_true_rho,
        };
        for mode in Mode::ALL {
            let kernel = FieldPusher::new(self.shape, &self.coeffs[mode.index()], options)?;
            self.spectral.apply(mode, &kernel, &self.config.backend);
        }
        Ok(())
    }

    /// Apply the configured filter to every configured target field.
    /// Does nothing when filtering is off.
    pub fn apply_filter(&mut self) -> Result<(), GridError> {
        if self.config.filter == FilterMode::Off {
            return Ok(());
        }
        for mode in Mode::ALL {
            for &target in &self.config.filter_targets {
                let kernel = SpectralFilter::new(self.shape, &self.filters[mode.index()], target)?;
                self.spectral.apply(mode, &kernel, &self.config.backend);
            }
        }
        Ok(())
    }

    /// Move `rho_next` into `rho_prev` and clear `rho_next`.
    pub fn shift_rho(&mut self) {
        for mode in Mode::ALL {
            self.spectral.apply(mode, &RhoHistoryShifter, &self.config.backend);
        }
    }

    /// Fail on the first NaN or infinite spectral value.
    pub fn check_finite(&self) -> Result<(), StepError> {
        for mode in Mode::ALL {
            let found = scan_non_finite(&self.spectral, mode);
            if let Some(first) = found.first() {
                let listed: Vec<String> = found.iter().map(|c| c.to_string()).collect();
                log::warn!(
                    "step {}: non-finite values in {mode}: {}",
                    self.step_count + 1,
                    listed.join(", ")
                );
                return Err(StepError::NonFinite {
                    mode,
                    component: first.component,
                    cell: first.cell,
                });
            }
        }
        Ok(())
    }

    // ── Step ──────────────────────────────────────────────────────

    /// Run one full step with the given collaborators.
    ///
    /// On success the step counter advances and the returned metrics are
    /// also available from [`last_metrics`](Self::last_metrics).
    pub fn step<D, T>(
        &mut self,
        deposition: &mut D,
        transform: &mut T,
    ) -> Result<&StepMetrics, StepError>
    where
        D: Deposition + ?Sized,
        T: SpectralTransform + ?Sized,
    {
        let step_start = Instant::now();
        let mut metrics = StepMetrics {
            step: self.step_count + 1,
            ..StepMetrics::default()
        };

        timed(&mut metrics, "reset", || {
            self.reset_deposits(Deposit::All);
        });

        timed(&mut metrics, "deposit", || {
            for mode in Mode::ALL {
                deposition
                    .deposit(mode, &mut self.interpolation)
                    .map_err(|source| StepError::Deposition { mode, source })?;
            }
            Ok::<(), StepError>(())
        })?;

        timed(&mut metrics, "divide_by_volume", || {
            self.normalize_deposits(Deposit::All);
        });

        timed(&mut metrics, "forward", || {
            for mode in Mode::ALL {
                transform
                    .forward(mode, &self.interpolation, &mut self.spectral)
                    .map_err(|source| StepError::Transform {
                        mode,
                        direction: Direction::Forward,
                        source,
                    })?;
            }
            Ok::<(), StepError>(())
        })?;

        if self.config.ptcl_feedback && self.config.correct_currents {
            timed(&mut metrics, "correct_currents", || self.correct_currents())?;
        }

        timed(&mut metrics, "push_eb", || self.push_fields())?;

        if self.config.filter != FilterMode::Off {
            timed(&mut metrics, "filter", || self.apply_filter())?;
        }

        if self.config.check_finite {
            timed(&mut metrics, "check_finite", || self.check_finite())?;
        }

        timed(&mut metrics, "shift_rho", || {
            self.shift_rho();
        });

        timed(&mut metrics, "backward", || {
            for mode in Mode::ALL {
                transform
                    .backward(mode, &self.spectral, &mut self.interpolation)
                    .map_err(|source| StepError::Transform {
                        mode,
                        direction: Direction::Backward,
                        source,
                    })?;
            }
            Ok::<(), StepError>(())
        })?;

        metrics.total_us = step_start.elapsed().as_micros() as u64;
        self.step_count += 1;
        log::debug!("step {} done in {} us", self.step_count, metrics.total_us);
        self.last_metrics = metrics;
        Ok(&self.last_metrics)
    }

    // ── Checkpoint ────────────────────────────────────────────────

    /// Copy out the evolving state.
    pub fn snapshot(&self) -> GridState {
        GridState {
            step_count: self.step_count,
            spectral: self.spectral.clone(),
            interpolation: self.interpolation.clone(),
        }
    }

    /// Replace the evolving state with a snapshot of the same shape.
    pub fn restore(&mut self, state: GridState) -> Result<(), GridError> {
        state.check_shape(self.shape)?;
        log::info!("restoring solver state at step {}", state.step_count);
        self.step_count = state.step_count;
        self.spectral = state.spectral;
        self.interpolation = state.interpolation;
        Ok(())
    }
}

/// Run `f`, recording its duration under `name`.
fn timed<R>(metrics: &mut StepMetrics, name: &'static str, f: impl FnOnce() -> R) -> R {
    let start = Instant::now();
    let out = f();
    let us = start.elapsed().as_micros() as u64;
    log::trace!("step {}: {name} took {us} us", metrics.step);
    metrics.stage_us.insert(name, us);
    out
}
