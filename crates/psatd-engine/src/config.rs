//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] is the input for constructing a
//! [`SpectralSolver`](crate::SpectralSolver).
//! [`validate()`](SolverConfig::validate) checks structural invariants at
//! startup; the solver constructor calls it before allocating anything.

use std::error::Error;
use std::fmt;

use psatd_core::constants::C;
use psatd_core::{CoefficientError, GridError, GridShape};
use psatd_kernel::Backend;
use psatd_kernels::SpectralTarget;

// ── FilterMode ─────────────────────────────────────────────────────

/// Spectral filtering applied after the push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// No filtering.
    #[default]
    Off,
    /// `cos²(kz dz/2) cos²(kr dr/2)` smoothing, built from each mode's
    /// wavenumbers.
    Binomial,
    /// Weights supplied per mode through
    /// [`SpectralSolver::set_filter_weights`](crate::SpectralSolver::set_filter_weights).
    /// Until they are set the filter is the identity.
    Custom,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SolverConfig::validate()`] or solver
/// construction.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions, spacings or wavenumber arrays are invalid.
    Grid(GridError),
    /// Coefficient construction failed.
    Coefficient(CoefficientError),
    /// Filtering is enabled but no field is selected.
    NoFilterTargets,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Coefficient(e) => write!(f, "coefficients: {e}"),
            Self::NoFilterTargets => write!(f, "filter enabled with no target fields"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Coefficient(e) => Some(e),
            Self::NoFilterTargets => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<CoefficientError> for ConfigError {
    fn from(e: CoefficientError) -> Self {
        Self::Coefficient(e)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Complete configuration of a field solver.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Longitudinal cell count.
    pub nz: usize,
    /// Radial cell count.
    pub nr: usize,
    /// Longitudinal cell size, m.
    pub dz: f64,
    /// Radial cell size, m.
    pub dr: f64,
    /// Timestep, s.
    pub dt: f64,
    /// Galilean frame velocity along `z`, m/s. Zero for the standard scheme.
    pub v_galilean: f64,
    /// Couple particle sources into the push. Default: true.
    pub ptcl_feedback: bool,
    /// Use the transformed `rho` directly instead of rebuilding it from
    /// `div E` and `div J`. Default: false.
    pub use_true_rho: bool,
    /// Project `J` onto charge conservation before the push. Default: true.
    pub correct_currents: bool,
    /// Post-push spectral filter. Default: [`FilterMode::Off`].
    pub filter: FilterMode,
    /// Fields the filter is applied to. Default: `E` and `B`.
    pub filter_targets: Vec<SpectralTarget>,
    /// Scan the fields for NaN/infinity after each push. Default: true.
    pub check_finite: bool,
    /// Scheduler for all kernels. Default: [`Backend::Parallel`].
    pub backend: Backend,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let dz = 1.0e-7;
        Self {
            nz: 64,
            nr: 32,
            dz,
            dr: 1.0e-7,
            dt: dz / C,
            v_galilean: 0.0,
            ptcl_feedback: true,
            use_true_rho: false,
            correct_currents: true,
            filter: FilterMode::Off,
            filter_targets: vec![SpectralTarget::E, SpectralTarget::B],
            check_finite: true,
            backend: Backend::Parallel,
        }
    }
}

impl SolverConfig {
    /// Validate all structural invariants. First failure wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be non-empty and addressable.
        GridShape::new(self.nz, self.nr)?;
        // 2. Cell sizes finite and positive.
        for (name, value) in [("dz", self.dz), ("dr", self.dr)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GridError::InvalidSpacing { name, value }.into());
            }
        }
        // 3. Timestep finite and positive.
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(CoefficientError::InvalidTimestep { value: self.dt }.into());
        }
        // 4. Frame velocity strictly subluminal.
        if !(self.v_galilean.is_finite() && self.v_galilean.abs() < C) {
            return Err(CoefficientError::SuperluminalFrame {
                velocity: self.v_galilean,
            }
            .into());
        }
        // 5. An enabled filter needs something to act on.
        if self.filter != FilterMode::Off && self.filter_targets.is_empty() {
            return Err(ConfigError::NoFilterTargets);
        }
        Ok(())
    }

    /// Grid shape described by `nz` and `nr`.
    pub fn shape(&self) -> Result<GridShape, GridError> {
        GridShape::new(self.nz, self.nr)
    }
}
