//! Which arrays an operation touches.

use std::fmt;

/// Interpolation-grid deposition buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Deposit {
    /// The current vector `J`.
    Current,
    /// The charge density `rho`.
    Charge,
    /// Both.
    #[default]
    All,
}

impl Deposit {
    /// Whether `J` is included.
    pub fn current(self) -> bool {
        matches!(self, Self::Current | Self::All)
    }

    /// Whether `rho` is included.
    pub fn charge(self) -> bool {
        matches!(self, Self::Charge | Self::All)
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "J"),
            Self::Charge => write!(f, "rho"),
            Self::All => write!(f, "J+rho"),
        }
    }
}

/// Spectral-grid field selected by [`SpectralFilter`](crate::SpectralFilter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpectralTarget {
    /// Electric field vector.
    E,
    /// Magnetic field vector.
    B,
    /// Current vector.
    J,
    /// Charge density at the start of the step.
    RhoPrev,
    /// Charge density at the end of the step.
    RhoNext,
}

impl SpectralTarget {
    /// Every target.
    pub const ALL: [SpectralTarget; 5] = [Self::E, Self::B, Self::J, Self::RhoPrev, Self::RhoNext];
}

impl fmt::Display for SpectralTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::E => write!(f, "E"),
            Self::B => write!(f, "B"),
            Self::J => write!(f, "J"),
            Self::RhoPrev => write!(f, "rho_prev"),
            Self::RhoNext => write!(f, "rho_next"),
        }
    }
}
