//! Per-cell vector values in the two field bases, and component names.
//!
//! The interpolation grid stores vectors in the physical cylindrical basis
//! ([`Cylindrical`]); the spectral grid stores them in the
//! circular-polarization basis ([`Circular`]). They are distinct types with
//! no conversion between them: only the external spectral transform may
//! bridge the two.

use crate::{Complex64, I};
use std::ops::{Add, Mul, Sub};

/// A complex 3-vector in the cylindrical `(r, θ, z)` basis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cylindrical {
    /// Radial component.
    pub r: Complex64,
    /// Azimuthal component.
    pub t: Complex64,
    /// Longitudinal component.
    pub z: Complex64,
}

/// A complex 3-vector in the circular-polarization `(p, m, z)` basis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circular {
    /// `+` polarization component.
    pub p: Complex64,
    /// `−` polarization component.
    pub m: Complex64,
    /// Longitudinal component.
    pub z: Complex64,
}

macro_rules! impl_vector_ops {
    ($ty:ident { $a:ident, $b:ident, $c:ident }) => {
        impl $ty {
            /// Construct from three components.
            pub fn new($a: Complex64, $b: Complex64, $c: Complex64) -> Self {
                Self { $a, $b, $c }
            }

            /// The zero vector.
            pub fn zero() -> Self {
                Self::default()
            }

            /// Multiply every component by a real factor in place.
            pub fn scale(&mut self, factor: f64) {
                self.$a *= factor;
                self.$b *= factor;
                self.$c *= factor;
            }

            /// Components in declaration order.
            pub fn components(&self) -> [Complex64; 3] {
                [self.$a, self.$b, self.$c]
            }

            /// Whether every component is finite.
            pub fn is_finite(&self) -> bool {
                self.$a.is_finite() && self.$b.is_finite() && self.$c.is_finite()
            }
        }

        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self {
                    $a: self.$a + rhs.$a,
                    $b: self.$b + rhs.$b,
                    $c: self.$c + rhs.$c,
                }
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self {
                    $a: self.$a - rhs.$a,
                    $b: self.$b - rhs.$b,
                    $c: self.$c - rhs.$c,
                }
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self {
                    $a: self.$a * rhs,
                    $b: self.$b * rhs,
                    $c: self.$c * rhs,
                }
            }
        }
    };
}

impl_vector_ops!(Cylindrical { r, t, z });
impl_vector_ops!(Circular { p, m, z });

impl Circular {
    /// Spectral divergence `kr (p − m) + i kz z`.
    pub fn divergence(&self, kr: f64, kz: f64) -> Complex64 {
        kr * (self.p - self.m) + I * kz * self.z
    }

    /// `2|p|² + 2|m|² + |z|²`, which equals `|r|² + |θ|² + |z|²` of the
    /// same vector expressed in the cylindrical basis.
    pub fn weighted_norm_sqr(&self) -> f64 {
        2.0 * self.p.norm_sqr() + 2.0 * self.m.norm_sqr() + self.z.norm_sqr()
    }
}

/// Named arrays of a spectral mode, used for gather/scatter and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SpectralComponent {
    Ep,
    Em,
    Ez,
    Bp,
    Bm,
    Bz,
    Jp,
    Jm,
    Jz,
    RhoPrev,
    RhoNext,
}

impl SpectralComponent {
    /// Every spectral component, in storage order.
    pub const ALL: [SpectralComponent; 11] = [
        Self::Ep,
        Self::Em,
        Self::Ez,
        Self::Bp,
        Self::Bm,
        Self::Bz,
        Self::Jp,
        Self::Jm,
        Self::Jz,
        Self::RhoPrev,
        Self::RhoNext,
    ];

    /// Conventional array name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ep => "Ep",
            Self::Em => "Em",
            Self::Ez => "Ez",
            Self::Bp => "Bp",
            Self::Bm => "Bm",
            Self::Bz => "Bz",
            Self::Jp => "Jp",
            Self::Jm => "Jm",
            Self::Jz => "Jz",
            Self::RhoPrev => "rho_prev",
            Self::RhoNext => "rho_next",
        }
    }
}

/// Named arrays of an interpolation-grid mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum InterpComponent {
    Er,
    Et,
    Ez,
    Br,
    Bt,
    Bz,
    Jr,
    Jt,
    Jz,
    Rho,
}

impl InterpComponent {
    /// Every interpolation component, in storage order.
    pub const ALL: [InterpComponent; 10] = [
        Self::Er,
        Self::Et,
        Self::Ez,
        Self::Br,
        Self::Bt,
        Self::Bz,
        Self::Jr,
        Self::Jt,
        Self::Jz,
        Self::Rho,
    ];

    /// Conventional array name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Er => "Er",
            Self::Et => "Et",
            Self::Ez => "Ez",
            Self::Br => "Br",
            Self::Bt => "Bt",
            Self::Bz => "Bz",
            Self::Jr => "Jr",
            Self::Jt => "Jt",
            Self::Jz => "Jz",
            Self::Rho => "rho",
        }
    }

    /// Whether particles deposit into this array.
    pub fn is_deposit(self) -> bool {
        matches!(self, Self::Jr | Self::Jt | Self::Jz | Self::Rho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn scale_touches_every_component() {
        let mut v = Cylindrical::new(c(1.0, 2.0), c(-3.0, 0.5), c(0.0, 4.0));
        v.scale(2.0);
        assert_eq!(v.components(), [c(2.0, 4.0), c(-6.0, 1.0), c(0.0, 8.0)]);
    }

    #[test]
    fn divergence_of_longitudinal_vector() {
        // g = (kr/2, -kr/2, -i kz) has divergence kr² + kz².
        let (kr, kz) = (0.5, 2.0);
        let g = Circular::new(c(0.5 * kr, 0.0), c(-0.5 * kr, 0.0), c(0.0, -kz));
        let div = g.divergence(kr, kz);
        assert!((div - c(kr * kr + kz * kz, 0.0)).norm() < 1e-14);
    }

    #[test]
    fn weighted_norm_counts_polarizations_twice() {
        let v = Circular::new(c(1.0, 0.0), c(0.0, 1.0), c(2.0, 0.0));
        assert_eq!(v.weighted_norm_sqr(), 2.0 + 2.0 + 4.0);
    }

    #[test]
    fn non_finite_detected() {
        let v = Circular::new(c(f64::NAN, 0.0), c(0.0, 0.0), c(0.0, 0.0));
        assert!(!v.is_finite());
        assert!(Circular::zero().is_finite());
    }

    #[test]
    fn component_names_are_unique() {
        let mut names: Vec<_> = SpectralComponent::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SpectralComponent::ALL.len());
    }

    #[test]
    fn deposit_components_are_current_and_charge() {
        let deposits: Vec<_> = InterpComponent::ALL
            .into_iter()
            .filter(|c| c.is_deposit())
            .map(|c| c.name())
            .collect();
        assert_eq!(deposits, ["Jr", "Jt", "Jz", "rho"]);
    }
}
