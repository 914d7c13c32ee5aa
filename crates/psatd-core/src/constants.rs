//! Physical constants in SI units (CODATA 2018).

/// Speed of light in vacuum, m/s.
pub const C: f64 = 299_792_458.0;

/// Square of the speed of light, m²/s².
pub const C2: f64 = C * C;

/// Vacuum permittivity, F/m.
pub const EPSILON_0: f64 = 8.854_187_812_8e-12;

/// Vacuum permeability, H/m.
pub const MU_0: f64 = 1.256_637_062_12e-6;
