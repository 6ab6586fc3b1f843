// ---------------------------------------------------------------------------
// Physical constants (SI units)
// ---------------------------------------------------------------------------

/// Planck constant [J·s].
pub const H_PLANCK: f64 = 6.62606957e-34;

/// Boltzmann constant [J/K].
pub const K_BOLTZMANN: f64 = 1.3806488e-23;

/// Speed of light in vacuum [m/s].
pub const C_SPEED: f64 = 2.99792458e8;

/// Temperatures with `|T|` at or below this threshold [K] would blow up the
/// `1/T` term and are masked out of the computation instead.
pub const EPSILON: f64 = 0.000001;
