//! Blackbody spectral radiance from Planck's radiation law.
//!
//! Two evaluators share one broadcasting pattern: [`radiance_by_wavenumber`]
//! takes spectral positions in m⁻¹, [`radiance_by_wavelength`] in m, and both
//! accept a scalar, vector, or 2-D grid of temperatures in kelvin. The result
//! mirrors the temperature shape, with a trailing spectral axis appended when
//! more than one position was asked for.
//!
//! Everything is SI on both sides of the call: unit conversions (per-micron,
//! per-cm⁻¹, …) are the caller's business.
//!
//! ```
//! use rusty_planck::radiance_by_wavenumber;
//!
//! // 900 cm⁻¹ expressed in SI units, at a typical cloud-top temperature.
//! let rad = radiance_by_wavenumber(90_000.0, 280.0).unwrap();
//! assert!(rad.as_scalar().unwrap() > 0.0);
//! ```
//!
//! Temperatures too close to zero would divide by zero inside the Planck
//! exponent; those entries are masked to `NAN` and the rest of the grid is
//! computed normally. Oversized grids fail up front with a
//! [`RadianceError::ResourceExhausted`] instead of thrashing the allocator.

pub mod constants;
pub mod error;
pub mod model;
pub mod planck;
pub mod shape;

pub use error::{RadianceError, RadianceResult};
pub use model::{Radiance, SpectralInput, TemperatureInput};
pub use planck::{
    radiance_by_wavelength, radiance_by_wavelength_with, radiance_by_wavenumber,
    radiance_by_wavenumber_with, EvalOptions, ExponentPrecision, DEFAULT_MAX_GRID_CELLS,
};
