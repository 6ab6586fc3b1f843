use log::{debug, warn};
use ndarray::{Array1, Array2, Array3};

use crate::constants::{C_SPEED, EPSILON, H_PLANCK, K_BOLTZMANN};
use crate::error::{RadianceError, RadianceResult};
use crate::model::{Radiance, SpectralInput, TemperatureInput};
use crate::shape::{output_shape, OutputShape, TempLayout};

// ---------------------------------------------------------------------------
// Evaluation options
// ---------------------------------------------------------------------------

/// Precision of the exponent argument `h·c·ν / (k·T)`.
///
/// The large intermediate of an evaluation is the temperature × spectral
/// grid of exponent arguments, so forming it in `f32` halves the memory
/// traffic for big grids at the cost of ~1e-7 relative rounding. `Single`
/// is the default; `Double` keeps the whole computation in `f64` and
/// changes rounding behaviour for extreme inputs accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentPrecision {
    Single,
    Double,
}

impl Default for ExponentPrecision {
    fn default() -> Self {
        ExponentPrecision::Single
    }
}

/// Default working budget for the radiance grid: 2^28 cells (~2 GiB of f64).
pub const DEFAULT_MAX_GRID_CELLS: usize = 1 << 28;

/// Knobs for an evaluation. The plain entry points use the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Precision of the exponent argument.
    pub precision: ExponentPrecision,
    /// Upper bound on temperature-count × spectral-count before the
    /// evaluator refuses with [`RadianceError::ResourceExhausted`].
    pub max_grid_cells: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            precision: ExponentPrecision::default(),
            max_grid_cells: DEFAULT_MAX_GRID_CELLS,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Planck blackbody radiance as a function of wavenumber.
///
/// `wavenumber` is a scalar or sequence in m⁻¹, `temperature` a scalar,
/// sequence, or 2-D grid in kelvin. The result follows the broadcast rules
/// of [`crate::shape::output_shape`], in W·m⁻²·sr⁻¹·(m⁻¹)⁻¹ (equivalently
/// W·m⁻¹·sr⁻¹; multiply by 0.1 for mW·m⁻²·sr⁻¹·(cm⁻¹)⁻¹).
///
/// Temperatures with `|T|` at or below the near-zero threshold are masked:
/// their entries come back as `NAN` instead of tripping a division by zero.
pub fn radiance_by_wavenumber(
    wavenumber: impl Into<SpectralInput>,
    temperature: impl Into<TemperatureInput>,
) -> RadianceResult<Radiance> {
    radiance_by_wavenumber_with(wavenumber, temperature, &EvalOptions::default())
}

/// [`radiance_by_wavenumber`] with explicit [`EvalOptions`].
pub fn radiance_by_wavenumber_with(
    wavenumber: impl Into<SpectralInput>,
    temperature: impl Into<TemperatureInput>,
    options: &EvalOptions,
) -> RadianceResult<Radiance> {
    debug!("computing blackbody radiance over wavenumbers");
    evaluate(
        SpectralVariant::Wavenumber,
        &wavenumber.into(),
        &temperature.into(),
        options,
    )
}

/// Planck blackbody radiance as a function of wavelength.
///
/// `wavelength` is a scalar or sequence in m (not µm), `temperature` a
/// scalar, sequence, or 2-D grid in kelvin. The result follows the
/// broadcast rules of [`crate::shape::output_shape`], in W·m⁻²·sr⁻¹·m⁻¹.
///
/// Same near-zero masking as [`radiance_by_wavenumber`]. Additionally, any
/// negative exponent arguments (possible only if upstream fed inconsistent
/// values, e.g. negative temperatures) are counted and reported through the
/// log facade; the result is still returned.
pub fn radiance_by_wavelength(
    wavelength: impl Into<SpectralInput>,
    temperature: impl Into<TemperatureInput>,
) -> RadianceResult<Radiance> {
    radiance_by_wavelength_with(wavelength, temperature, &EvalOptions::default())
}

/// [`radiance_by_wavelength`] with explicit [`EvalOptions`].
pub fn radiance_by_wavelength_with(
    wavelength: impl Into<SpectralInput>,
    temperature: impl Into<TemperatureInput>,
    options: &EvalOptions,
) -> RadianceResult<Radiance> {
    debug!("computing blackbody radiance over wavelengths");
    evaluate(
        SpectralVariant::Wavelength,
        &wavelength.into(),
        &temperature.into(),
        options,
    )
}

// ---------------------------------------------------------------------------
// Input coercion and validation
// ---------------------------------------------------------------------------

/// Flatten a spectral input to a list, rejecting empty, non-finite, and
/// non-positive positions.
fn coerce_spectral(input: &SpectralInput, axis: &'static str) -> RadianceResult<Vec<f64>> {
    let positions = match input {
        SpectralInput::Scalar(value) => vec![*value],
        SpectralInput::Sequence(values) => values.to_vec(),
    };
    if positions.is_empty() {
        return Err(RadianceError::EmptyInput { axis });
    }
    for (index, &value) in positions.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(RadianceError::InvalidSpectralPosition { axis, index, value });
        }
    }
    Ok(positions)
}

/// Flatten a temperature input to a row-major list, remembering its layout.
/// Near-zero temperatures pass through here; they are masked later, not
/// rejected.
fn coerce_temperature(input: &TemperatureInput) -> RadianceResult<(Vec<f64>, TempLayout)> {
    let (temps, layout) = match input {
        TemperatureInput::Scalar(value) => (vec![*value], TempLayout::Scalar),
        TemperatureInput::Sequence(values) => (values.to_vec(), TempLayout::Vector(values.len())),
        TemperatureInput::Grid(values) => (
            values.iter().copied().collect(),
            TempLayout::Grid(values.nrows(), values.ncols()),
        ),
    };
    if temps.is_empty() {
        return Err(RadianceError::EmptyInput {
            axis: "temperature",
        });
    }
    for (index, &value) in temps.iter().enumerate() {
        if !value.is_finite() {
            return Err(RadianceError::InvalidTemperature { index, value });
        }
    }
    Ok((temps, layout))
}

// ---------------------------------------------------------------------------
// Shared evaluation kernel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpectralVariant {
    Wavenumber,
    Wavelength,
}

impl SpectralVariant {
    fn axis(&self) -> &'static str {
        match self {
            SpectralVariant::Wavenumber => "wavenumber",
            SpectralVariant::Wavelength => "wavelength",
        }
    }
}

/// Evaluate the Planck law over the full temperature × position grid and
/// hand the result back in the caller-facing layout.
fn evaluate(
    variant: SpectralVariant,
    spectral: &SpectralInput,
    temperature: &TemperatureInput,
    options: &EvalOptions,
) -> RadianceResult<Radiance> {
    let positions = coerce_spectral(spectral, variant.axis())?;
    let (temps, layout) = coerce_temperature(temperature)?;

    // Per-position terms of the Planck law. For wavenumber ν:
    //   radiance = 2hc²ν³ / (exp(hcν/kT) − 1)
    // and for wavelength λ:
    //   radiance = 2hc²/λ⁵ / (exp(hc/(kλT)) − 1)
    // so each position contributes a numerator and the temperature-free part
    // of the exponent argument.
    let mut numer = Vec::with_capacity(positions.len());
    let mut exp_coeff = Vec::with_capacity(positions.len());
    let planck_const = 2.0 * H_PLANCK * C_SPEED * C_SPEED;
    for &p in &positions {
        match variant {
            SpectralVariant::Wavenumber => {
                numer.push(planck_const * p * p * p);
                exp_coeff.push(H_PLANCK * C_SPEED * p / K_BOLTZMANN);
            }
            SpectralVariant::Wavelength => {
                numer.push(planck_const / p.powi(5));
                exp_coeff.push(H_PLANCK * C_SPEED / (K_BOLTZMANN * p));
            }
        }
    }

    // Reciprocal temperatures, with the near-zero singularity masked out.
    // The tag (`None`) can never collide with a real 1/T value.
    let inv_temp: Vec<Option<f64>> = temps
        .iter()
        .map(|&t| if t.abs() > EPSILON { Some(1.0 / t) } else { None })
        .collect();

    let rows = temps.len();
    let cols = positions.len();
    let cells = match rows.checked_mul(cols) {
        Some(cells) if cells <= options.max_grid_cells => cells,
        _ => {
            warn!(
                "radiance grid of {rows} x {cols} cells is over budget; \
                 make sure the radiance<->brightness-temperature table has \
                 been pre-computed instead"
            );
            return Err(RadianceError::ResourceExhausted {
                rows,
                cols,
                limit: options.max_grid_cells,
            });
        }
    };

    let mut rad = Vec::new();
    if rad.try_reserve_exact(cells).is_err() {
        warn!(
            "allocation of {cells} radiance cells failed; make sure the \
             radiance<->brightness-temperature table has been pre-computed instead"
        );
        return Err(RadianceError::ResourceExhausted {
            rows,
            cols,
            limit: options.max_grid_cells,
        });
    }

    if let (Some(min), Some(max)) = (
        exp_coeff.iter().copied().reduce(f64::min),
        exp_coeff.iter().copied().reduce(f64::max),
    ) {
        debug!("exponent coefficient range: {min:e} .. {max:e}");
    }

    let mut dubious = 0usize;
    for &inv in &inv_temp {
        for (i, &coeff) in exp_coeff.iter().enumerate() {
            match inv {
                None => rad.push(f64::NAN),
                Some(inv) => {
                    let denom = match options.precision {
                        ExponentPrecision::Single => {
                            let exp_arg = (coeff as f32) * (inv as f32);
                            if exp_arg < 0.0 {
                                dubious += 1;
                            }
                            exp_arg.exp() as f64 - 1.0
                        }
                        ExponentPrecision::Double => {
                            let exp_arg = coeff * inv;
                            if exp_arg < 0.0 {
                                dubious += 1;
                            }
                            exp_arg.exp() - 1.0
                        }
                    };
                    rad.push(numer[i] / denom);
                }
            }
        }
    }

    // Only the wavelength form reports this: a negative exponent argument
    // means the denominator may be zero or negative in the derivation.
    if variant == SpectralVariant::Wavelength && dubious > 0 {
        warn!(
            "denominator may be zero or negative in the radiance derivation: \
             {dubious} dubious exponent entries"
        );
    }

    let result = match output_shape(cols, layout) {
        OutputShape::Scalar => Radiance::Scalar(rad[0]),
        OutputShape::Vector(_) => Radiance::Vector(Array1::from_vec(rad)),
        OutputShape::Matrix(r, c) => Radiance::Matrix(
            Array2::from_shape_vec((r, c), rad).expect("cell count matches matrix shape"),
        ),
        OutputShape::Cube(r, c, s) => Radiance::Cube(
            Array3::from_shape_vec((r, c, s), rad).expect("cell count matches cube shape"),
        ),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{C_SPEED, H_PLANCK, K_BOLTZMANN};

    /// Straightforward f64 Planck evaluation, independent of the kernel.
    fn planck_wn_reference(wavenumber: f64, temp: f64) -> f64 {
        let numer = 2.0 * H_PLANCK * C_SPEED * C_SPEED * wavenumber.powi(3);
        let exp_arg = H_PLANCK * C_SPEED * wavenumber / (K_BOLTZMANN * temp);
        numer / (exp_arg.exp() - 1.0)
    }

    #[test]
    fn scalar_inputs_give_scalar_radiance() {
        let rad = radiance_by_wavenumber(90_000.0, 280.0).unwrap();
        let value = rad.as_scalar().expect("scalar inputs yield a scalar");
        assert!(value > 0.0);
    }

    #[test]
    fn matches_reference_value_at_900_inverse_cm() {
        // 900 cm⁻¹ in SI units, a typical infrared window channel.
        let rad = radiance_by_wavenumber(90_000.0, 280.0).unwrap();
        let value = rad.as_scalar().unwrap();
        let expected = planck_wn_reference(90_000.0, 280.0);
        assert!(
            (value - expected).abs() / expected < 0.05,
            "got {value:e}, expected within 5% of {expected:e}"
        );
    }

    #[test]
    fn single_and_double_precision_agree_closely() {
        let single = EvalOptions {
            precision: ExponentPrecision::Single,
            ..EvalOptions::default()
        };
        let double = EvalOptions {
            precision: ExponentPrecision::Double,
            ..EvalOptions::default()
        };
        let a = radiance_by_wavenumber_with(90_000.0, 280.0, &single)
            .unwrap()
            .as_scalar()
            .unwrap();
        let b = radiance_by_wavenumber_with(90_000.0, 280.0, &double)
            .unwrap()
            .as_scalar()
            .unwrap();
        assert!((a - b).abs() / b < 1e-4, "single {a:e} vs double {b:e}");
    }

    #[test]
    fn near_zero_temperature_is_masked_not_an_error() {
        let rad = radiance_by_wavenumber(90_000.0, 0.0).unwrap();
        assert!(rad.as_scalar().unwrap().is_nan());

        // Mixed: valid temperatures still computed alongside masked ones.
        let rad = radiance_by_wavenumber(90_000.0, vec![280.0, 0.0, 300.0]).unwrap();
        let values = rad.as_vector().unwrap();
        assert!(values[0] > 0.0);
        assert!(values[1].is_nan());
        assert!(values[2] > 0.0);
    }

    #[test]
    fn wavelength_variant_is_positive_in_the_infrared() {
        // 11 µm at 280 K.
        let rad = radiance_by_wavelength(11.0e-6, 280.0).unwrap();
        assert!(rad.as_scalar().unwrap() > 0.0);
    }

    #[test]
    fn dubious_exponents_are_reported_not_fatal() {
        // A negative temperature above the mask threshold produces a
        // negative exponent argument; the call still succeeds.
        let rad = radiance_by_wavelength(11.0e-6, vec![-50.0, 280.0]).unwrap();
        let values = rad.as_vector().unwrap();
        assert!(values[1] > 0.0);
    }

    #[test]
    fn rejects_empty_and_non_positive_inputs() {
        let err = radiance_by_wavenumber(Vec::<f64>::new(), 280.0).unwrap_err();
        assert!(matches!(err, RadianceError::EmptyInput { axis: "wavenumber" }));

        let err = radiance_by_wavenumber(vec![90_000.0, -1.0], 280.0).unwrap_err();
        assert!(matches!(
            err,
            RadianceError::InvalidSpectralPosition { index: 1, .. }
        ));

        let err = radiance_by_wavelength(0.0, 280.0).unwrap_err();
        assert!(matches!(
            err,
            RadianceError::InvalidSpectralPosition {
                axis: "wavelength",
                index: 0,
                ..
            }
        ));

        let err = radiance_by_wavenumber(90_000.0, f64::NAN).unwrap_err();
        assert!(matches!(err, RadianceError::InvalidTemperature { index: 0, .. }));
    }

    #[test]
    fn oversized_grid_is_refused() {
        let options = EvalOptions {
            max_grid_cells: 16,
            ..EvalOptions::default()
        };
        let positions: Vec<f64> = (1..=5).map(|i| i as f64 * 10_000.0).collect();
        let temps: Vec<f64> = (1..=5).map(|i| 200.0 + i as f64).collect();
        let err = radiance_by_wavenumber_with(positions, temps, &options).unwrap_err();
        assert!(matches!(
            err,
            RadianceError::ResourceExhausted {
                rows: 5,
                cols: 5,
                limit: 16
            }
        ));
    }
}
