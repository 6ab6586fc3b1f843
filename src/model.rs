use ndarray::{Array1, Array2, Array3};

// ---------------------------------------------------------------------------
// SpectralInput – wavenumber or wavelength positions
// ---------------------------------------------------------------------------

/// Spectral positions handed to an evaluator: a single value or an ordered
/// sequence. Wavenumbers are in m⁻¹, wavelengths in m, depending on which
/// operation the input is passed to.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectralInput {
    Scalar(f64),
    Sequence(Array1<f64>),
}

impl SpectralInput {
    /// Number of spectral positions after coercing a scalar to length 1.
    pub fn len(&self) -> usize {
        match self {
            SpectralInput::Scalar(_) => 1,
            SpectralInput::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for SpectralInput {
    fn from(value: f64) -> Self {
        SpectralInput::Scalar(value)
    }
}

impl From<Vec<f64>> for SpectralInput {
    fn from(values: Vec<f64>) -> Self {
        SpectralInput::Sequence(Array1::from_vec(values))
    }
}

impl From<&[f64]> for SpectralInput {
    fn from(values: &[f64]) -> Self {
        SpectralInput::Sequence(Array1::from(values.to_vec()))
    }
}

impl From<Array1<f64>> for SpectralInput {
    fn from(values: Array1<f64>) -> Self {
        SpectralInput::Sequence(values)
    }
}

// ---------------------------------------------------------------------------
// TemperatureInput – scalar, vector, or 2-D grid of kelvin values
// ---------------------------------------------------------------------------

/// Temperatures handed to an evaluator, in kelvin. The original layout is
/// remembered so the result can mirror it: a scalar temperature collapses
/// the temperature axis of the output, a vector or grid keeps its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureInput {
    Scalar(f64),
    Sequence(Array1<f64>),
    Grid(Array2<f64>),
}

impl From<f64> for TemperatureInput {
    fn from(value: f64) -> Self {
        TemperatureInput::Scalar(value)
    }
}

impl From<Vec<f64>> for TemperatureInput {
    fn from(values: Vec<f64>) -> Self {
        TemperatureInput::Sequence(Array1::from_vec(values))
    }
}

impl From<&[f64]> for TemperatureInput {
    fn from(values: &[f64]) -> Self {
        TemperatureInput::Sequence(Array1::from(values.to_vec()))
    }
}

impl From<Array1<f64>> for TemperatureInput {
    fn from(values: Array1<f64>) -> Self {
        TemperatureInput::Sequence(values)
    }
}

impl From<Array2<f64>> for TemperatureInput {
    fn from(values: Array2<f64>) -> Self {
        TemperatureInput::Grid(values)
    }
}

// ---------------------------------------------------------------------------
// Radiance – shaped evaluator output
// ---------------------------------------------------------------------------

/// Spectral radiance shaped according to the broadcast rules in
/// [`crate::shape::output_shape`]. Entries whose temperature was masked
/// (|T| at or below the near-zero threshold) are `f64::NAN`; `NAN` can never
/// be a legitimately computed radiance, so no separate invalid marker is
/// carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Radiance {
    Scalar(f64),
    Vector(Array1<f64>),
    Matrix(Array2<f64>),
    Cube(Array3<f64>),
}

impl Radiance {
    /// The scalar value, if this result is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Radiance::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Array1<f64>> {
        match self {
            Radiance::Vector(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Array2<f64>> {
        match self {
            Radiance::Matrix(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_cube(&self) -> Option<&Array3<f64>> {
        match self {
            Radiance::Cube(values) => Some(values),
            _ => None,
        }
    }

    /// The dimensions of the result; empty for a scalar.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Radiance::Scalar(_) => Vec::new(),
            Radiance::Vector(values) => values.shape().to_vec(),
            Radiance::Matrix(values) => values.shape().to_vec(),
            Radiance::Cube(values) => values.shape().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn spectral_input_coercions_remember_length() {
        assert_eq!(SpectralInput::from(90_000.0).len(), 1);
        assert_eq!(SpectralInput::from(vec![1.0, 2.0, 3.0]).len(), 3);
        assert_eq!(SpectralInput::from(&[1.0, 2.0][..]).len(), 2);
    }

    #[test]
    fn temperature_grid_coercion_keeps_shape() {
        let grid = arr2(&[[280.0, 285.0], [290.0, 295.0]]);
        match TemperatureInput::from(grid) {
            TemperatureInput::Grid(g) => assert_eq!(g.shape(), &[2, 2]),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn radiance_accessors_match_variant() {
        let scalar = Radiance::Scalar(1.5);
        assert_eq!(scalar.as_scalar(), Some(1.5));
        assert!(scalar.as_vector().is_none());
        assert!(scalar.shape().is_empty());

        let vector = Radiance::Vector(Array1::from_vec(vec![1.0, 2.0]));
        assert_eq!(vector.shape(), vec![2]);
        assert!(vector.as_scalar().is_none());
    }
}
