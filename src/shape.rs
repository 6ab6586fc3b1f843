// ---------------------------------------------------------------------------
// Broadcast shape dispatch
// ---------------------------------------------------------------------------

/// Temperature layout as the caller supplied it, before coercion to a flat
/// list for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempLayout {
    Scalar,
    Vector(usize),
    Grid(usize, usize),
}

impl TempLayout {
    /// Total number of temperatures in this layout.
    pub fn count(&self) -> usize {
        match self {
            TempLayout::Scalar => 1,
            TempLayout::Vector(len) => *len,
            TempLayout::Grid(rows, cols) => rows * cols,
        }
    }
}

/// Layout of an evaluator result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    Scalar,
    Vector(usize),
    Matrix(usize, usize),
    Cube(usize, usize, usize),
}

/// Decide the result layout from the input layouts alone.
///
/// The full (temperature-count × spectral-count) grid is always computed;
/// this function decides how it is handed back:
///
/// * one spectral position and a scalar temperature → a plain scalar
/// * one spectral position, temperatures as a vector or grid → the
///   temperature shape, one radiance per temperature
/// * several spectral positions and a scalar temperature → the spectrum,
///   a vector of `spectral_len`
/// * several spectral positions, temperatures as a vector or grid → the
///   temperature shape with a trailing spectral axis appended
///
/// A length-1 spectral *sequence* behaves like a scalar position, but a
/// length-1 temperature *vector* stays a vector: only an originally scalar
/// temperature collapses the temperature axis.
pub fn output_shape(spectral_len: usize, temperature: TempLayout) -> OutputShape {
    match (spectral_len, temperature) {
        (1, TempLayout::Scalar) => OutputShape::Scalar,
        (1, TempLayout::Vector(len)) => OutputShape::Vector(len),
        (1, TempLayout::Grid(rows, cols)) => OutputShape::Matrix(rows, cols),
        (s, TempLayout::Scalar) => OutputShape::Vector(s),
        (s, TempLayout::Vector(len)) => OutputShape::Matrix(len, s),
        (s, TempLayout::Grid(rows, cols)) => OutputShape::Cube(rows, cols, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_position_scalar_temperature() {
        assert_eq!(output_shape(1, TempLayout::Scalar), OutputShape::Scalar);
    }

    #[test]
    fn scalar_position_temperature_vector() {
        assert_eq!(
            output_shape(1, TempLayout::Vector(5)),
            OutputShape::Vector(5)
        );
    }

    #[test]
    fn scalar_position_temperature_grid() {
        assert_eq!(
            output_shape(1, TempLayout::Grid(3, 4)),
            OutputShape::Matrix(3, 4)
        );
    }

    #[test]
    fn spectrum_at_scalar_temperature() {
        assert_eq!(output_shape(7, TempLayout::Scalar), OutputShape::Vector(7));
    }

    #[test]
    fn spectrum_per_temperature_vector() {
        assert_eq!(
            output_shape(7, TempLayout::Vector(5)),
            OutputShape::Matrix(5, 7)
        );
    }

    #[test]
    fn spectrum_per_temperature_grid() {
        assert_eq!(
            output_shape(7, TempLayout::Grid(3, 4)),
            OutputShape::Cube(3, 4, 7)
        );
    }

    #[test]
    fn length_one_temperature_vector_stays_a_vector() {
        // A [T] vector is not a scalar: the caller asked for an array back.
        assert_eq!(
            output_shape(1, TempLayout::Vector(1)),
            OutputShape::Vector(1)
        );
        assert_eq!(
            output_shape(7, TempLayout::Vector(1)),
            OutputShape::Matrix(1, 7)
        );
    }

    #[test]
    fn layout_counts() {
        assert_eq!(TempLayout::Scalar.count(), 1);
        assert_eq!(TempLayout::Vector(5).count(), 5);
        assert_eq!(TempLayout::Grid(3, 4).count(), 12);
    }
}
