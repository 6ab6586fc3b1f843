use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors produced by the radiance evaluators.
///
/// Near-zero temperatures are *not* an error: they are masked out of the
/// computation and surface as `NAN` entries in the result instead.
#[derive(Debug, Error)]
pub enum RadianceError {
    /// An input axis contained no values at all.
    #[error("empty {axis} input: at least one value is required")]
    EmptyInput { axis: &'static str },

    /// A spectral position was non-finite, zero, or negative.
    #[error("{axis}[{index}] = {value}: spectral positions must be finite and strictly positive")]
    InvalidSpectralPosition {
        axis: &'static str,
        index: usize,
        value: f64,
    },

    /// A temperature was NaN or infinite.
    #[error("temperature[{index}] = {value}: temperatures must be finite")]
    InvalidTemperature { index: usize, value: f64 },

    /// The temperature × spectral-position grid is too large to evaluate
    /// in one go. Deterministic for a given input size, so never retried.
    #[error(
        "radiance grid of {rows} temperatures x {cols} spectral positions exceeds \
         the working budget of {limit} cells; pre-tabulate a radiance/brightness-\
         temperature lookup table instead of evaluating a grid this large"
    )]
    ResourceExhausted {
        rows: usize,
        cols: usize,
        limit: usize,
    },
}

/// Result alias for radiance operations.
pub type RadianceResult<T> = Result<T, RadianceError>;
