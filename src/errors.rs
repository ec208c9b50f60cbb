use crate::precision::Precision;

/// Errors raised when a caller asks about a precision this build does not provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrecisionError {
    /// (UnknownPrecision) The name does not denote single or double precision
    #[error("unknown precision `{0}`, expected one of: single, f32, narrow, double, f64, wide")]
    UnknownPrecision(String),
    /// (Mismatch) The core was compiled at a different precision than requested
    #[error(
        "core was built at {active} precision but {expected} was requested; \
         rebuild with feature `{}`",
        .expected.feature_name()
    )]
    Mismatch {
        expected: Precision,
        active: Precision,
    },
}
