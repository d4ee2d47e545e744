//! Failure modes of the vesselness pipeline.
//!
//! All failures are deterministic functions of the inputs; nothing here is
//! transient and no stage retries. Degenerate normalization (a flat structure
//! field) is *not* an error — it produces an all-zero map.

/// Reasons a vesselness computation may be rejected or aborted.
#[derive(Clone, Debug, PartialEq)]
pub enum VesselnessError {
    /// Buffers participating in one computation do not share dimensions.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// A parameter failed validation before any computation started.
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
    /// The Hessian provider failed for one scale; the whole request aborts.
    Provider { sigma: f32, message: String },
}

impl std::fmt::Display for VesselnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VesselnessError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch (expected {}x{}, got {}x{})",
                expected.0, expected.1, got.0, got.1
            ),
            VesselnessError::InvalidParameter {
                name,
                value,
                constraint,
            } => {
                write!(f, "invalid parameter {name}={value} ({constraint})")
            }
            VesselnessError::Provider { sigma, message } => {
                write!(f, "hessian provider failed at sigma={sigma}: {message}")
            }
        }
    }
}

impl std::error::Error for VesselnessError {}
