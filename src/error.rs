//! Error types for building and querying quadrature sets
//!
//! Only two things can go wrong in the core: asking for an order that has no
//! tabulated Gauss-Legendre data, or asking for an angle index that does not
//! exist. Both are caller bugs rather than transient conditions, so nothing
//! here is ever retried, clamped, or defaulted.

// external crates
use thiserror::Error;

/// Failures raised by the quadrature core
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureError {
    /// No Gauss-Legendre table exists for the requested SN order
    #[error("Quadrature order {0} not supported (expected an even order from 2 to 30)")]
    UnsupportedOrder(usize),

    /// Angle index outside of `[0, num_angles)`
    #[error("Angle index {index} out of range for quadrature with {num_angles} angles")]
    IndexOutOfRange {
        /// The offending angle index
        index: usize,
        /// Number of angles in the set that was queried
        num_angles: usize,
    },
}

/// Result type used throughout the quadrature core
pub type Result<T> = std::result::Result<T, QuadratureError>;
