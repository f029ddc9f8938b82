//! Error types for Lumen3D lighting
//!
//! The aggregation path itself is infallible: malformed scene input degrades
//! the produced state, it never fails. The fallible surface is the GPU
//! packing stage, which enforces per-type light capacities.

use std::fmt;

/// Result type for Lumen3D lighting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen3D lighting errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A per-type light count exceeded the packing capacity for that type
    TooManyLights {
        /// Light type name ("directional", "point", ...)
        kind: &'static str,
        /// Number of lights aggregated this frame
        count: usize,
        /// Configured capacity for the type
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooManyLights { kind, count, max } => write!(
                f,
                "Too many {} lights: {} aggregated, buffer capacity is {}",
                kind, count, max
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
