//! Errors raised while building a surface.

use std::fmt;

/// Reasons a [`HeightField`](crate::HeightField) cannot be constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceError {
    /// Fewer than two samples along an axis; no cell to interpolate over.
    DegenerateGrid { width: usize, depth: usize },
    /// Cell size must be finite and strictly positive.
    InvalidCellSize(f32),
    /// Sample buffer length does not match `width * depth`.
    SampleCountMismatch { expected: usize, actual: usize },
    /// A height sample is NaN or infinite.
    NonFiniteSample { x: usize, z: usize },
    /// Grid origin is NaN or infinite.
    NonFiniteOrigin,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::DegenerateGrid { width, depth } => write!(
                f,
                "Degenerate height grid {}x{} (need at least 2x2 samples)",
                width, depth
            ),
            SurfaceError::InvalidCellSize(size) => write!(f, "Invalid cell size: {}", size),
            SurfaceError::SampleCountMismatch { expected, actual } => write!(
                f,
                "Height sample count mismatch: expected {}, got {}",
                expected, actual
            ),
            SurfaceError::NonFiniteSample { x, z } => {
                write!(f, "Non-finite height sample at ({}, {})", x, z)
            }
            SurfaceError::NonFiniteOrigin => write!(f, "Non-finite grid origin"),
        }
    }
}

impl std::error::Error for SurfaceError {}
