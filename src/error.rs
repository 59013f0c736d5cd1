//! Error types for building and running simulation state.
//!
//! Almost everything here is a precondition failure at construction time. A
//! step itself never produces one; the only runtime error is a step worker
//! that died.

use thiserror::Error;

/// Errors raised when entities, cameras, or scenarios are built from invalid input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// Mass must be strictly positive.
    #[error("entity mass must be positive, got {0}")]
    NonPositiveMass(f64),

    /// Mass is NaN or infinite.
    #[error("entity mass must be finite, got {0}")]
    NonFiniteMass(f64),

    /// A position coordinate is NaN or infinite.
    #[error("entity position must be finite, got ({x}, {y}, {z})")]
    NonFinitePosition {
        /// x coordinate
        x: f64,
        /// y coordinate
        y: f64,
        /// z coordinate
        z: f64,
    },

    /// Radius is negative, NaN, or infinite.
    #[error("entity radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    /// Camera position, orientation, or motion contains NaN or infinity.
    #[error("camera state must be finite")]
    NonFiniteCamera,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The background step thread panicked and its entities are lost.
    #[error("step worker panicked")]
    WorkerPanicked,
}

impl SimulationError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;
