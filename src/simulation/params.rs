//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the fixed integration step `dt`,
//! - the gravitational constant and the empirical scale it is divided by,
//! - optional softening (`eps2`) and the generator seed

use crate::error::{Result, SimulationError};

/// Default raw gravitational constant in simulation units
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 1.0;

/// Default divisor applied to the raw constant to keep motion visually stable
pub const DEFAULT_GRAVITY_SCALE: f64 = 3500.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size, 1.0 = one tick
    pub G: f64, // raw gravitational constant
    pub gravity_scale: f64, // G is divided by this
    pub eps2: f64, // softening added to d^2, 0 = exact inverse square
    pub seed: u64, // deterministic seed for generated scenarios
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 1.0,
            G: DEFAULT_GRAVITATIONAL_CONSTANT,
            gravity_scale: DEFAULT_GRAVITY_SCALE,
            eps2: 0.0,
            seed: 42,
        }
    }
}

impl Parameters {
    /// Gravitational constant actually used by the force law
    pub fn effective_g(&self) -> f64 {
        self.G / self.gravity_scale
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimulationError::invalid_config(format!("dt must be positive, got {}", self.dt)));
        }
        if !self.G.is_finite() {
            return Err(SimulationError::invalid_config("gravitational constant must be finite"));
        }
        if !(self.gravity_scale.is_finite() && self.gravity_scale > 0.0) {
            return Err(SimulationError::invalid_config(format!(
                "gravity_scale must be positive, got {}",
                self.gravity_scale
            )));
        }
        if !(self.eps2.is_finite() && self.eps2 >= 0.0) {
            return Err(SimulationError::invalid_config(format!("eps2 must be non-negative, got {}", self.eps2)));
        }
        Ok(())
    }
}
