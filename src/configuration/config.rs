//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice, frame delay and frame count
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`CameraConfig`]     – viewer position, orientation, motion and viewport
//! - [`BodyConfig`]       – explicit initial state for individual bodies
//! - [`GeneratorConfig`]  – optional random disk of bodies around a central mass
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "semi_implicit_euler"   # or "explicit_euler"
//!   frame_delay_ms: 40
//!   frames: 500
//!
//! parameters:
//!   dt: 1.0
//!   G: 1.0
//!   gravity_scale: 3500.0
//!   eps2: 0.0
//!   seed: 42
//!
//! camera:
//!   position: [0.0, 0.0, 0.0]
//!   angles: [0.0, 0.0, 0.0]
//!   velocity: [0.0, 0.0, 5.0]
//!   angular_velocity: [0.0, 0.0, 0.001]
//!   eye_distance: 5000.0
//!   canvas_width: 1200.0
//!   canvas_height: 800.0
//!
//! bodies:
//!   - x: [0.0, 0.0, 25000.0]
//!     m: 1000000.0
//!
//! generator:
//!   count: 2000
//!   mass_distribution: 3000.0
//!   orbit_radius: 1500.0
//!   speed_factor: 1.0
//!   xy_to_z_ratio: 500.0
//!   center_mass: 1000000.0
//!   center_distance: 25000.0
//! ```
//!
//! Every section is optional; missing values fall back to the defaults above.

use serde::Deserialize;

use crate::math::Vec3;
use crate::simulation::integrator::IntegratorConfig;
use crate::simulation::params::{DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_GRAVITY_SCALE};

/// Engine-level settings: how ticks are advanced and scheduled
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for each tick
    pub frame_delay_ms: u64, // delay between tick requests
    pub frames: u64, // frames the CLI runs before exiting
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            frame_delay_ms: 40,
            frames: 500,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64, // time step size
    pub G: f64, // raw gravitational constant
    pub gravity_scale: f64, // empirical divisor applied to G
    pub eps2: f64, // softening added to squared separation
    pub seed: u64, // deterministic seed to make generated runs reproducible
}

impl Default for ParametersConfig {
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

/// Viewer state and the projection plane
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub angles: Vec3, // rotation about x, y, z in radians
    pub velocity: Vec3, // position change per rendered frame
    pub angular_velocity: Vec3, // angle change per rendered frame
    pub eye_distance: f64, // distance from viewer to projection plane
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            angles: Vec3::zeros(),
            velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            eye_distance: 5000.0,
            canvas_width: 1200.0,
            canvas_height: 800.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec3, // initial position
    #[serde(default)]
    pub v: Vec3, // initial velocity
    pub m: f64, // mass, must be positive
    #[serde(default)]
    pub radius: Option<f64>, // explicit radius, otherwise cbrt(m)
}

/// Random disk of bodies orbiting a central mass
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize, // bodies besides the central mass
    pub mass_distribution: f64, // masses drawn from (0, mass_distribution]
    pub orbit_radius: f64, // radius of the disk
    pub speed_factor: f64, // 1.0 roughly balances orbital speed against gravity
    pub xy_to_z_ratio: f64, // disk thickness is orbit_radius / xy_to_z_ratio
    pub center_mass: f64,
    pub center_distance: f64, // z of the central mass, i.e. distance from the origin camera
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            mass_distribution: 3000.0,
            orbit_radius: 1500.0,
            speed_factor: 1.0,
            xy_to_z_ratio: 500.0,
            center_mass: 1_000_000.0,
            center_distance: 25_000.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub camera: CameraConfig,
    pub bodies: Vec<BodyConfig>, // explicit bodies, created first
    pub generator: Option<GeneratorConfig>, // random disk appended after explicit bodies
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
