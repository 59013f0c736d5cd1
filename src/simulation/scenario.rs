//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the `Universe` (parameters, integrator, force laws)
//! - the validated initial entity collection
//! - the camera and the viewport it projects onto
//!
//! Explicit bodies come first, followed by the optional generated disk.

use std::f64::consts::TAU;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{BodyConfig, GeneratorConfig, ScenarioConfig};
use crate::error::{Result, SimulationError};
use crate::math::Vec3;
use crate::simulation::params::Parameters;
use crate::simulation::states::Entity;
use crate::simulation::universe::Universe;
use crate::visualization::camera::Camera;
use crate::visualization::projection::Viewport;

/// Lightest mass the generator will produce, keeps `mass > 0`
const MIN_GENERATED_MASS: f64 = 1e-6;

pub struct Scenario {
    pub universe: Universe,
    pub entities: Vec<Entity>,
    pub camera: Camera,
    pub viewport: Viewport,
    pub frame_delay: Duration,
    pub frames: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            gravity_scale: p_cfg.gravity_scale,
            eps2: p_cfg.eps2,
            seed: p_cfg.seed,
        };
        parameters.validate()?;

        let mut entities = cfg
            .bodies
            .iter()
            .map(body_from_config)
            .collect::<Result<Vec<_>>>()?;

        if let Some(generator) = &cfg.generator {
            let mut rng = StdRng::seed_from_u64(parameters.seed);
            entities.extend(generate_disk(generator, parameters.effective_g(), &mut rng)?);
        }

        let camera = Camera::from_config(&cfg.camera)?;
        let viewport = Viewport::from_config(&cfg.camera)?;
        let universe = Universe::new(parameters, cfg.engine.integrator);

        info!(
            entities = entities.len(),
            integrator = ?cfg.engine.integrator,
            g = universe.parameters.effective_g(),
            "scenario built"
        );

        Ok(Self {
            universe,
            entities,
            camera,
            viewport,
            frame_delay: Duration::from_millis(cfg.engine.frame_delay_ms),
            frames: cfg.engine.frames,
        })
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Entity> {
    let entity = match bc.radius {
        Some(radius) => Entity::with_radius(bc.x, bc.m, radius)?,
        None => Entity::new(bc.x, bc.m)?,
    };
    Ok(entity.with_velocity(bc.v))
}

/// A central mass plus `count` bodies spread uniformly over a disk around it
///
/// Bodies get a tangential velocity in the disk plane, scaled so that
/// `speed_factor = 1` is roughly orbital for the enclosed mass, plus a small
/// drift along z.
pub fn generate_disk(cfg: &GeneratorConfig, g: f64, rng: &mut impl Rng) -> Result<Vec<Entity>> {
    if !(cfg.orbit_radius.is_finite() && cfg.orbit_radius > 0.0) {
        return Err(SimulationError::invalid_config("generator orbit_radius must be positive"));
    }
    if !(cfg.mass_distribution.is_finite() && cfg.mass_distribution > 0.0) {
        return Err(SimulationError::invalid_config("generator mass_distribution must be positive"));
    }
    if !(cfg.xy_to_z_ratio.is_finite() && cfg.xy_to_z_ratio > 0.0) {
        return Err(SimulationError::invalid_config("generator xy_to_z_ratio must be positive"));
    }

    let center = Entity::new(Vec3::new(0.0, 0.0, cfg.center_distance), cfg.center_mass)?;
    let z_spread = cfg.orbit_radius / cfg.xy_to_z_ratio;
    let rotation_factor =
        cfg.speed_factor * g * (cfg.center_mass + cfg.mass_distribution * cfg.count as f64 / 2.0);

    let mut entities = Vec::with_capacity(cfg.count + 1);
    entities.push(center);

    for _ in 0..cfg.count {
        let theta = rng.gen::<f64>() * TAU;
        let r = cfg.orbit_radius * rng.gen::<f64>().sqrt();
        let x = center.position.x + r * theta.cos();
        let y = center.position.y + r * theta.sin();
        let z = center.position.z + rng.gen::<f64>() * z_spread - z_spread / 2.0;
        let mass = (rng.gen::<f64>() * cfg.mass_distribution).max(MIN_GENERATED_MASS);

        let position = Vec3::new(x, y, z);
        let distance = center.position.distance(&position);
        let velocity = if distance > 0.0 {
            let speed = rotation_factor / distance;
            Vec3::new(
                -(y - center.position.y) * speed * rng.gen::<f64>() / distance,
                (x - center.position.x) * speed * rng.gen::<f64>() / distance,
                rng.gen::<f64>() * z_spread / 10.0 / mass.max(1.0),
            )
        } else {
            Vec3::zeros()
        };

        entities.push(Entity::new(position, mass)?.with_velocity(velocity));
    }

    Ok(entities)
}
