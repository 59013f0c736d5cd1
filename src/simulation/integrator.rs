//! Fixed-step time integrators for the N-body system
//!
//! Both schemes consume the force accumulated this tick, advance each entity
//! independently, and clear the accumulator. There is no cross-entity coupling,
//! so the loop runs on rayon's pool.

use rayon::prelude::*;
use serde::Deserialize;

use crate::simulation::states::Entity;

/// Which integrator the engine uses
/// `integrator: "semi_implicit_euler"` or `integrator: "explicit_euler"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "semi_implicit_euler")] // kick then drift: new velocity moves the entity
    SemiImplicitEuler,

    #[serde(rename = "explicit_euler")] // drift then kick: old velocity moves the entity
    ExplicitEuler,
}

/// Advance every entity by one step of size `dt`
pub fn integrate(kind: IntegratorConfig, entities: &mut [Entity], dt: f64) {
    match kind {
        IntegratorConfig::SemiImplicitEuler => semi_implicit_euler(entities, dt),
        IntegratorConfig::ExplicitEuler => explicit_euler(entities, dt),
    }
}

/// v += F/m * dt; x += v * dt
pub fn semi_implicit_euler(entities: &mut [Entity], dt: f64) {
    entities.par_iter_mut().for_each(|e| {
        e.previous_position = e.position;
        e.velocity += e.force * (dt / e.mass());
        e.position += e.velocity * dt;
        e.force = Default::default();
    });
}

/// x += v * dt; v += F/m * dt
pub fn explicit_euler(entities: &mut [Entity], dt: f64) {
    entities.par_iter_mut().for_each(|e| {
        e.previous_position = e.position;
        e.position += e.velocity * dt;
        e.velocity += e.force * (dt / e.mass());
        e.force = Default::default();
    });
}
