//! Core state types for the N-body simulation.
//!
//! Defines the `Entity` point mass and the `Spatial` capability shared by
//! everything the camera can project (entities and bare trail points).
//!
//! Entities are validated at construction; after that the physics step keeps
//! them finite as long as the gravity softening policy holds.

use crate::error::{Result, SimulationError};
use crate::math::Vec3;

/// Anything with a 3D position and a render radius
pub trait Spatial {
    fn position(&self) -> Vec3;

    fn radius(&self) -> f64 {
        0.0
    }
}

/// A bare point, e.g. a previous position used for motion trails
impl Spatial for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

/// A point mass
///
/// `mass` is private, so the validating constructors are the only way to
/// build one and `mass > 0` holds for every entity:
///
/// ```compile_fail
/// use orbsim::{Entity, Vec3};
///
/// let bad = Entity {
///     position: Vec3::zeros(),
///     previous_position: Vec3::zeros(),
///     velocity: Vec3::zeros(),
///     force: Vec3::zeros(),
///     mass: 0.0,
///     radius: 1.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub position: Vec3, // current position
    pub previous_position: Vec3, // position before the last integration step
    pub velocity: Vec3, // carried across steps
    pub force: Vec3, // accumulated this tick, cleared by the integrator
    mass: f64, // always > 0
    pub radius: f64, // collision extent and render size
}

impl Entity {
    /// Create an entity at rest with radius derived from mass (`cbrt(mass)`)
    pub fn new(position: Vec3, mass: f64) -> Result<Self> {
        check_mass(mass)?;
        Self::with_radius(position, mass, mass.cbrt())
    }

    /// Create an entity at rest with an explicit radius
    pub fn with_radius(position: Vec3, mass: f64, radius: f64) -> Result<Self> {
        check_mass(mass)?;
        if !position.is_finite() {
            return Err(SimulationError::NonFinitePosition {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SimulationError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            previous_position: position,
            velocity: Vec3::zeros(),
            force: Vec3::zeros(),
            mass,
            radius,
        })
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Add a force contribution for the current tick
    pub fn apply_force(&mut self, f: Vec3) {
        self.force += f;
    }

    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.position.distance(&other.position)
    }

    /// Bounding spheres intersect (strictly closer than the sum of radii)
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    /// Inelastic merge: take `other` into `self`
    ///
    /// Mass adds, position and previous position move to the mass-weighted
    /// centroid, momentum is conserved, pending forces add, and the radius
    /// keeps the combined volume.
    pub fn absorb(&mut self, other: &Entity) {
        let total = self.mass + other.mass;
        let (wa, wb) = (self.mass / total, other.mass / total);

        self.position = self.position * wa + other.position * wb;
        self.previous_position = self.previous_position * wa + other.previous_position * wb;
        self.velocity = (self.momentum() + other.momentum()) / total;
        self.force += other.force;
        self.radius = (self.radius.powi(3) + other.radius.powi(3)).cbrt();
        self.mass = total;
    }
}

impl Spatial for Entity {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

fn check_mass(mass: f64) -> Result<()> {
    if !mass.is_finite() {
        return Err(SimulationError::NonFiniteMass(mass));
    }
    if mass <= 0.0 {
        return Err(SimulationError::NonPositiveMass(mass));
    }
    Ok(())
}

/// Sum of all masses in a collection
pub fn total_mass(entities: &[Entity]) -> f64 {
    entities.iter().map(Entity::mass).sum()
}

/// Sum of all momenta in a collection
pub fn total_momentum(entities: &[Entity]) -> Vec3 {
    entities.iter().fold(Vec3::zeros(), |acc, e| acc + e.momentum())
}
