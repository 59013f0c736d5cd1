//! Force contributors for the n-body engine
//!
//! Defines the `ForceLaw` trait, the `ForceSet` that sums every registered law,
//! and direct pairwise Newtonian gravity

use crate::math::Vec3;
use crate::simulation::states::Entity;

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per entity
#[derive(Default)]
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceLaw + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total forces for all entities
    /// - `out[i]` is the sum of contributions from every term
    pub fn compute(&self, entities: &[Entity]) -> Vec<Vec3> {
        let mut out = vec![Vec3::zeros(); entities.len()];
        for term in &self.terms {
            term.accumulate(entities, &mut out);
        }
        out
    }

    /// Add this tick's forces onto each entity's accumulator
    pub fn apply(&self, entities: &mut [Entity]) {
        if entities.is_empty() || self.is_empty() {
            return;
        }
        let forces = self.compute(entities);
        for (e, f) in entities.iter_mut().zip(forces) {
            e.apply_force(f);
        }
    }
}

/// A source of force acting on the entity collection
/// Implementations add their contribution into `out[i]` for each entity
pub trait ForceLaw: Send + Sync {
    fn accumulate(&self, entities: &[Entity], out: &mut [Vec3]);
}

/// Direct O(n^2) Newtonian gravity
///
/// Coincident pairs (`d == 0`) have no defined direction and are skipped, as
/// are pairs so close that the force coefficient overflows to infinity.
/// `eps2` is added to `d^2` in the magnitude only; at the default of zero the
/// force is exactly `G * m_i * m_j / d^2`.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // effective gravitational constant
    pub eps2: f64, // softening
}

impl ForceLaw for NewtonianGravity {
    fn accumulate(&self, entities: &[Entity], out: &mut [Vec3]) {
        let n = entities.len();
        if n < 2 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let ei = &entities[i];
            for j in (i + 1)..n {
                let ej = &entities[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = ej.position - ei.position;
                let d2 = r.norm_squared();
                if d2 == 0.0 {
                    continue;
                }
                let d = d2.sqrt();

                let magnitude = self.G * ei.mass() * ej.mass() / (d2 + self.eps2);
                let coeff = magnitude / d;
                if !coeff.is_finite() {
                    continue;
                }
                let f = r * coeff;

                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
