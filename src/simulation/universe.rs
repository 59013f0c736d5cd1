//! One simulation tick over the whole entity collection
//!
//! `Universe::step` takes the collection by value and hands it back when the
//! tick is done, so no two steps can ever run against the same collection.
//! The order inside a tick is fixed:
//! 1. collisions are merged,
//! 2. gravity is accumulated on the survivors,
//! 3. every survivor is integrated (in parallel).

use tracing::debug;

use crate::simulation::collisions::resolve_collisions_with_report;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::{integrate, IntegratorConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{total_mass, Entity};

/// Physics settings plus the active force laws
pub struct Universe {
    pub parameters: Parameters,
    pub integrator: IntegratorConfig,
    pub forces: ForceSet,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub entities_in: usize,
    pub entities_out: usize,
    pub merges: usize,
    pub total_mass: f64,
}

impl Universe {
    /// Universe with direct Newtonian gravity built from `parameters`
    pub fn new(parameters: Parameters, integrator: IntegratorConfig) -> Self {
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.effective_g(),
            eps2: parameters.eps2,
        });
        Self::with_forces(parameters, integrator, forces)
    }

    pub fn with_forces(parameters: Parameters, integrator: IntegratorConfig, forces: ForceSet) -> Self {
        Self {
            parameters,
            integrator,
            forces,
        }
    }

    pub fn step(&self, entities: Vec<Entity>) -> Vec<Entity> {
        self.step_with_report(entities).0
    }

    pub fn step_with_report(&self, entities: Vec<Entity>) -> (Vec<Entity>, StepReport) {
        let entities_in = entities.len();
        if entities.is_empty() {
            let report = StepReport {
                entities_in,
                entities_out: 0,
                merges: 0,
                total_mass: 0.0,
            };
            return (entities, report);
        }

        let (mut entities, collisions) = resolve_collisions_with_report(entities);
        self.forces.apply(&mut entities);
        integrate(self.integrator, &mut entities, self.parameters.dt);

        let report = StepReport {
            entities_in,
            entities_out: entities.len(),
            merges: collisions.merges,
            total_mass: total_mass(&entities),
        };
        debug!(
            entities_in = report.entities_in,
            entities_out = report.entities_out,
            merges = report.merges,
            total_mass = report.total_mass,
            "universe step"
        );
        (entities, report)
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(Parameters::default(), IntegratorConfig::default())
    }
}
