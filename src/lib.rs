pub mod math;
pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod telemetry;

pub use math::{Mat3, Vec3};
pub use error::SimulationError;

pub use simulation::states::{Entity, Spatial};
pub use simulation::params::Parameters;
pub use simulation::forces::{ForceLaw, ForceSet, NewtonianGravity};
pub use simulation::collisions::{resolve_collisions, CollisionReport};
pub use simulation::integrator::{integrate, IntegratorConfig};
pub use simulation::universe::{StepReport, Universe};
pub use simulation::scenario::Scenario;
pub use simulation::runner::{Mailbox, StepWorker};

pub use configuration::config::{EngineConfig, ParametersConfig, CameraConfig, BodyConfig, GeneratorConfig, ScenarioConfig};

pub use visualization::camera::Camera;
pub use visualization::projection::{project, project_point, Projected, ScreenPoint, Viewport};
pub use visualization::frame::Frame;

pub use benchmark::benchmark::{bench_gravity, bench_step, bench_step_curve};
