pub mod states;
pub mod params;
pub mod forces;
pub mod collisions;
pub mod integrator;
pub mod universe;
pub mod scenario;
pub mod runner;
