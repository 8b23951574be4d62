//! World management - grid storage, movement and frame stepping

mod ca_update;
mod grid;
pub mod rng_trait;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use ca_update::CellularAutomataUpdater;
pub use grid::Grid;
pub use rng_trait::WorldRng;
pub use stats::{NoopStats, SimStats, StepCounters};
pub use world::World;
