pub mod config;
pub mod entity;
pub mod world;

// Re-export from grainfall-simulation so callers need a single dependency
pub mod simulation {
    pub use grainfall_simulation::*;
}

pub use config::SimConfig;
pub use world::World;
