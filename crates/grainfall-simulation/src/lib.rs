//! Material simulation data for Grainfall
//!
//! This crate provides the foundational data types for material simulation:
//! - Material definitions (MaterialId, MaterialDef, Materials)
//! - Material effect tags (MaterialEffect)
//! - Movement rules (MovementRule)
//! - Load-time validation errors (MaterialError)

mod error;
mod materials;
mod rules;

pub use error::MaterialError;
pub use materials::{MaterialDef, MaterialEffect, MaterialId, Materials};
pub use rules::MovementRule;
