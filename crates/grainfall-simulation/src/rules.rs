//! Movement rules
//!
//! A rule pairs a direction to look for free space with a direction to
//! relocate into. Offsets are relative to the moving cell, with +y pointing
//! down the grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A candidate relocation for a material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRule {
    /// Offset that must be free for the rule to apply
    pub check: IVec2,
    /// Offset the content relocates into when the rule applies
    pub movement: IVec2,
}

impl MovementRule {
    pub const fn new(check: IVec2, movement: IVec2) -> Self {
        Self { check, movement }
    }

    /// Rule that looks and moves in the same direction
    pub const fn straight(offset: IVec2) -> Self {
        Self::new(offset, offset)
    }

    /// Fall straight down
    pub const FALL: MovementRule = MovementRule::straight(IVec2::new(0, 1));

    /// Look left, slide down-left
    pub const SLIDE_LEFT: MovementRule = MovementRule::new(IVec2::new(-1, 0), IVec2::new(-1, 1));

    /// Look right, slide down-right
    pub const SLIDE_RIGHT: MovementRule = MovementRule::new(IVec2::new(1, 0), IVec2::new(1, 1));

    /// Flow sideways to the left
    pub const FLOW_LEFT: MovementRule = MovementRule::straight(IVec2::new(-1, 0));

    /// Flow sideways to the right
    pub const FLOW_RIGHT: MovementRule = MovementRule::straight(IVec2::new(1, 0));

    /// A rule referencing the cell itself can never fire
    pub fn is_degenerate(&self) -> bool {
        self.check == IVec2::ZERO || self.movement == IVec2::ZERO
    }
}
