//! Cellular automata update logic - rule-driven material movement

use glam::IVec2;

use super::{Grid, SimStats};
use crate::simulation::{Materials, MovementRule};

/// Cellular automata updater - resolves one movement pass over the grid
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Evaluate every cell against its material's rules.
    ///
    /// Must run between `Grid::init_step` and `Grid::commit_step`. Cells are
    /// visited row by row, top to bottom, left to right; that order decides
    /// which particle wins a contested target. Returns the number of moves.
    pub fn resolve(grid: &mut Grid, materials: &Materials, stats: &mut dyn SimStats) -> usize {
        let mut moved = 0;

        let height = i32::try_from(grid.height()).unwrap_or(i32::MAX);
        let width = i32::try_from(grid.width()).unwrap_or(i32::MAX);

        for y in 0..height {
            for x in 0..width {
                let id = grid.get(x, y);
                if materials.is_empty_id(id) {
                    continue;
                }

                let pos = IVec2::new(x, y);
                for rule in &materials.get(id).rules {
                    if Self::try_rule(grid, materials, pos, rule) {
                        stats.record_pixel_moved();
                        moved += 1;
                        break;
                    }
                }
            }
        }

        log::trace!("Movement pass relocated {} pixels", moved);
        moved
    }

    /// Apply a single rule for the particle at `pos`. Returns true if it moved.
    fn try_rule(grid: &mut Grid, materials: &Materials, pos: IVec2, rule: &MovementRule) -> bool {
        if !Self::is_free(grid, materials, pos + rule.check) {
            return false;
        }

        let target = pos + rule.movement;
        if !Self::is_free(grid, materials, target) {
            return false;
        }

        let (Some(from), Some(to)) = (grid.index(pos.x, pos.y), grid.index(target.x, target.y))
        else {
            return false;
        };

        // An earlier particle may already have moved into the same empty cell
        if !grid.claim(to) {
            return false;
        }

        grid.scratch_swap(from, to);
        true
    }

    /// In bounds and empty in the authoritative grid
    fn is_free(grid: &Grid, materials: &Materials, pos: IVec2) -> bool {
        grid.in_bounds(pos.x, pos.y) && materials.is_empty_id(grid.get(pos.x, pos.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{MaterialDef, MaterialId};
    use crate::world::{NoopStats, StepCounters};

    fn resolve_once(grid: &mut Grid, materials: &Materials) -> usize {
        grid.init_step();
        let moved = CellularAutomataUpdater::resolve(grid, materials, &mut NoopStats);
        grid.commit_step();
        moved
    }

    fn two_rule_materials() -> Materials {
        Materials::from_defs(vec![
            MaterialDef {
                id: 0,
                name: "eraser".to_string(),
                ..Default::default()
            },
            MaterialDef {
                id: 1,
                name: "drifter".to_string(),
                rules: vec![
                    MovementRule::straight(IVec2::new(1, 0)),
                    MovementRule::straight(IVec2::new(-1, 0)),
                ],
                ..Default::default()
            },
        ])
        .expect("valid table")
    }

    #[test]
    fn test_sand_falls_one_cell() {
        let materials = Materials::new();
        let mut grid = Grid::new(10, 10);
        grid.set(5, 0, MaterialId::SAND);

        assert_eq!(resolve_once(&mut grid, &materials), 1);
        assert_eq!(grid.get(5, 0), MaterialId::ERASER);
        assert_eq!(grid.get(5, 1), MaterialId::SAND);
    }

    #[test]
    fn test_sand_rests_on_floor() {
        let materials = Materials::new();
        let mut grid = Grid::new(10, 10);
        grid.set(5, 9, MaterialId::SAND);

        assert_eq!(resolve_once(&mut grid, &materials), 0);
        assert_eq!(grid.get(5, 9), MaterialId::SAND);
    }

    #[test]
    fn test_wall_never_moves() {
        let materials = Materials::new();
        let mut grid = Grid::new(5, 5);
        grid.set(2, 0, MaterialId::WALL);

        for _ in 0..5 {
            resolve_once(&mut grid, &materials);
        }
        assert_eq!(grid.get(2, 0), MaterialId::WALL);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let materials = two_rule_materials();
        let mut grid = Grid::new(5, 1);
        grid.set(2, 0, 1);

        resolve_once(&mut grid, &materials);
        assert_eq!(grid.get(3, 0), 1);
        assert_eq!(grid.get(1, 0), MaterialId::ERASER);
        assert_eq!(grid.count_non_empty(), 1);
    }

    #[test]
    fn test_later_rule_used_when_first_blocked() {
        let materials = two_rule_materials();
        let mut grid = Grid::new(5, 1);
        grid.set(4, 0, 1);

        resolve_once(&mut grid, &materials);
        assert_eq!(grid.get(3, 0), 1);
        assert_eq!(grid.get(4, 0), MaterialId::ERASER);
    }

    #[test]
    fn test_check_and_move_are_independent() {
        // Sand whose straight-down cell is blocked slides diagonally only if
        // the side it looks at is free
        let materials = Materials::new();
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, MaterialId::SAND);
        grid.set(1, 2, MaterialId::WALL);
        grid.set(0, 1, MaterialId::WALL);

        resolve_once(&mut grid, &materials);
        assert_eq!(grid.get(2, 2), MaterialId::SAND);
        assert_eq!(grid.get(1, 1), MaterialId::ERASER);
    }

    #[test]
    fn test_reads_use_pre_step_grid() {
        // The upper grain sees the lower grain still in place and stays put
        let materials = Materials::new();
        let mut grid = Grid::new(1, 4);
        grid.set(0, 0, MaterialId::SAND);
        grid.set(0, 1, MaterialId::SAND);

        resolve_once(&mut grid, &materials);
        assert_eq!(grid.get(0, 0), MaterialId::SAND);
        assert_eq!(grid.get(0, 1), MaterialId::ERASER);
        assert_eq!(grid.get(0, 2), MaterialId::SAND);
    }

    #[test]
    fn test_contested_target_goes_to_first_in_scan_order() {
        // Both grains want to slide into (1, 1); the left one is scanned first
        let materials = Materials::new();
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, MaterialId::SAND);
        grid.set(2, 0, MaterialId::SAND);
        grid.set(0, 1, MaterialId::WALL);
        grid.set(2, 1, MaterialId::WALL);

        let moved = resolve_once(&mut grid, &materials);
        assert_eq!(moved, 1);
        assert_eq!(grid.get(1, 1), MaterialId::SAND);
        assert_eq!(grid.get(0, 0), MaterialId::ERASER);
        assert_eq!(grid.get(2, 0), MaterialId::SAND);
        assert_eq!(grid.material_counts(materials.count())[MaterialId::SAND as usize], 2);
    }

    #[test]
    fn test_unregistered_ids_are_inert_and_empty() {
        let materials = Materials::new();
        let mut grid = Grid::new(1, 3);
        grid.set(0, 0, MaterialId::SAND);
        grid.set(0, 1, 999);

        resolve_once(&mut grid, &materials);
        assert_eq!(grid.get(0, 1), MaterialId::SAND);
        // The swap carries the unknown id back into the vacated cell
        assert_eq!(grid.get(0, 0), 999);
    }

    #[test]
    fn test_moves_are_recorded() {
        let materials = Materials::new();
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, MaterialId::SAND);
        grid.set(3, 0, MaterialId::WATER);

        let mut stats = StepCounters::default();
        grid.init_step();
        CellularAutomataUpdater::resolve(&mut grid, &materials, &mut stats);
        grid.commit_step();
        assert_eq!(stats.pixels_moved, 2);
    }

    #[test]
    fn test_water_spreads_sideways() {
        let materials = Materials::new();
        let mut grid = Grid::new(3, 1);
        grid.set(1, 0, MaterialId::WATER);

        resolve_once(&mut grid, &materials);
        assert_eq!(grid.get(0, 0), MaterialId::WATER);
        assert_eq!(grid.get(1, 0), MaterialId::ERASER);
    }
}
