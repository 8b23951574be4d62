//! Double-buffered material grid
//!
//! The authoritative grid is what the world looks like between steps. During
//! a step every write goes to the scratch buffer, which is copied back on
//! commit. Reads during movement resolution always come from the
//! authoritative grid.

use crate::simulation::MaterialId;

/// Authoritative grid plus scratch buffer, both row-major
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u16>,
    scratch: Vec<u16>,
    /// Scratch cells that already received a relocated particle this step
    claimed: Vec<bool>,
    #[cfg(debug_assertions)]
    in_step: bool,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        let area = width * height;
        Self {
            width,
            height,
            cells: vec![MaterialId::ERASER; area],
            scratch: vec![MaterialId::ERASER; area],
            claimed: vec![false; area],
            #[cfg(debug_assertions)]
            in_step: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Is (x, y) inside `[0, width) x [0, height)`
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Flat row-major index, `None` outside the grid
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Authoritative cells, row-major
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Authoritative read; outside the grid reads as empty
    pub fn get(&self, x: i32, y: i32) -> u16 {
        self.index(x, y)
            .map_or(MaterialId::ERASER, |idx| self.cells[idx])
    }

    /// Authoritative write for setup between steps; ignored outside the grid
    pub fn set(&mut self, x: i32, y: i32, material_id: u16) {
        #[cfg(debug_assertions)]
        debug_assert!(!self.in_step, "authoritative write during a step");

        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = material_id;
        }
    }

    /// Copy the authoritative grid into scratch and forget last step's claims
    pub fn init_step(&mut self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(!self.in_step, "init_step called twice without commit");
            self.in_step = true;
        }

        self.scratch.copy_from_slice(&self.cells);
        self.claimed.fill(false);
    }

    /// Publish scratch as the new authoritative grid
    pub fn commit_step(&mut self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(self.in_step, "commit_step called without init_step");
            self.in_step = false;
        }

        self.cells.copy_from_slice(&self.scratch);
    }

    pub fn scratch_get(&self, x: i32, y: i32) -> u16 {
        self.index(x, y)
            .map_or(MaterialId::ERASER, |idx| self.scratch[idx])
    }

    /// Scratch write; ignored outside the grid
    pub fn scratch_set(&mut self, x: i32, y: i32, material_id: u16) {
        if let Some(idx) = self.index(x, y) {
            self.scratch[idx] = material_id;
        }
    }

    /// Swap the contents of two authoritative cells into scratch
    pub(crate) fn scratch_swap(&mut self, from: usize, to: usize) {
        self.scratch[to] = self.cells[from];
        self.scratch[from] = self.cells[to];
    }

    /// Reserve a scratch cell as a relocation target. Only the first claim
    /// in a step succeeds.
    pub(crate) fn claim(&mut self, idx: usize) -> bool {
        !std::mem::replace(&mut self.claimed[idx], true)
    }

    /// Reset both buffers to empty
    pub fn clear(&mut self) {
        self.cells.fill(MaterialId::ERASER);
        self.scratch.fill(MaterialId::ERASER);
        self.claimed.fill(false);
    }

    pub fn count_non_empty(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&id| id != MaterialId::ERASER)
            .count()
    }

    /// Number of cells holding each material id, indexed by id
    pub fn material_counts(&self, material_count: usize) -> Vec<usize> {
        let mut counts = vec![0; material_count];
        for &id in &self.cells {
            if let Some(count) = counts.get_mut(id as usize) {
                *count += 1;
            }
        }
        counts
    }
}
