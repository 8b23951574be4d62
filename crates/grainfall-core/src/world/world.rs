//! World - owns the grid, the material table and the brush, and steps them

use anyhow::Result;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::ca_update::CellularAutomataUpdater;
use super::{Grid, SimStats};
use crate::config::SimConfig;
use crate::entity::{Brush, InputState};
use crate::simulation::Materials;

/// The simulation state, stepped once per rendered frame
pub struct World {
    /// Authoritative grid and scratch buffer
    grid: Grid,

    /// Material definitions, read-only after construction
    materials: Materials,

    /// Brush driven by pointer input
    brush: Brush,

    /// Spray brush randomness
    rng: Xoshiro256StarStar,

    /// Window pixels per grid cell
    pixel_scale: u32,

    /// Number of committed steps
    frame: u64,
}

impl World {
    /// Build a world from config, loading its material table
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let materials = config.load_materials()?;
        Self::with_materials(config, materials)
    }

    /// Build a world around an already validated material table
    pub fn with_materials(config: &SimConfig, materials: Materials) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_width(), config.grid_height());

        let mut brush = Brush::new(&config.brush);
        brush.select_material(brush.material(), &materials);

        log::info!(
            "Created {}x{} world with {} materials",
            grid.width(),
            grid.height(),
            materials.count()
        );

        Ok(Self {
            grid,
            materials,
            brush,
            rng: Xoshiro256StarStar::seed_from_u64(config.seed),
            pixel_scale: config.pixel_scale,
            frame: 0,
        })
    }

    /// Read-only view of the authoritative grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> u16 {
        self.grid.get(x, y)
    }

    /// Place a material directly, between steps
    pub fn set_pixel(&mut self, x: i32, y: i32, material_id: u16) {
        self.grid.set(x, y, material_id);
    }

    /// Display color of a cell; unknown ids render as the eraser
    pub fn pixel_color(&self, x: i32, y: i32) -> [u8; 4] {
        self.materials.get_color(self.grid.get(x, y))
    }

    pub fn selected_material_name(&self) -> &str {
        self.materials.get_name(self.brush.material())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        log::info!("World cleared");
    }

    /// Fold one frame of input into the brush
    pub fn apply_input(&mut self, input: &InputState) {
        if let Some(id) = input.selected_material(self.materials.count()) {
            self.brush.select_material(id, &self.materials);
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            self.brush.resize(scroll);
        }

        self.brush.set_center(input.pointer_cell(self.pixel_scale));
        self.brush.set_active(input.paint_pressed);
    }

    /// Run one simulation step: copy, resolve, paint, commit.
    ///
    /// Painting happens after movement so fresh paint holds still for the
    /// frame it was placed in.
    pub fn step(&mut self, stats: &mut dyn SimStats) {
        self.grid.init_step();

        let moved = CellularAutomataUpdater::resolve(&mut self.grid, &self.materials, stats);
        let painted = self.brush.stamp(&mut self.grid, &mut self.rng, stats);

        self.grid.commit_step();
        stats.record_step();
        self.frame += 1;

        log::trace!(
            "Frame {}: {} moved, {} painted",
            self.frame,
            moved,
            painted
        );
    }

    /// Apply input, step once, then clear the input's per-frame state so
    /// the same scroll is not applied again next frame
    pub fn update(&mut self, input: &mut InputState, stats: &mut dyn SimStats) {
        self.apply_input(input);
        self.step(stats);
        input.end_frame();
    }
}
