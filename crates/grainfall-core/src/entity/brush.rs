//! Circular brush that stamps the selected material into the grid

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::BrushConfig;
use crate::simulation::Materials;
use crate::world::{Grid, SimStats, WorldRng};

/// How the brush fills its disc
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    /// Every cell of the disc
    #[default]
    Paint,
    /// A random fraction of the disc each frame
    Spray,
}

/// Brush state: what to paint, how big, and where
#[derive(Clone, Debug)]
pub struct Brush {
    material: u16,
    radius: f32,
    min_radius: f32,
    max_radius: f32,
    spray_density: f32,
    mode: BrushMode,
    /// Pointer position in grid cells
    center: Option<IVec2>,
    /// Primary pointer action held
    active: bool,
}

impl Brush {
    pub fn new(config: &BrushConfig) -> Self {
        Self {
            material: config.initial_material,
            radius: clamp_radius(config.initial_radius, config.min_radius, config.max_radius),
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            spray_density: config.spray_density,
            mode: BrushMode::Paint,
            center: None,
            active: false,
        }
    }

    pub fn material(&self) -> u16 {
        self.material
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn center(&self) -> Option<IVec2> {
        self.center
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    pub fn set_center(&mut self, center: Option<IVec2>) {
        self.center = center;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Select a material, clamping ids past the end of the registry
    pub fn select_material(&mut self, material_id: u16, materials: &Materials) {
        let last = materials.count().saturating_sub(1) as u16;
        let id = if materials.contains(material_id) {
            material_id
        } else {
            log::warn!(
                "Material {} not registered, selecting {} instead",
                material_id,
                last
            );
            last
        };

        if id != self.material {
            log::debug!("Selected material {} ({})", id, materials.get_name(id));
        }
        self.material = id;
    }

    /// Grow or shrink the brush; the result is clamped, never rejected
    pub fn resize(&mut self, delta: f32) {
        let radius = clamp_radius(self.radius + delta, self.min_radius, self.max_radius);
        if radius != self.radius {
            log::debug!("Brush radius {} -> {}", self.radius, radius);
        }
        self.radius = radius;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = clamp_radius(radius, self.min_radius, self.max_radius);
    }

    /// Offsets covered by the disc, relative to the center.
    ///
    /// The square `[-half, end]²` is scanned with `half = floor(r / 2)` and
    /// `end = half - fract(r)` (truncated), keeping offsets within `r / 2`.
    pub fn footprint(&self) -> impl Iterator<Item = IVec2> {
        let reach = self.radius / 2.0;
        let half = reach.floor() as i32;
        let end = (half as f32 - self.radius.fract()) as i32;

        (-half..=end).flat_map(move |dy| {
            (-half..=end).filter_map(move |dx| {
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                (dist <= reach).then_some(IVec2::new(dx, dy))
            })
        })
    }

    /// Write the selected material into scratch around the pointer.
    ///
    /// Runs between movement resolution and commit, and only while the brush
    /// is active with the pointer over the grid. The center cell is always
    /// written. Returns the number of cells written.
    pub fn stamp<R: WorldRng>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> usize {
        let Some(center) = self.center else {
            return 0;
        };
        if !self.active || !grid.in_bounds(center.x, center.y) {
            return 0;
        }

        let mut painted = 0;
        for offset in self.footprint() {
            let cell = center + offset;
            if !grid.in_bounds(cell.x, cell.y) {
                continue;
            }
            if self.mode == BrushMode::Spray && !rng.check_probability(self.spray_density) {
                continue;
            }
            grid.scratch_set(cell.x, cell.y, self.material);
            stats.record_pixel_painted();
            painted += 1;
        }

        grid.scratch_set(center.x, center.y, self.material);
        stats.record_pixel_painted();
        painted + 1
    }

    /// Closed outline polygon of the brush in grid units, for overlay drawing
    pub fn outline(&self, vertices: usize) -> Vec<Vec2> {
        let Some(center) = self.center else {
            return Vec::new();
        };
        if vertices < 2 {
            return vec![center.as_vec2()];
        }

        let reach = self.radius / 2.0;
        (0..vertices)
            .map(|i| {
                let angle = i as f32 / (vertices - 1) as f32 * std::f32::consts::TAU;
                center.as_vec2() + Vec2::new(angle.cos(), angle.sin()) * reach
            })
            .collect()
    }
}

/// Like `f32::clamp`, but tolerates an inverted or NaN range instead of
/// panicking. The upper bound wins when the range is inverted.
fn clamp_radius(radius: f32, min: f32, max: f32) -> f32 {
    radius.max(min).min(max)
}
