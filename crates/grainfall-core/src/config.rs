//! Startup configuration
//!
//! Everything here is fixed once the world is built: grid size, pixel
//! scale, brush limits and the material table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::simulation::Materials;

/// Main simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Render target width in window pixels
    pub window_width: u32,
    /// Render target height in window pixels
    pub window_height: u32,
    /// Window pixels per grid cell
    pub pixel_scale: u32,

    #[serde(default)]
    pub brush: BrushConfig,

    /// Seed for the spray brush RNG
    #[serde(default)]
    pub seed: u64,

    /// RON material table; built-in materials when absent
    #[serde(default)]
    pub materials_path: Option<PathBuf>,
}

/// Brush limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushConfig {
    pub min_radius: f32,
    pub max_radius: f32,
    pub initial_radius: f32,
    /// Material selected at startup
    pub initial_material: u16,
    /// Fraction of disc cells written per frame in spray mode
    pub spray_density: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            pixel_scale: 4,
            brush: BrushConfig::default(),
            seed: 0,
            materials_path: None,
        }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_radius: 1.0,
            max_radius: 64.0,
            initial_radius: 16.0,
            initial_material: 1,
            spray_density: 0.1,
        }
    }
}

impl SimConfig {
    /// Grid columns (window width divided by the pixel scale)
    pub fn grid_width(&self) -> usize {
        (self.window_width / self.pixel_scale.max(1)) as usize
    }

    /// Grid rows (window height divided by the pixel scale)
    pub fn grid_height(&self) -> usize {
        (self.window_height / self.pixel_scale.max(1)) as usize
    }

    /// Parse and validate a RON config
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: SimConfig = ron::from_str(source).context("Failed to parse RON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_ron_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Reject configurations that cannot produce a usable world
    pub fn validate(&self) -> Result<()> {
        if self.pixel_scale == 0 {
            anyhow::bail!("pixel_scale must be at least 1");
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            anyhow::bail!(
                "window {}x{} at pixel scale {} leaves no grid cells",
                self.window_width,
                self.window_height,
                self.pixel_scale
            );
        }
        // Cell coordinates are i32
        let max_cells = i32::MAX as usize;
        if self.grid_width() > max_cells || self.grid_height() > max_cells {
            anyhow::bail!(
                "grid {}x{} exceeds the {} cell coordinate limit",
                self.grid_width(),
                self.grid_height(),
                i32::MAX
            );
        }
        let brush = &self.brush;
        if !(brush.min_radius > 0.0 && brush.min_radius <= brush.max_radius) {
            anyhow::bail!(
                "brush radius range [{}, {}] is invalid",
                brush.min_radius,
                brush.max_radius
            );
        }
        if !(0.0..=1.0).contains(&brush.spray_density) {
            anyhow::bail!("spray_density {} is outside [0, 1]", brush.spray_density);
        }
        Ok(())
    }

    /// Material registry named by this config
    pub fn load_materials(&self) -> Result<Materials> {
        match &self.materials_path {
            Some(path) => Materials::from_file(path)
                .inspect_err(|e| log::warn!("Rejected material table {}: {}", path.display(), e))
                .with_context(|| format!("Failed to load materials: {}", path.display())),
            None => Ok(Materials::new()),
        }
    }
}
