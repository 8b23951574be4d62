//! Input snapshot handed over by the windowing layer each frame

use glam::IVec2;

/// Material hotkeys in selection order; key `i` selects material id `i`
pub const MATERIAL_KEYS: [&str; 11] = ["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// Scroll deltas smaller than this are treated as no scroll
pub const SCROLL_DEADZONE: f32 = 0.05;

/// Tracks current input state for painting
#[derive(Debug, Clone)]
pub struct InputState {
    /// Pointer position in window pixels, `None` when outside the window
    pub pointer_pixel: Option<IVec2>,

    /// Primary button held: paint with the selected material
    pub paint_pressed: bool,

    // Wheel movement accumulated this frame (positive grows the brush)
    scroll_delta: f32,

    // Which material hotkeys are currently held
    material_keys_held: [bool; MATERIAL_KEYS.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pointer_pixel: None,
            paint_pressed: false,
            scroll_delta: 0.0,
            material_keys_held: [false; MATERIAL_KEYS.len()],
        }
    }

    /// Index of a material hotkey by its key name
    pub fn material_key_index(key: &str) -> Option<usize> {
        MATERIAL_KEYS.iter().position(|&k| k == key)
    }

    /// Record a key press; keys that are not material hotkeys are ignored
    pub fn press_key(&mut self, key: &str) {
        if let Some(idx) = Self::material_key_index(key) {
            self.material_keys_held[idx] = true;
        }
    }

    pub fn release_key(&mut self, key: &str) {
        if let Some(idx) = Self::material_key_index(key) {
            self.material_keys_held[idx] = false;
        }
    }

    /// Add a wheel delta, ignoring jitter below the deadzone
    pub fn add_scroll(&mut self, delta: f32) {
        if delta.abs() >= SCROLL_DEADZONE {
            self.scroll_delta += delta;
        }
    }

    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Forget per-frame input (scroll) once the frame has consumed it
    pub fn end_frame(&mut self) {
        self.scroll_delta = 0.0;
    }

    /// Material picked by the held hotkeys, limited to the first
    /// `material_count` keys. The highest held key wins.
    pub fn selected_material(&self, material_count: usize) -> Option<u16> {
        let usable = MATERIAL_KEYS.len().min(material_count);
        self.material_keys_held[..usable]
            .iter()
            .rposition(|&held| held)
            .map(|idx| idx as u16)
    }

    /// Pointer converted to grid cell coordinates
    pub fn pointer_cell(&self, pixel_scale: u32) -> Option<IVec2> {
        let scale = pixel_scale.max(1) as i32;
        self.pointer_pixel
            .map(|p| IVec2::new(p.x.div_euclid(scale), p.y.div_euclid(scale)))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
