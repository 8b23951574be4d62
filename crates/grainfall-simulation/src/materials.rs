//! Material definitions and registry

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{MaterialError, MovementRule};

/// Built-in material IDs
pub struct MaterialId;

impl MaterialId {
    /// Empty space; painting it erases
    pub const ERASER: u16 = 0;
    pub const WALL: u16 = 1;
    pub const SAND: u16 = 2;
    pub const WATER: u16 = 3;
}

/// Tagged effects a material can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialEffect {
    /// Classifies the material as a liquid
    Liquid,
}

/// Definition of a material's properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    pub id: u16,
    pub name: String,

    /// Display color (RGBA)
    pub color: [u8; 4],

    /// Candidate relocations, tried in order; first success wins
    #[serde(default)]
    pub rules: Vec<MovementRule>,

    /// Effect tags; only the first one classifies the material
    #[serde(default)]
    pub effects: Vec<MaterialEffect>,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            id: 0,
            name: "unknown".to_string(),
            color: [255, 0, 255, 255],
            rules: Vec::new(),
            effects: Vec::new(),
        }
    }
}

impl MaterialDef {
    /// Does this material never move on its own
    pub fn is_static(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Registry of all materials
#[derive(Clone, Debug)]
pub struct Materials {
    materials: Vec<MaterialDef>,
}

impl Materials {
    pub fn new() -> Self {
        let mut materials = Self {
            materials: Vec::new(),
        };
        materials.register_defaults();
        materials
    }

    fn register_defaults(&mut self) {
        // Eraser (empty space)
        self.register(MaterialDef {
            id: MaterialId::ERASER,
            name: "eraser".to_string(),
            color: [0, 0, 0, 255],
            ..Default::default()
        });

        // Wall - never moves
        self.register(MaterialDef {
            id: MaterialId::WALL,
            name: "wall".to_string(),
            color: [127, 127, 127, 255],
            ..Default::default()
        });

        // Sand - falls, slides off slopes
        self.register(MaterialDef {
            id: MaterialId::SAND,
            name: "sand".to_string(),
            color: [255, 255, 200, 255],
            rules: vec![
                MovementRule::FALL,
                MovementRule::SLIDE_LEFT,
                MovementRule::SLIDE_RIGHT,
            ],
            ..Default::default()
        });

        // Water - falls like sand, then spreads sideways
        self.register(MaterialDef {
            id: MaterialId::WATER,
            name: "water".to_string(),
            color: [64, 164, 223, 255],
            rules: vec![
                MovementRule::FALL,
                MovementRule::SLIDE_LEFT,
                MovementRule::SLIDE_RIGHT,
                MovementRule::FLOW_LEFT,
                MovementRule::FLOW_RIGHT,
            ],
            effects: vec![MaterialEffect::Liquid],
        });
    }

    /// Built-ins are registered in id order
    fn register(&mut self, material: MaterialDef) {
        debug_assert_eq!(material.id as usize, self.materials.len());
        self.materials.push(material);
    }

    /// Build a registry from an explicit table, validating it once.
    ///
    /// Entry `i` must carry id `i`; entry 0 is the eraser.
    pub fn from_defs(defs: Vec<MaterialDef>) -> Result<Self, MaterialError> {
        if defs.is_empty() {
            return Err(MaterialError::Empty);
        }
        if defs.len() > u16::MAX as usize {
            return Err(MaterialError::TooMany { count: defs.len() });
        }

        let mut names = HashSet::new();
        for (index, def) in defs.iter().enumerate() {
            if def.id as usize != index {
                return Err(MaterialError::IdMismatch { index, id: def.id });
            }
            if index == MaterialId::ERASER as usize && !def.rules.is_empty() {
                return Err(MaterialError::EraserHasRules {
                    name: def.name.clone(),
                });
            }
            if let Some(rule) = def.rules.iter().position(MovementRule::is_degenerate) {
                return Err(MaterialError::DegenerateRule {
                    name: def.name.clone(),
                    rule,
                });
            }
            if !names.insert(def.name.as_str()) {
                return Err(MaterialError::DuplicateName {
                    name: def.name.clone(),
                });
            }
        }

        log::info!("Loaded {} materials", defs.len());
        Ok(Self { materials: defs })
    }

    /// Parse a RON list of material definitions
    pub fn from_ron_str(source: &str) -> Result<Self, MaterialError> {
        let defs: Vec<MaterialDef> = ron::from_str(source)?;
        Self::from_defs(defs)
    }

    /// Load a RON material table from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MaterialError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&source)
    }

    /// Number of registered materials
    pub fn count(&self) -> usize {
        self.materials.len()
    }

    /// Is this id registered
    pub fn contains(&self, id: u16) -> bool {
        (id as usize) < self.materials.len()
    }

    /// Empty for occupancy purposes: the eraser or anything unregistered
    pub fn is_empty_id(&self, id: u16) -> bool {
        id == MaterialId::ERASER || !self.contains(id)
    }

    /// Get material definition by ID, falling back to the eraser
    pub fn get(&self, id: u16) -> &MaterialDef {
        self.materials
            .get(id as usize)
            .unwrap_or(&self.materials[0])
    }

    /// Get color for a material
    pub fn get_color(&self, id: u16) -> [u8; 4] {
        self.get(id).color
    }

    /// Get display name for a material
    pub fn get_name(&self, id: u16) -> &str {
        &self.get(id).name
    }

    pub fn find_by_name(&self, name: &str) -> Option<u16> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.id)
    }

    /// True iff the material's first effect is `Liquid`
    pub fn is_liquid(&self, id: u16) -> bool {
        if self.is_empty_id(id) {
            return false;
        }
        self.get(id).effects.first() == Some(&MaterialEffect::Liquid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.iter()
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}
