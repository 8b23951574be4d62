//! Material table validation errors

use thiserror::Error;

/// Reasons a material table is rejected at load time
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("material table is empty")]
    Empty,

    #[error("material at index {index} declares id {id}")]
    IdMismatch { index: usize, id: u16 },

    #[error("material 0 ({name}) is the eraser and cannot have movement rules")]
    EraserHasRules { name: String },

    #[error("material {name} rule {rule} references its own cell")]
    DegenerateRule { name: String, rule: usize },

    #[error("material name {name} is used more than once")]
    DuplicateName { name: String },

    #[error("material table has {count} entries, more than ids can address")]
    TooMany { count: usize },

    #[error("failed to parse material table: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to read material table: {0}")]
    Io(#[from] std::io::Error),
}
