pub mod brush;
pub mod input;

pub use brush::{Brush, BrushMode};
pub use input::InputState;
