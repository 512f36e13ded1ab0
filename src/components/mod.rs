pub mod color_chooser;
pub mod tool_button;

pub use color_chooser::ColorChooser;
pub use tool_button::{ToolButton, color_swatch};
