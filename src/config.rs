use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::tool::{ActiveTool, ToolState};

/// Canvas background, also the color the eraser paints with.
pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

pub const DEFAULT_PEN_COLOR: Color32 = Color32::BLACK;
pub const DEFAULT_PEN_WIDTH: u32 = 5;

/// Range of the pen-size slider. Widths outside it are clamped.
pub const MIN_PEN_WIDTH: u32 = 1;
pub const MAX_PEN_WIDTH: u32 = 50;

/// Tag shared by every shape preview item on the canvas.
pub const PREVIEW_TAG: &str = "preview";

pub const WINDOW_TITLE: &str = "Drawing App - Microsoft Clone";
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Image extensions accepted by the open/insert dialogs.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Extension appended to save paths that carry none.
pub const DEFAULT_SAVE_EXTENSION: &str = "png";
pub const DEFAULT_SAVE_NAME: &str = "untitled.png";

/// Quick-pick colors shown in the tools panel, two per row.
pub const PALETTE: [(&str, Color32); 12] = [
    ("black", Color32::BLACK),
    ("red", Color32::RED),
    ("blue", Color32::BLUE),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("yellow", Color32::YELLOW),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("brown", Color32::from_rgb(165, 42, 42)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("grey", Color32::from_rgb(190, 190, 190)),
    ("white", Color32::WHITE),
];

/// Pen settings and the last save location, restored across restarts.
///
/// In-progress stroke or shape geometry is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub active_tool: ActiveTool,
    pub pen_color: Color32,
    pub pen_width: u32,
    pub last_save_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_tool: ActiveTool::Pen,
            pen_color: DEFAULT_PEN_COLOR,
            pen_width: DEFAULT_PEN_WIDTH,
            last_save_path: None,
        }
    }
}

impl Settings {
    pub fn capture(state: &ToolState, last_save_path: Option<PathBuf>) -> Self {
        Self {
            active_tool: state.active_tool,
            pen_color: state.pen_color,
            pen_width: state.pen_width,
            last_save_path,
        }
    }

    /// Build a fresh tool state from these settings.
    ///
    /// Shape tools are one-shot, so a saved shape mode starts as the pen.
    pub fn restore(&self) -> ToolState {
        let mut state = ToolState::new();
        if self.active_tool.is_freehand() {
            state.active_tool = self.active_tool;
        }
        state.pen_color = self.pen_color;
        state.set_width(self.pen_width);
        state
    }
}
