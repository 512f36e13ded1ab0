use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH, MAX_PEN_WIDTH, MIN_PEN_WIDTH};

/// Outline shapes that can be dragged out on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Oval,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Oval, ShapeKind::Line];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::Line => "Line",
        }
    }
}

/// The currently selected drawing behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveTool {
    #[default]
    Pen,
    Eraser,
    Shape(ShapeKind),
}

impl ActiveTool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Shape(kind) => kind.name(),
        }
    }

    /// Pen and eraser draw continuous strokes; shapes are dragged out.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Shape(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Session-wide drawing state: the selected tool, pen attributes and the
/// geometry of the interaction currently in progress.
///
/// Created once at startup and passed by reference to the input router and
/// the drawing state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub active_tool: ActiveTool,
    pub pen_color: Color32,
    pub pen_width: u32,
    /// Last recorded pointer position; `None` when nothing is in progress.
    pub cursor_pos: Option<Pos2>,
    /// Where the current shape drag started; only set while dragging a shape.
    pub shape_anchor: Option<Pos2>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_tool: ActiveTool::Pen,
            pen_color: DEFAULT_PEN_COLOR,
            pen_width: DEFAULT_PEN_WIDTH,
            cursor_pos: None,
            shape_anchor: None,
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_pen(&mut self) {
        self.set_tool(ActiveTool::Pen);
    }

    pub fn select_eraser(&mut self) {
        self.set_tool(ActiveTool::Eraser);
    }

    pub fn select_shape(&mut self, kind: ShapeKind) {
        self.set_tool(ActiveTool::Shape(kind));
    }

    /// Switching away from a shape tool mid-drag abandons the drag, so the
    /// anchor is only ever set while a shape tool is active.
    pub fn set_tool(&mut self, tool: ActiveTool) {
        if self.active_tool != tool {
            log::info!("Tool changed: {} -> {}", self.active_tool.name(), tool.name());
        }
        if self.shape_anchor.is_some() && tool.shape_kind().is_none() {
            log::debug!("Shape drag abandoned by tool switch");
            self.reset_geometry();
        }
        self.active_tool = tool;
    }

    /// Whether a shape is currently being dragged out
    pub fn is_shape_dragging(&self) -> bool {
        self.shape_anchor.is_some()
    }

    /// Picking a color means drawing with it, so the eraser hands back to the pen.
    pub fn set_color(&mut self, color: Color32) {
        if self.active_tool == ActiveTool::Eraser {
            self.select_pen();
        }
        self.pen_color = color;
    }

    pub fn set_width(&mut self, width: u32) {
        self.pen_width = width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH);
    }

    /// Color for the next render command: the background when erasing,
    /// the pen color otherwise.
    pub fn stroke_color(&self, background: Color32) -> Color32 {
        match self.active_tool {
            ActiveTool::Eraser => background,
            _ => self.pen_color,
        }
    }

    /// Forget any in-progress stroke or shape geometry.
    pub fn reset_geometry(&mut self) {
        self.cursor_pos = None;
        self.shape_anchor = None;
    }
}
