use egui::{Color32, Pos2};

use crate::command::{RenderCommand, Tag};
use crate::config::{BACKGROUND_COLOR, PREVIEW_TAG};
use crate::tool::{ShapeKind, ToolState};

/// Where the current pointer interaction stands.
///
/// Derived from the geometry held in [`ToolState`] so there is a single
/// source of truth for "is something in progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FreehandStroking,
    ShapeDragging,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::FreehandStroking => "Stroking",
            Self::ShapeDragging => "Dragging",
        }
    }
}

/// Turns pointer interactions into render commands.
///
/// Each handler mutates the [`ToolState`] and returns the commands to apply,
/// in order. Nothing here can fail.
#[derive(Debug, Clone)]
pub struct DrawingMachine {
    /// Color painted by the eraser
    background: Color32,
}

impl Default for DrawingMachine {
    fn default() -> Self {
        Self::new(BACKGROUND_COLOR)
    }
}

impl DrawingMachine {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn phase(state: &ToolState) -> Phase {
        if state.shape_anchor.is_some() && state.active_tool.shape_kind().is_some() {
            Phase::ShapeDragging
        } else if state.cursor_pos.is_some() {
            Phase::FreehandStroking
        } else {
            Phase::Idle
        }
    }

    /// Pointer pressed
    pub fn start_interaction(&self, state: &mut ToolState, pos: Pos2) -> Vec<RenderCommand> {
        let mut commands = Vec::new();

        // A press without a matching release abandons whatever was going on.
        if Self::phase(state) != Phase::Idle {
            log::debug!("Abandoning unfinished {} interaction", Self::phase(state).name());
            if state.shape_anchor.is_some() {
                commands.push(RenderCommand::ClearTag(PREVIEW_TAG));
            }
            state.reset_geometry();
        }

        if state.active_tool.is_freehand() {
            state.cursor_pos = Some(pos);
        } else {
            state.shape_anchor = Some(pos);
            state.cursor_pos = Some(pos);
        }
        log::debug!("{} started at {:?}", state.active_tool.name(), pos);

        commands
    }

    /// Pointer moved while held
    pub fn continue_interaction(&self, state: &mut ToolState, pos: Pos2) -> Vec<RenderCommand> {
        match Self::phase(state) {
            Phase::Idle => Vec::new(),
            Phase::FreehandStroking => {
                let mut commands = Vec::new();
                if let Some(from) = state.cursor_pos {
                    commands.push(RenderCommand::Line {
                        from,
                        to: pos,
                        color: state.stroke_color(self.background),
                        width: state.pen_width,
                        round_cap: true,
                        tag: None,
                    });
                }
                state.cursor_pos = Some(pos);
                commands
            }
            Phase::ShapeDragging => {
                let mut commands = vec![RenderCommand::ClearTag(PREVIEW_TAG)];
                if let (Some(anchor), Some(kind)) = (state.shape_anchor, state.active_tool.shape_kind()) {
                    // Lines are only drawn once released.
                    if kind != ShapeKind::Line {
                        commands.push(self.shape_command(state, kind, anchor, pos, Some(PREVIEW_TAG)));
                    }
                }
                state.cursor_pos = Some(pos);
                commands
            }
        }
    }

    /// Pointer released
    pub fn end_interaction(&self, state: &mut ToolState, _pos: Pos2) -> Vec<RenderCommand> {
        match Self::phase(state) {
            Phase::Idle => Vec::new(),
            Phase::FreehandStroking => {
                state.cursor_pos = None;
                Vec::new()
            }
            Phase::ShapeDragging => {
                let mut commands = vec![RenderCommand::ClearTag(PREVIEW_TAG)];
                if let (Some(anchor), Some(kind)) = (state.shape_anchor, state.active_tool.shape_kind()) {
                    let to = state.cursor_pos.unwrap_or(anchor);
                    commands.push(self.shape_command(state, kind, anchor, to, None));
                    log::debug!("{} finalized from {:?} to {:?}", kind.name(), anchor, to);
                    // One shape per selection.
                    state.select_pen();
                }
                state.reset_geometry();
                commands
            }
        }
    }

    fn shape_command(
        &self,
        state: &ToolState,
        kind: ShapeKind,
        from: Pos2,
        to: Pos2,
        tag: Option<Tag>,
    ) -> RenderCommand {
        let color = state.stroke_color(self.background);
        let width = state.pen_width;
        match kind {
            ShapeKind::Rectangle => RenderCommand::RectOutline { from, to, color, width, tag },
            ShapeKind::Oval => RenderCommand::OvalOutline { from, to, color, width, tag },
            ShapeKind::Line => RenderCommand::Line { from, to, color, width, round_cap: false, tag },
        }
    }
}
