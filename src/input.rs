use egui::{Context, PointerButton, Pos2, Rect};

use crate::command::RenderSurface;
use crate::machine::DrawingMachine;
use crate::tool::ToolState;

/// Pointer events the drawing state machine understands.
///
/// Positions are canvas-local and are not clamped to the canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown(Pos2),
    /// Pointer moved while the primary button is held
    PointerMove(Pos2),
    /// Primary button released
    PointerUp(Pos2),
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            Self::PointerDown(pos) | Self::PointerMove(pos) | Self::PointerUp(pos) => *pos,
        }
    }
}

/// Routes one input event to the matching state machine handler and applies
/// the resulting commands to the surface.
pub fn route_event(
    event: InputEvent,
    state: &mut ToolState,
    machine: &DrawingMachine,
    surface: &mut dyn RenderSurface,
) {
    let commands = match event {
        InputEvent::PointerDown(pos) => machine.start_interaction(state, pos),
        InputEvent::PointerMove(pos) => machine.continue_interaction(state, pos),
        InputEvent::PointerUp(pos) => machine.end_interaction(state, pos),
    };

    for command in commands {
        command.apply_to(surface);
    }
}

/// Primary-button pointer state for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Last forwarded position while the button is held, screen coordinates
    held_at: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            held_at: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn is_held(&self) -> bool {
        self.held_at.is_some()
    }

    /// Converts a screen position into canvas-local coordinates
    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Read this frame's primary-button state from egui.
    ///
    /// `accept_press` is false when something (e.g. a window) covers the
    /// canvas under the pointer; an interaction already in progress continues.
    pub fn process_input(&mut self, ctx: &Context, accept_press: bool) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            pos: input.pointer.interact_pos(),
            pressed: accept_press && input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.feed(sample)
    }

    /// Turn one frame's pointer sample into events.
    ///
    /// A press only counts when it lands on the canvas. Once held, moves and
    /// the release are reported wherever the pointer is.
    pub fn feed(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if sample.pressed && self.held_at.is_none() {
            if let Some(pos) = sample.pos.filter(|pos| self.canvas_rect.contains(*pos)) {
                events.push(InputEvent::PointerDown(self.to_canvas(pos)));
                self.held_at = Some(pos);
            }
        }

        if let (Some(last), Some(pos)) = (self.held_at, sample.pos) {
            if pos != last {
                events.push(InputEvent::PointerMove(self.to_canvas(pos)));
                self.held_at = Some(pos);
            }
        }

        if sample.released {
            if let Some(last) = self.held_at.take() {
                let pos = sample.pos.unwrap_or(last);
                events.push(InputEvent::PointerUp(self.to_canvas(pos)));
            }
        }

        events
    }
}
