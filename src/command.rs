use std::sync::Arc;

use egui::{Color32, ColorImage, Pos2};

/// Identifier grouping canvas items so they can be removed together
pub type Tag = &'static str;

/// A single drawing instruction produced by the drawing state machine or
/// the file operations, to be applied to a [`RenderSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Straight segment; freehand strokes are chains of these
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: u32,
        round_cap: bool,
        tag: Option<Tag>,
    },
    /// Unfilled rectangle spanning two opposite corners
    RectOutline {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: u32,
        tag: Option<Tag>,
    },
    /// Unfilled oval inscribed in the box spanning two opposite corners
    OvalOutline {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: u32,
        tag: Option<Tag>,
    },
    /// Remove every item carrying the tag
    ClearTag(Tag),
    /// Remove everything
    ClearAll,
    /// Raster image with its top-left corner at `pos`
    PlaceImage { pos: Pos2, image: Arc<ColorImage> },
}

impl RenderCommand {
    /// Whether this command adds an outline shape (as opposed to a stroke
    /// segment, an image or a removal).
    pub fn is_outline(&self) -> bool {
        matches!(self, Self::RectOutline { .. } | Self::OvalOutline { .. })
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Self::Line { tag, .. } | Self::RectOutline { tag, .. } | Self::OvalOutline { tag, .. } => *tag,
            Self::ClearTag(tag) => Some(*tag),
            Self::ClearAll | Self::PlaceImage { .. } => None,
        }
    }

    pub fn width(&self) -> Option<u32> {
        match self {
            Self::Line { width, .. } | Self::RectOutline { width, .. } | Self::OvalOutline { width, .. } => {
                Some(*width)
            }
            _ => None,
        }
    }

    /// Execute this command on a surface
    pub fn apply_to(self, surface: &mut dyn RenderSurface) {
        match self {
            Self::Line { from, to, color, width, round_cap, tag } => {
                surface.draw_line(from, to, color, width, round_cap, tag)
            }
            Self::RectOutline { from, to, color, width, tag } => {
                surface.draw_rect_outline(from, to, color, width, tag)
            }
            Self::OvalOutline { from, to, color, width, tag } => {
                surface.draw_oval_outline(from, to, color, width, tag)
            }
            Self::ClearTag(tag) => surface.clear_by_tag(tag),
            Self::ClearAll => surface.clear_all(),
            Self::PlaceImage { pos, image } => surface.place_image(pos, image),
        }
    }
}

/// Anything render commands can be drawn onto.
///
/// Coordinates are canvas-local: `(0, 0)` is the top-left corner of the
/// drawing area.
pub trait RenderSurface {
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, round_cap: bool, tag: Option<Tag>);

    fn draw_rect_outline(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, tag: Option<Tag>);

    fn draw_oval_outline(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, tag: Option<Tag>);

    fn clear_by_tag(&mut self, tag: Tag);

    fn clear_all(&mut self);

    fn place_image(&mut self, pos: Pos2, image: Arc<ColorImage>);
}

/// Surface that only records the commands it receives.
///
/// Handy for tests and for inspecting what an interaction would draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<RenderCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, round_cap: bool, tag: Option<Tag>) {
        self.commands.push(RenderCommand::Line { from, to, color, width, round_cap, tag });
    }

    fn draw_rect_outline(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, tag: Option<Tag>) {
        self.commands.push(RenderCommand::RectOutline { from, to, color, width, tag });
    }

    fn draw_oval_outline(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, tag: Option<Tag>) {
        self.commands.push(RenderCommand::OvalOutline { from, to, color, width, tag });
    }

    fn clear_by_tag(&mut self, tag: Tag) {
        self.commands.push(RenderCommand::ClearTag(tag));
    }

    fn clear_all(&mut self) {
        self.commands.push(RenderCommand::ClearAll);
    }

    fn place_image(&mut self, pos: Pos2, image: Arc<ColorImage>) {
        self.commands.push(RenderCommand::PlaceImage { pos, image });
    }
}
