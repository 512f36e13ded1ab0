use std::sync::Arc;

use egui::{Color32, ColorImage, Painter, Pos2, Rect, Shape, Stroke, TextureHandle, Vec2};

use crate::command::{RenderSurface, Tag};

/// Segments used to approximate an oval outline
const OVAL_SEGMENTS: usize = 64;

#[derive(Clone, PartialEq)]
pub enum ItemKind {
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: u32,
        round_cap: bool,
    },
    RectOutline {
        rect: Rect,
        color: Color32,
        width: u32,
    },
    OvalOutline {
        rect: Rect,
        color: Color32,
        width: u32,
    },
    Image {
        pos: Pos2,
        image: Arc<ColorImage>,
    },
}

/// Something drawn on the canvas, in canvas-local coordinates
#[derive(Clone)]
pub struct CanvasItem {
    pub kind: ItemKind,
    pub tag: Option<Tag>,
    // Uploaded on first paint
    texture: Option<TextureHandle>,
}

// Custom Debug implementation to keep pixel data out of logs
impl std::fmt::Debug for CanvasItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            ItemKind::Line { .. } => "Line",
            ItemKind::RectOutline { .. } => "RectOutline",
            ItemKind::OvalOutline { .. } => "OvalOutline",
            ItemKind::Image { .. } => "Image",
        };
        f.debug_struct("CanvasItem")
            .field("kind", &kind)
            .field("tag", &self.tag)
            .field("has_texture", &self.texture.is_some())
            .finish()
    }
}

impl CanvasItem {
    fn new(kind: ItemKind, tag: Option<Tag>) -> Self {
        Self { kind, tag, texture: None }
    }
}

/// The drawing area: a retained list of items painted in insertion order
/// over a solid background.
#[derive(Debug, Clone)]
pub struct Canvas {
    background: Color32,
    items: Vec<CanvasItem>,
    texture_counter: u64,
}

impl Canvas {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            items: Vec::new(),
            texture_counter: 0,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_tagged(&self, tag: Tag) -> usize {
        self.items.iter().filter(|item| item.tag == Some(tag)).count()
    }

    fn push(&mut self, kind: ItemKind, tag: Option<Tag>) {
        self.items.push(CanvasItem::new(kind, tag));
    }

    /// Paint the background and every item into `rect`.
    pub fn paint(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, self.background);
        let painter = painter.with_clip_rect(rect);
        let offset = rect.min.to_vec2();

        for item in &mut self.items {
            match &item.kind {
                ItemKind::Line { from, to, color, width, round_cap } => {
                    let stroke = Stroke::new(*width as f32, *color);
                    let (from, to) = (*from + offset, *to + offset);
                    painter.line_segment([from, to], stroke);
                    if *round_cap {
                        let radius = *width as f32 / 2.0;
                        painter.circle_filled(from, radius, *color);
                        painter.circle_filled(to, radius, *color);
                    }
                }
                ItemKind::RectOutline { rect: r, color, width } => {
                    painter.rect_stroke(r.translate(offset), 0.0, Stroke::new(*width as f32, *color));
                }
                ItemKind::OvalOutline { rect: r, color, width } => {
                    let points = oval_points(r.translate(offset), OVAL_SEGMENTS);
                    painter.add(Shape::closed_line(points, Stroke::new(*width as f32, *color)));
                }
                ItemKind::Image { pos, image } => {
                    let texture = match &item.texture {
                        Some(texture) => texture.clone(),
                        None => {
                            self.texture_counter += 1;
                            let name = format!("canvas_image_{}", self.texture_counter);
                            let texture = ctx.load_texture(name, (**image).clone(), egui::TextureOptions::LINEAR);
                            item.texture = Some(texture.clone());
                            texture
                        }
                    };
                    let size = Vec2::new(image.size[0] as f32, image.size[1] as f32);
                    let image_rect = Rect::from_min_size(*pos + offset, size);
                    let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                    painter.image(texture.id(), image_rect, uv, Color32::WHITE);
                }
            }
        }
    }
}

impl RenderSurface for Canvas {
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, round_cap: bool, tag: Option<Tag>) {
        self.push(ItemKind::Line { from, to, color, width, round_cap }, tag);
    }

    fn draw_rect_outline(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, tag: Option<Tag>) {
        self.push(ItemKind::RectOutline { rect: Rect::from_two_pos(from, to), color, width }, tag);
    }

    fn draw_oval_outline(&mut self, from: Pos2, to: Pos2, color: Color32, width: u32, tag: Option<Tag>) {
        self.push(ItemKind::OvalOutline { rect: Rect::from_two_pos(from, to), color, width }, tag);
    }

    fn clear_by_tag(&mut self, tag: Tag) {
        self.items.retain(|item| item.tag != Some(tag));
    }

    fn clear_all(&mut self) {
        self.items.clear();
    }

    fn place_image(&mut self, pos: Pos2, image: Arc<ColorImage>) {
        self.push(ItemKind::Image { pos, image }, None);
    }
}

/// Points on the outline of the oval inscribed in `rect`
pub fn oval_points(rect: Rect, segments: usize) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Pos2::new(center.x + radius.x * angle.cos(), center.y + radius.y * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_clear_by_tag_keeps_untagged() {
        let mut canvas = Canvas::new(Color32::WHITE);
        canvas.draw_line(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::BLACK, 5, true, None);
        canvas.draw_rect_outline(pos2(0.0, 0.0), pos2(4.0, 4.0), Color32::BLACK, 5, Some("preview"));
        canvas.draw_oval_outline(pos2(0.0, 0.0), pos2(4.0, 4.0), Color32::BLACK, 5, Some("preview"));
        assert_eq!(canvas.count_tagged("preview"), 2);

        canvas.clear_by_tag("preview");
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.count_tagged("preview"), 0);
    }

    #[test]
    fn test_outline_rect_normalized() {
        let mut canvas = Canvas::new(Color32::WHITE);
        canvas.draw_rect_outline(pos2(40.0, 30.0), pos2(0.0, 0.0), Color32::BLACK, 1, None);
        match &canvas.items()[0].kind {
            ItemKind::RectOutline { rect, .. } => {
                assert_eq!(rect.min, pos2(0.0, 0.0));
                assert_eq!(rect.max, pos2(40.0, 30.0));
            }
            _ => panic!("expected a rectangle"),
        }
    }

    #[test]
    fn test_clear_all() {
        let mut canvas = Canvas::new(Color32::WHITE);
        canvas.place_image(pos2(0.0, 0.0), Arc::new(ColorImage::new([1, 1], Color32::RED)));
        canvas.draw_line(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::BLACK, 5, true, None);
        canvas.clear_all();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_oval_points_on_ellipse() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(40.0, 30.0));
        let points = oval_points(rect, 16);
        assert_eq!(points.len(), 16);
        for p in points {
            let nx = (p.x - 20.0) / 20.0;
            let ny = (p.y - 15.0) / 15.0;
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_paint_uploads_image_once() {
        let ctx = egui::Context::default();
        let mut canvas = Canvas::new(Color32::WHITE);
        canvas.place_image(pos2(0.0, 0.0), Arc::new(ColorImage::new([2, 2], Color32::RED)));

        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        canvas.paint(&ctx, &painter, rect);
        canvas.paint(&ctx, &painter, rect);

        assert!(canvas.items()[0].texture.is_some());
        assert_eq!(canvas.texture_counter, 1);
    }
}
