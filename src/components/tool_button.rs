use eframe::egui;

use crate::tool::{ActiveTool, ShapeKind};

/// Square icon button selecting one drawing tool
pub struct ToolButton {
    pub tool: ActiveTool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ActiveTool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn icon(&self) -> &'static str {
        match self.tool {
            ActiveTool::Pen => "✏",
            ActiveTool::Eraser => "⌫",
            ActiveTool::Shape(ShapeKind::Rectangle) => "⬜",
            ActiveTool::Shape(ShapeKind::Oval) => "⚪",
            ActiveTool::Shape(ShapeKind::Line) => "➖",
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246)
            } else if response.hovered() {
                egui::Color32::from_gray(200)
            } else {
                egui::Color32::from_gray(225)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon(),
                egui::FontId::proportional(20.0),
                egui::Color32::BLACK,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.tool.name())
    }
}

/// Small filled square picking a palette color
pub fn color_swatch(ui: &mut egui::Ui, name: &str, color: egui::Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 18.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 2.0, color);
        let outline = if selected {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
        } else {
            egui::Stroke::new(1.0, egui::Color32::GRAY)
        };
        ui.painter().rect_stroke(rect, 2.0, outline);
    }
    response.on_hover_text(name)
}
