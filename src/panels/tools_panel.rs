use crate::SketchApp;
use crate::components::{ToolButton, color_swatch};
use crate::config::{MAX_PEN_WIDTH, MIN_PEN_WIDTH, PALETTE};
use crate::tool::{ActiveTool, ShapeKind};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(110.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.tool_state().active_tool;
            let tools = [ActiveTool::Pen, ActiveTool::Eraser]
                .into_iter()
                .chain(ShapeKind::ALL.into_iter().map(ActiveTool::Shape));

            ui.horizontal_wrapped(|ui| {
                for tool in tools {
                    if ToolButton::new(tool, active == tool).show(ui).clicked() {
                        app.select_tool(tool);
                    }
                }
            });

            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }
            ui.separator();

            if ui.button("Custom Color").clicked() {
                app.open_color_chooser();
            }

            let pen_color = app.tool_state().pen_color;
            egui::Grid::new("palette_grid")
                .num_columns(2)
                .spacing([4.0, 4.0])
                .show(ui, |ui| {
                    for (index, (name, color)) in PALETTE.iter().enumerate() {
                        if color_swatch(ui, name, *color, pen_color == *color).clicked() {
                            log::info!("Pen color set to {}", name);
                            app.set_color(*color);
                        }
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
            ui.separator();

            ui.label("Pen size");
            let mut width = app.tool_state().pen_width;
            if ui
                .add(egui::Slider::new(&mut width, MIN_PEN_WIDTH..=MAX_PEN_WIDTH))
                .changed()
            {
                app.set_width(width);
            }
            ui.separator();

            if ui.button("Open").clicked() {
                app.open_image();
            }
            if ui.button("Insert").clicked() {
                app.insert_image();
            }
            if ui.button("Save").clicked() {
                app.save_image(ctx);
            }
            if ui.button("Save As").clicked() {
                app.save_image_as(ctx);
            }

            ui.separator();
            ui.small(format!("{} ({})", active.name(), app.phase().name()));
            if let Some(status) = app.status() {
                ui.small(status);
            }
        });
}
