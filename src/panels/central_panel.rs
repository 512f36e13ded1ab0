use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            // Windows floating over the canvas keep their clicks.
            app.handle_input(ctx, canvas_rect, response.hovered());
            app.paint_canvas(ctx, &painter, canvas_rect);

            if response.hovered() {
                ctx.set_cursor_icon(app.cursor_icon());
                if let (Some(radius), Some(pointer)) = (app.eraser_marker(), response.hover_pos()) {
                    painter.circle(
                        pointer,
                        radius,
                        egui::Color32::WHITE,
                        egui::Stroke::new(1.0, egui::Color32::GRAY),
                    );
                }
            }
        });
}
