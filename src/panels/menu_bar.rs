use crate::SketchApp;

pub fn menu_bar(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open…").clicked() {
                    ui.close_menu();
                    app.open_image();
                }
                if ui.button("Insert Image…").clicked() {
                    ui.close_menu();
                    app.insert_image();
                }
                if ui.button("Save").clicked() {
                    ui.close_menu();
                    app.save_image(ctx);
                }
                if ui.button("Save As…").clicked() {
                    ui.close_menu();
                    app.save_image_as(ctx);
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Edit", |ui| {
                if ui.button("Clear").clicked() {
                    ui.close_menu();
                    app.clear_canvas();
                }
            });
        });
    });
}
