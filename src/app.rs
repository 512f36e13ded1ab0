use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32, Rect};

use crate::canvas::Canvas;
use crate::command::RenderSurface;
use crate::components::ColorChooser;
use crate::config::{BACKGROUND_COLOR, PREVIEW_TAG, Settings};
use crate::dialogs;
use crate::error::SketchResult;
use crate::file_handler;
use crate::input::{InputHandler, route_event};
use crate::machine::{DrawingMachine, Phase};
use crate::panels::{central_panel, menu_bar, tools_panel};
use crate::tool::{ActiveTool, ToolState};

pub struct SketchApp {
    tool_state: ToolState,
    machine: DrawingMachine,
    canvas: Canvas,
    input: InputHandler,
    color_chooser: ColorChooser,
    /// Where "Save" writes without asking again
    save_path: Option<PathBuf>,
    /// Save requested; waiting for the screenshot of the next frame
    pending_capture: Option<PathBuf>,
    /// Outcome of the last file operation, shown in the tools panel
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!(
            "Starting with {} (width {})",
            settings.active_tool.name(),
            settings.pen_width
        );
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            tool_state: settings.restore(),
            machine: DrawingMachine::new(BACKGROUND_COLOR),
            canvas: Canvas::new(BACKGROUND_COLOR),
            input: InputHandler::new(Rect::NOTHING),
            color_chooser: ColorChooser::new(),
            save_path: settings.last_save_path,
            pending_capture: None,
            status: None,
        }
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn phase(&self) -> Phase {
        DrawingMachine::phase(&self.tool_state)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    pub fn select_tool(&mut self, tool: ActiveTool) {
        let was_dragging = self.tool_state.is_shape_dragging();
        self.tool_state.set_tool(tool);
        // The abandoned drag's preview would otherwise linger on the canvas.
        if was_dragging && !self.tool_state.is_shape_dragging() {
            self.canvas.clear_by_tag(PREVIEW_TAG);
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        self.tool_state.set_color(color);
    }

    pub fn set_width(&mut self, width: u32) {
        self.tool_state.set_width(width);
    }

    pub fn open_color_chooser(&mut self) {
        self.color_chooser.open(self.tool_state.pen_color);
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.clear_all();
        log::info!("Canvas cleared");
    }

    /// Mouse cursor shown over the canvas for the active tool.
    ///
    /// The eraser hides the system cursor; [`Self::eraser_marker`] paints a dot instead.
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        match self.tool_state.active_tool {
            ActiveTool::Eraser => egui::CursorIcon::None,
            ActiveTool::Pen | ActiveTool::Shape(_) => egui::CursorIcon::Crosshair,
        }
    }

    /// Radius of the dot drawn under the pointer while erasing
    pub fn eraser_marker(&self) -> Option<f32> {
        match self.tool_state.active_tool {
            ActiveTool::Eraser => Some((self.tool_state.pen_width as f32 / 2.0).max(2.0)),
            _ => None,
        }
    }

    /// Feed this frame's pointer input through the drawing state machine
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect, accept_press: bool) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx, accept_press) {
            route_event(event, &mut self.tool_state, &self.machine, &mut self.canvas);
        }
        if self.input.is_held() {
            ctx.request_repaint();
        }
    }

    pub fn paint_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect) {
        self.canvas.paint(ctx, painter, rect);
    }

    fn report(&mut self, action: &str, result: SketchResult<()>) {
        match result {
            Ok(()) => self.status = Some(format!("{action} done")),
            Err(err) => {
                log::error!("{action} failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn open_image(&mut self) {
        if let Some(path) = dialogs::pick_image_file("Open Image") {
            let result = file_handler::open_image(&path, &mut self.canvas);
            self.report("Open", result);
        }
    }

    pub fn insert_image(&mut self) {
        if let Some(path) = dialogs::pick_image_file("Insert Image") {
            let canvas_size = self.input.canvas_rect().size();
            let result = file_handler::insert_image(&path, &mut self.canvas, canvas_size);
            self.report("Insert", result);
        }
    }

    /// Save to the previous location, asking only the first time
    pub fn save_image(&mut self, ctx: &egui::Context) {
        match self.save_path.clone() {
            Some(path) => self.request_capture(ctx, path),
            None => self.save_image_as(ctx),
        }
    }

    pub fn save_image_as(&mut self, ctx: &egui::Context) {
        if let Some(path) = dialogs::pick_save_path() {
            self.save_path = Some(path.clone());
            self.request_capture(ctx, path);
        }
    }

    fn request_capture(&mut self, ctx: &egui::Context, path: PathBuf) {
        log::debug!("Requesting screenshot for {}", path.display());
        self.pending_capture = Some(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        ctx.request_repaint();
    }

    /// Write out a screenshot once the backend delivers it
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.pending_capture.is_none() {
            return;
        }
        let screenshot = ctx.input(|input| {
            input.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(screenshot) = screenshot else {
            return;
        };
        let Some(path) = self.pending_capture.take() else {
            return;
        };

        let pixels_per_point = ctx.pixels_per_point();
        let result = file_handler::crop_capture(&screenshot, self.input.canvas_rect(), pixels_per_point)
            .and_then(|image| file_handler::save_capture(&image, &path));
        self.report("Save", result);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let save_as = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::S);
        let save = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
        let open = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
        let insert = KeyboardShortcut::new(Modifiers::COMMAND, Key::I);

        // Shift variant first: the plain shortcut would also match it.
        if ctx.input_mut(|i| i.consume_shortcut(&save_as)) {
            self.save_image_as(ctx);
        } else if ctx.input_mut(|i| i.consume_shortcut(&save)) {
            self.save_image(ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&open)) {
            self.open_image();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&insert)) {
            self.insert_image();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = Settings::capture(&self.tool_state, self.save_path.clone());
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);
        self.handle_shortcuts(ctx);

        menu_bar(self, ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);

        if let Some(color) = self.color_chooser.show(ctx) {
            log::info!("Custom color chosen: {:?}", color);
            self.set_color(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::tool::ShapeKind;
    use egui::pos2;

    #[test]
    fn test_app_defaults() {
        let app = SketchApp::default();
        assert_eq!(app.tool_state().active_tool, ActiveTool::Pen);
        assert_eq!(app.phase(), Phase::Idle);
        assert!(app.canvas().is_empty());
        assert!(app.save_path().is_none());
    }

    #[test]
    fn test_settings_restore_save_path() {
        let app = SketchApp::with_settings(Settings {
            last_save_path: Some(PathBuf::from("drawing.png")),
            ..Settings::default()
        });
        assert_eq!(app.save_path(), Some(Path::new("drawing.png")));
    }

    #[test]
    fn test_clear_canvas() {
        let mut app = SketchApp::default();
        app.canvas
            .draw_line(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::BLACK, 5, true, None);
        app.clear_canvas();
        assert!(app.canvas().is_empty());
    }

    #[test]
    fn test_cursor_follows_tool() {
        let mut app = SketchApp::default();
        assert_eq!(app.cursor_icon(), egui::CursorIcon::Crosshair);
        assert!(app.eraser_marker().is_none());

        app.select_tool(ActiveTool::Eraser);
        assert_eq!(app.cursor_icon(), egui::CursorIcon::None);
        app.set_width(20);
        assert_eq!(app.eraser_marker(), Some(10.0));
        app.set_width(1);
        assert_eq!(app.eraser_marker(), Some(2.0));
    }

    #[test]
    fn test_tool_switch_mid_drag_clears_preview() {
        let mut app = SketchApp::default();
        app.select_tool(ActiveTool::Shape(ShapeKind::Rectangle));
        for event in [
            InputEvent::PointerDown(pos2(0.0, 0.0)),
            InputEvent::PointerMove(pos2(40.0, 30.0)),
        ] {
            route_event(event, &mut app.tool_state, &app.machine, &mut app.canvas);
        }
        assert_eq!(app.canvas().count_tagged(PREVIEW_TAG), 1);

        app.select_tool(ActiveTool::Pen);
        assert!(app.tool_state().shape_anchor.is_none());
        assert_eq!(app.phase(), Phase::Idle);
        assert_eq!(app.canvas().count_tagged(PREVIEW_TAG), 0);

        for event in [
            InputEvent::PointerMove(pos2(50.0, 50.0)),
            InputEvent::PointerUp(pos2(50.0, 50.0)),
        ] {
            route_event(event, &mut app.tool_state, &app.machine, &mut app.canvas);
        }
        assert!(app.canvas().is_empty());
    }
}
