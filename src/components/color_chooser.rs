use eframe::egui::{self, Color32};

/// Modal color picker seeded with the current pen color.
///
/// The draft is only handed back when the user confirms; cancelling or
/// closing the window leaves the pen color alone.
#[derive(Debug, Clone, Default)]
pub struct ColorChooser {
    draft: Color32,
    open: bool,
}

impl ColorChooser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, current: Color32) {
        self.draft = current;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> Color32 {
        self.draft
    }

    pub fn set_draft(&mut self, color: Color32) {
        self.draft = color;
    }

    /// Close and return the chosen color
    pub fn confirm(&mut self) -> Option<Color32> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.draft)
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Show the chooser window; returns a color once the user clicks OK.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Color32> {
        if !self.open {
            return None;
        }

        let mut window_open = true;
        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new("Choose Color")
            .collapsible(false)
            .resizable(false)
            .open(&mut window_open)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.draft,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.horizontal(|ui| {
                    confirmed = ui.button("OK").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });

        if confirmed {
            self.confirm()
        } else {
            if cancelled || !window_open {
                self.cancel();
            }
            None
        }
    }
}
