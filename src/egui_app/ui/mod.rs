//! egui renderer for the sprite library window.

mod asset_browser;
mod drag_overlay;
mod input;
mod library_panel;
pub mod style;

use eframe::egui::{self, CursorIcon, Frame, RichText, TopBottomPanel};

use crate::egui_app::controller::EguiController;

/// Minimum viewport size to keep both panels usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 420.0);

/// Renders the UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.colored_label(style::status_color(status.tone), "●");
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.checkbox(&mut self.controller.ui.library_locked, "Lock library");
                    });
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let input = input::capture(ctx);
        self.controller.begin_drag_frame(&input);

        self.render_status(ctx);
        self.render_asset_browser(ctx);
        self.render_library(ctx);

        let output = self.controller.end_drag_frame(&input);
        match output.accepts {
            Some(true) => ctx.set_cursor_icon(CursorIcon::Copy),
            Some(false) => ctx.set_cursor_icon(CursorIcon::NoDrop),
            None => {}
        }
        self.render_drag_overlay(ctx);
        if self.controller.drag_in_progress() {
            ctx.request_repaint();
        }
    }
}
