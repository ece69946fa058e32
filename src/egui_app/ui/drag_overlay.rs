use eframe::egui::{self, Align2, Area, Frame, Order, RichText, Stroke, Vec2};

use super::{EguiApp, style};

impl EguiApp {
    /// Floating label following the pointer while a drag is in progress.
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        let (Some(pos), Some(label)) = (
            self.controller.ui.drag_position,
            self.controller.ui.drag_label.clone(),
        ) else {
            return;
        };
        let palette = style::palette();
        Area::new("drag_preview".into())
            .order(Order::Tooltip)
            .pivot(Align2::LEFT_TOP)
            .current_pos(pos + Vec2::new(16.0, 16.0))
            .interactable(false)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(palette.bg_tertiary)
                    .stroke(Stroke::new(1.0, palette.accent_ice))
                    .corner_radius(6.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(label).color(palette.text_primary));
                    });
            });
    }
}
