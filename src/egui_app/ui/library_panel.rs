use eframe::egui::{self, CentralPanel, Frame, RichText, ScrollArea, StrokeKind, Ui};

use super::{EguiApp, style};
use crate::sprite_library::{Category, LibraryDropTarget};

impl EguiApp {
    pub(super) fn render_library(&mut self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            let panel_id = egui::Id::new("categories_panel");
            let panel_rect = ui.max_rect();
            self.controller
                .register_drop_zone(panel_id, panel_rect, LibraryDropTarget::Categories);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Categories").strong());
                ui.label(
                    RichText::new("Alt: merge into one category / replace matching labels")
                        .color(style::palette().text_muted),
                );
            });
            ui.separator();

            let categories = self.controller.library.categories.clone();
            ScrollArea::vertical()
                .id_salt("categories_scroll")
                .show(ui, |ui| {
                    if categories.is_empty() {
                        ui.label(
                            RichText::new("Drop sprites here to create categories")
                                .color(style::palette().text_muted),
                        );
                    }
                    for (index, category) in categories.iter().enumerate() {
                        self.render_category_row(ui, index, category);
                        ui.add_space(4.0);
                    }
                });

            if self.controller.is_drop_highlighted(panel_id) {
                ui.painter().rect_stroke(
                    panel_rect,
                    6.0,
                    style::drop_highlight_stroke(),
                    StrokeKind::Inside,
                );
            }
        });
    }

    fn render_category_row(&mut self, ui: &mut Ui, index: usize, category: &Category) {
        let row_id = egui::Id::new(("category_row", index));
        let response = Frame::group(ui.style())
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&category.name).strong());
                ui.horizontal_wrapped(|ui| {
                    if category.labels.is_empty() {
                        ui.label(RichText::new("No labels").color(style::palette().text_muted));
                    }
                    for label in &category.labels {
                        let source = label
                            .sprite
                            .source
                            .as_deref()
                            .map(crate::egui_app::display_name)
                            .unwrap_or_default();
                        ui.label(&label.name).on_hover_text(source);
                    }
                });
            })
            .response;
        let visible = response.rect.intersect(ui.clip_rect());
        if visible.is_positive() {
            self.controller
                .register_drop_zone(row_id, visible, LibraryDropTarget::Category(index));
        }
        if self.controller.is_drop_highlighted(row_id) {
            ui.painter().rect_stroke(
                response.rect,
                4.0,
                style::drop_highlight_stroke(),
                StrokeKind::Inside,
            );
        }
    }
}
