use eframe::egui::{self, RichText, ScrollArea, Sense, SidePanel, Ui};

use super::{EguiApp, style};
use crate::egui_app::state::AssetKey;

impl EguiApp {
    pub(super) fn render_asset_browser(&mut self, ctx: &egui::Context) {
        SidePanel::left("asset_browser")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.label(RichText::new("Assets").strong());
                ui.separator();
                let sheets = self.controller.asset_index().sheets().to_vec();
                if sheets.is_empty() {
                    ui.label(
                        RichText::new("Set `sprite_manifest` in config.toml to list assets")
                            .color(style::palette().text_muted),
                    );
                    return;
                }
                ScrollArea::vertical()
                    .id_salt("asset_browser_scroll")
                    .show(ui, |ui| {
                        for sheet in sheets {
                            let expanded = self.controller.ui.browser.expanded.contains(&sheet.path);
                            ui.horizontal(|ui| {
                                let arrow = if expanded { "▾" } else { "▸" };
                                if ui.small_button(arrow).clicked() {
                                    let browser = &mut self.controller.ui.browser;
                                    if expanded {
                                        browser.expanded.remove(&sheet.path);
                                    } else {
                                        browser.expanded.insert(sheet.path.clone());
                                    }
                                }
                                let name = crate::egui_app::display_name(&sheet.path);
                                self.asset_row(ui, AssetKey::Sheet(sheet.path.clone()), name);
                            });
                            if expanded {
                                ui.indent(("sheet_sprites", &sheet.path), |ui| {
                                    for sprite in &sheet.sprites {
                                        let key = AssetKey::Sprite {
                                            sheet: sheet.path.clone(),
                                            name: sprite.name.clone(),
                                        };
                                        self.asset_row(ui, key, sprite.name.clone());
                                    }
                                });
                            }
                        }
                    });
            });
    }

    fn asset_row(&mut self, ui: &mut Ui, key: AssetKey, text: String) {
        let palette = style::palette();
        let selected = self.controller.ui.browser.is_selected(&key);
        let color = if selected {
            palette.accent_ice
        } else {
            palette.text_primary
        };
        let response = ui.add(
            egui::Label::new(RichText::new(text).color(color))
                .selectable(false)
                .sense(Sense::click_and_drag()),
        );
        if response.clicked() {
            let browser = &mut self.controller.ui.browser;
            if ui.input(|i| i.modifiers.command) {
                browser.toggle_selected(key.clone());
            } else {
                browser.select_only(key.clone());
            }
        }
        if response.drag_started()
            && let Some(pos) = response.interact_pointer_pos()
        {
            self.controller.start_asset_drag(key, pos);
        }
    }
}
