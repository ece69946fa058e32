use eframe::egui::{Color32, Stroke, Visuals};

use crate::egui_app::state::StatusTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_mint: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub error: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_mint: Color32::from_rgb(127, 255, 212),
        accent_ice: Color32::from_rgb(167, 217, 255),
        warning: Color32::from_rgb(200, 128, 96),
        error: Color32::from_rgb(220, 90, 90),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_tertiary;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
}

/// Stroke drawn around the highlighted drop receiver.
pub fn drop_highlight_stroke() -> Stroke {
    Stroke::new(2.0, palette().accent_mint)
}

pub fn status_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Info => palette.accent_ice,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.error,
    }
}
