use eframe::egui;

use crate::egui_app::state::DragFrameInput;

/// Sample pointer, modifier and OS file-drag state for this frame.
pub(super) fn capture(ctx: &egui::Context) -> DragFrameInput {
    ctx.input(|i| DragFrameInput {
        pointer: i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()),
        released: i.pointer.any_released() || !i.pointer.any_down(),
        alt: i.modifiers.alt,
        cancel: i.key_pressed(egui::Key::Escape),
        os_hovered: i
            .raw
            .hovered_files
            .iter()
            .filter_map(|file| file.path.clone())
            .collect(),
        os_dropped: i
            .raw
            .dropped_files
            .iter()
            .filter_map(|file| file.path.clone())
            .collect(),
    })
}
