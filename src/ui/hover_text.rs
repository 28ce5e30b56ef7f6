use bevy::{prelude::*, window::PrimaryWindow};
use bevy_egui::{egui, EguiContexts};

use crate::components::InteractionPrompt;
use crate::resources::SelectedSpawner;

/// Offset of the prompt from the cursor, in logical pixels.
const PROMPT_OFFSET: f32 = 16.0;

/// System that draws the hovered spawner's prompt text next to the cursor.
pub fn ui_hover_text_system(
    mut egui_ctx: EguiContexts,
    selected_spawner: Res<SelectedSpawner>,
    query_window: Query<&Window, With<PrimaryWindow>>,
    query_prompt: Query<&InteractionPrompt>,
) {
    let Some(hover_entity) = selected_spawner.hover else {
        return;
    };
    let Ok(prompt) = query_prompt.get(hover_entity) else {
        return;
    };
    let Ok(window) = query_window.single() else {
        return;
    };
    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let Ok(egui_context) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("interaction_prompt"))
        .fixed_pos(egui::pos2(
            cursor_position.x + PROMPT_OFFSET,
            cursor_position.y + PROMPT_OFFSET,
        ))
        .show(egui_context, |ui| {
            ui.label(
                egui::RichText::new(&prompt.hover_text)
                    .color(egui::Color32::WHITE)
                    .background_color(egui::Color32::from_black_alpha(160)),
            );
        });
}
