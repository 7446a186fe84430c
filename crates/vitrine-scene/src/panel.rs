//! Floating control panel using bevy_egui
//!
//! Two controls, created once and kept across model reloads: a visibility
//! checkbox whose label reflects the current value, and an sRGB color
//! button for the coat tint. The panel only writes `ViewParams`; the live
//! scene is updated by the apply system in `params`.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::params::ViewParams;

pub struct PanelPlugin;

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, panel_ui);
    }
}

fn panel_ui(mut contexts: EguiContexts, mut params: ResMut<ViewParams>) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            // Local copies keep resource change detection meaningful:
            // ViewParams is only written when a control actually changed.
            let mut coat_visible = params.coat_visible;
            if ui.checkbox(&mut coat_visible, params.toggle_label()).changed() {
                params.coat_visible = coat_visible;
            }

            let mut coat_tint = params.coat_tint;
            ui.horizontal(|ui| {
                ui.label("Coat tint");
                if ui.color_edit_button_srgb(&mut coat_tint).changed() {
                    params.coat_tint = coat_tint;
                }
            });
        });
}
