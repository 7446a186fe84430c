//! Bevy application setup

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_egui::EguiPlugin;
use vitrine_scene::{ModelAsset, ViewParams, VitrineScenePlugin};

use crate::config::Config;

/// Run the viewer until its window closes
///
/// The `App` value owns the window, render surface, and every scene
/// resource; dropping it on exit releases them, and a second run starts
/// from a clean slate.
pub fn run(config: &Config, params: ViewParams) {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.15)))
        // Continuous rendering: redraw every display frame
        .insert_resource(WinitSettings::default())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: (config.window.width as u32, config.window.height as u32)
                            .into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    // Model paths resolve against the project root
                    file_path: String::new(),
                    // Don't look for .meta files next to user models
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(VitrineScenePlugin)
        .insert_resource(ModelAsset::new(config.model.path.clone()))
        .insert_resource(params)
        .run();
}
