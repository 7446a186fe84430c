//! Vitrine Scene - 3D viewer components
//!
//! This crate provides the building blocks of the Vitrine model viewer:
//! the baseline environment (camera, lights, ground grid), orbit
//! navigation, asynchronous GLB loading with a named "Coat" target, the
//! view parameter state, and the floating egui control panel.

pub mod camera;
pub mod model;
pub mod panel;
pub mod params;
pub mod scene;

use bevy::prelude::*;

/// Plugin that sets up the complete viewer scene
pub struct VitrineScenePlugin;

impl Plugin for VitrineScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(camera::OrbitCameraPlugin)
            .add_plugins(scene::SceneSetupPlugin)
            .add_plugins(model::ModelPlugin)
            .add_plugins(params::ViewParamsPlugin)
            .add_plugins(panel::PanelPlugin);
    }
}

// Re-export commonly used types
pub use camera::CameraSettings;
pub use model::ModelAsset;
pub use params::ViewParams;
