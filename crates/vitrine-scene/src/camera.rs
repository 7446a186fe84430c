//! Orbit camera navigation
//!
//! Mouse-driven orbit around a focus point: left-drag rotates, right-drag
//! pans, the wheel zooms. Zoom and focus are smoothed toward their target
//! values each frame. Input is ignored while the egui panel owns the
//! pointer.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Orbit controller state and tuning
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
    pub target_focus: Vec3,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        // Eye at (0, 1, 3) looking at the origin, matching the default
        // viewer pose: distance sqrt(10), slightly elevated, on +Z.
        let distance = 10.0_f32.sqrt();
        Self {
            distance,
            target_distance: distance,
            azimuth: 0.0,
            elevation: (1.0 / distance).asin(),
            target: Vec3::ZERO,
            target_focus: Vec3::ZERO,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Eye offset from the focus point for the given spherical coordinates
/// (Y up, azimuth 0 on +Z)
pub fn orbit_translation(distance: f32, azimuth: f32, elevation: f32) -> Vec3 {
    Vec3::new(
        distance * elevation.cos() * azimuth.sin(),
        distance * elevation.sin(),
        distance * elevation.cos() * azimuth.cos(),
    )
}

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Update, update_camera);
    }
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
) {
    // The panel owns the pointer while hovered or dragged
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let motion = mouse_motion.delta;

    // Orbit with left mouse drag
    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        settings.azimuth -= motion.x * settings.sensitivity;
        settings.elevation =
            (settings.elevation - motion.y * settings.sensitivity).clamp(-1.5, 1.5);
    }

    // Pan with right mouse drag, in the camera's screen plane
    if mouse_button.pressed(MouseButton::Right) && !egui_wants_pointer {
        let right = Vec3::new(settings.azimuth.cos(), 0.0, -settings.azimuth.sin());
        let up = Vec3::Y;
        let pan_speed = settings.distance * 0.002;
        settings.target_focus -= right * motion.x * pan_speed;
        settings.target_focus += up * motion.y * pan_speed;
    }

    // Zoom with scroll, smoothed through target_distance
    if !egui_wants_pointer && mouse_scroll.delta.y != 0.0 {
        let zoom_factor = 1.0 - mouse_scroll.delta.y * settings.zoom_speed * 0.3;
        settings.target_distance = (settings.target_distance * zoom_factor).clamp(0.2, 50.0);
    }

    // Smooth interpolation for zoom and focus
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance =
        settings.distance + (settings.target_distance - settings.distance) * lerp_factor;
    settings.target = settings.target + (settings.target_focus - settings.target) * lerp_factor;

    if let Ok(mut transform) = camera_query.single_mut() {
        transform.translation = settings.target
            + orbit_translation(settings.distance, settings.azimuth, settings.elevation);
        transform.look_at(settings.target, Vec3::Y);
    }
}
