//! Baseline environment - camera, lights, and ground grid
//!
//! Everything here is spawned synchronously at startup, before the model
//! load resolves, so the view renders the grid and lights on frame one
//! regardless of how (or whether) the load finishes.

use bevy::prelude::*;

use crate::camera::MainCamera;

/// Vertical field of view for the main camera, radians
const CAMERA_FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Half the number of grid lines per axis; lines at -N..=N
const GRID_HALF_LINES: i32 = 5;
const GRID_SPACING: f32 = 1.0;
const GRID_LINE_THICKNESS: f32 = 0.02;

/// Marker component for grid lines
#[derive(Component)]
pub struct GridLine;

pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera; its transform is driven every frame by the orbit controller
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV,
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 1.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Soft sky ambient
    commands.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 1.0, 1.0),
        brightness: 300.0,
        ..default()
    });

    // Key light, angled down from behind-left
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-3.0, 10.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground grid on the X-Z plane, built from thin cuboid lines
    let grid_extent = GRID_HALF_LINES as f32 * GRID_SPACING;

    let line_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.4, 0.4),
        unlit: true,
        ..default()
    });

    // Lines along X and along Z
    let line_mesh_x = meshes.add(Cuboid::new(
        grid_extent * 2.0,
        GRID_LINE_THICKNESS,
        GRID_LINE_THICKNESS,
    ));
    let line_mesh_z = meshes.add(Cuboid::new(
        GRID_LINE_THICKNESS,
        GRID_LINE_THICKNESS,
        grid_extent * 2.0,
    ));

    for i in -GRID_HALF_LINES..=GRID_HALF_LINES {
        let offset = i as f32 * GRID_SPACING;
        commands.spawn((
            Mesh3d(line_mesh_x.clone()),
            MeshMaterial3d(line_material.clone()),
            Transform::from_translation(Vec3::new(0.0, 0.0, offset)),
            GridLine,
        ));
        commands.spawn((
            Mesh3d(line_mesh_z.clone()),
            MeshMaterial3d(line_material.clone()),
            Transform::from_translation(Vec3::new(offset, 0.0, 0.0)),
            GridLine,
        ));
    }
}
