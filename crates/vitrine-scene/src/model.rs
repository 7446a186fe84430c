//! GLB model loading and coat targeting
//!
//! The model is fetched through the asset server exactly once per run.
//! While the load is in flight the scene renders the baseline environment;
//! completion is only ever recognized through the handle stored in
//! [`ModelAsset`], so a completion for anything else has nothing to match
//! and cannot write into the scene.
//!
//! On success the glTF's named-material table is consulted once to build
//! the [`CoatTarget`] capability record; later control changes are plain
//! resource lookups, never tree walks.

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Material name the control panel is wired to
pub const COAT_MATERIAL_NAME: &str = "Coat";

/// Asset path used when no model is configured
pub const DEFAULT_MODEL_PATH: &str = "models/coat.glb";

/// Lifecycle of the one model load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Load issued, completion pending
    Pending,
    /// Scene spawned and coat target built
    Spawned,
    /// Fetch or parse failed; the baseline environment stays up
    Failed,
}

/// The model to display, identified by its asset path
#[derive(Resource)]
pub struct ModelAsset {
    path: String,
    handle: Option<Handle<Gltf>>,
    phase: LoadPhase,
}

impl Default for ModelAsset {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}

impl ModelAsset {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handle: None,
            phase: LoadPhase::Pending,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }
}

/// Capability record for the coat sub-part, built once per load
///
/// `material` is `None` until a model carrying a "Coat" material has
/// loaded; every consumer treats that as a normal no-op state.
#[derive(Resource, Default)]
pub struct CoatTarget {
    pub material: Option<Handle<StandardMaterial>>,
}

/// Marker for mesh entities rendered with the coat material
#[derive(Component)]
pub struct CoatPart;

/// Marker for the spawned model scene root
#[derive(Component)]
pub struct ModelRoot;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelAsset>()
            .init_resource::<CoatTarget>()
            .add_systems(Startup, begin_load)
            .add_systems(Update, (poll_model, tag_coat_parts).chain());
    }
}

/// Issue the asset load, once
fn begin_load(mut model: ResMut<ModelAsset>, asset_server: Res<AssetServer>) {
    tracing::info!("Loading model: {}", model.path);
    let handle: Handle<Gltf> = asset_server.load(model.path.clone());
    model.handle = Some(handle);
}

/// Check load state; spawn the scene and build the coat target when ready
fn poll_model(
    mut commands: Commands,
    mut model: ResMut<ModelAsset>,
    mut target: ResMut<CoatTarget>,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
) {
    if model.phase != LoadPhase::Pending {
        return;
    }
    let Some(handle) = model.handle.clone() else {
        return;
    };

    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => {
            let Some(gltf) = gltf_assets.get(&handle) else {
                return;
            };

            let scene_handle = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned());
            let Some(scene_handle) = scene_handle else {
                tracing::error!("Model {} contains no scenes", model.path);
                model.phase = LoadPhase::Failed;
                return;
            };

            target.material = gltf.named_materials.get(COAT_MATERIAL_NAME).cloned();
            if target.material.is_none() {
                // Not an error: the controls simply have nothing to affect
                tracing::debug!(
                    "Model {} has no {:?} material",
                    model.path,
                    COAT_MATERIAL_NAME
                );
            }

            commands.spawn((SceneRoot(scene_handle), Transform::default(), ModelRoot));
            model.phase = LoadPhase::Spawned;
            tracing::info!("Model loaded: {}", model.path);
        }
        Some(LoadState::Failed(_)) => {
            tracing::error!("Failed to load model: {}", model.path);
            model.phase = LoadPhase::Failed;
        }
        _ => {
            // Still loading
        }
    }
}

/// Tag mesh entities that render with the coat material
///
/// The scene instance spawns its children over the following frames, so
/// tagging keeps running after the load; the parameter apply system picks
/// new tags up through `Added<CoatPart>`.
pub(crate) fn tag_coat_parts(
    mut commands: Commands,
    target: Res<CoatTarget>,
    untagged: Query<(Entity, &MeshMaterial3d<StandardMaterial>), Without<CoatPart>>,
) {
    let Some(coat_material) = target.material.as_ref() else {
        return;
    };

    for (entity, material) in untagged.iter() {
        if material.0 == *coat_material {
            commands.entity(entity).insert(CoatPart);
        }
    }
}
