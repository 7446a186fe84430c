//! View parameter state and the single apply path
//!
//! `ViewParams` is the one mutable parameter object shared by the control
//! panel and the model loader. Nothing mutates the live material or part
//! visibility directly; every change flows through `apply_view_params`,
//! so "toggle then load" and "load then toggle" end in the same state.

use bevy::prelude::*;
use thiserror::Error;

use crate::model::{CoatPart, CoatTarget};

/// Default coat tint, `#ffea00`
pub const DEFAULT_TINT: [u8; 3] = [0xff, 0xea, 0x00];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TintParseError {
    #[error("invalid hex color {0:?}: expected \"#rrggbb\"")]
    Invalid(String),
}

/// User-controlled view parameters, owned by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct ViewParams {
    /// Whether the coat sub-part is rendered
    pub coat_visible: bool,
    /// Emissive tint applied to the coat material, sRGB
    pub coat_tint: [u8; 3],
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            coat_visible: true,
            coat_tint: DEFAULT_TINT,
        }
    }
}

impl ViewParams {
    /// Label for the visibility checkbox, reflecting the current value
    pub fn toggle_label(&self) -> &'static str {
        if self.coat_visible {
            "Hide Coat"
        } else {
            "Show Coat"
        }
    }

    /// Current tint as an engine color
    pub fn tint_color(&self) -> Color {
        let [r, g, b] = self.coat_tint;
        Color::srgb_u8(r, g, b)
    }
}

/// Parse an `#rrggbb` hex color (leading `#` optional)
pub fn parse_hex_rgb(s: &str) -> Result<[u8; 3], TintParseError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(TintParseError::Invalid(s.to_string()));
    }
    let byte = |range| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| TintParseError::Invalid(s.to_string()))
    };
    Ok([byte(0..2)?, byte(2..4)?, byte(4..6)?])
}

/// Format an RGB triple as `#rrggbb`
pub fn format_hex_rgb(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

pub struct ViewParamsPlugin;

impl Plugin for ViewParamsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewParams>()
            .add_systems(Update, apply_view_params.after(crate::model::tag_coat_parts));
    }
}

/// Push the current parameters onto the live coat target
///
/// Runs when the parameters change, when the target is (re)built after a
/// load, or when freshly spawned coat parts get tagged. With no target
/// present this is a no-op: a model without a "Coat" material is normal.
fn apply_view_params(
    params: Res<ViewParams>,
    target: Res<CoatTarget>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut parts: Query<&mut Visibility, With<CoatPart>>,
    newly_tagged: Query<Entity, Added<CoatPart>>,
) {
    if !params.is_changed() && !target.is_changed() && newly_tagged.is_empty() {
        return;
    }

    let Some(material_handle) = target.material.as_ref() else {
        return;
    };

    if let Some(material) = materials.get_mut(material_handle) {
        material.emissive = params.tint_color().to_linear();
    }

    let visibility = if params.coat_visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut part_visibility in parts.iter_mut() {
        *part_visibility = visibility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Headless app running the tagging and apply systems, with one
    /// standard material registered as the coat target.
    fn coat_app(params: ViewParams) -> (App, Handle<StandardMaterial>) {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>();

        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());

        app.insert_resource(params)
            .insert_resource(CoatTarget {
                material: Some(material.clone()),
            })
            .add_systems(
                Update,
                (crate::model::tag_coat_parts, apply_view_params).chain(),
            );
        (app, material)
    }

    fn spawn_part(app: &mut App, material: &Handle<StandardMaterial>) -> Entity {
        app.world_mut()
            .spawn((MeshMaterial3d(material.clone()), Visibility::Inherited))
            .id()
    }

    fn part_visibility(app: &App, part: Entity) -> Visibility {
        *app.world().entity(part).get::<Visibility>().unwrap()
    }

    fn coat_emissive(app: &App, material: &Handle<StandardMaterial>) -> LinearRgba {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(material)
            .unwrap()
            .emissive
    }

    #[test]
    fn test_params_set_before_load_apply_to_the_spawned_part() {
        // The hide toggle and a custom tint exist before any part does.
        let params = ViewParams {
            coat_visible: false,
            coat_tint: [0x33, 0x66, 0xcc],
        };
        let (mut app, material) = coat_app(params);
        let part = spawn_part(&mut app, &material);

        app.update();

        assert_eq!(part_visibility(&app, part), Visibility::Hidden);
        assert_eq!(coat_emissive(&app, &material), params.tint_color().to_linear());
    }

    #[test]
    fn test_toggle_after_load_matches_toggle_before_load() {
        let (mut app, material) = coat_app(ViewParams::default());
        let part = spawn_part(&mut app, &material);

        app.update();
        assert_eq!(part_visibility(&app, part), Visibility::Inherited);

        let changed = ViewParams {
            coat_visible: false,
            coat_tint: [0x33, 0x66, 0xcc],
        };
        *app.world_mut().resource_mut::<ViewParams>() = changed;
        app.update();

        // Same end state as setting the parameters before the part existed
        assert_eq!(part_visibility(&app, part), Visibility::Hidden);
        assert_eq!(coat_emissive(&app, &material), changed.tint_color().to_linear());
    }

    #[test]
    fn test_late_spawned_parts_pick_up_current_params() {
        // Scene children stream in over several frames; parts tagged after
        // the last parameter change must still land in the current state.
        let (mut app, material) = coat_app(ViewParams {
            coat_visible: false,
            coat_tint: DEFAULT_TINT,
        });
        app.update();

        let late_part = spawn_part(&mut app, &material);
        app.update();

        assert_eq!(part_visibility(&app, late_part), Visibility::Hidden);
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let params = ViewParams::default();
        assert!(params.coat_visible);
        assert_eq!(params.coat_tint, [0xff, 0xea, 0x00]);
    }

    #[test]
    fn test_toggle_label_reflects_state() {
        let mut params = ViewParams::default();
        assert_eq!(params.toggle_label(), "Hide Coat");
        params.coat_visible = false;
        assert_eq!(params.toggle_label(), "Show Coat");
    }

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(parse_hex_rgb("#ffea00").unwrap(), [0xff, 0xea, 0x00]);
        assert_eq!(parse_hex_rgb("ffea00").unwrap(), [0xff, 0xea, 0x00]);
        assert_eq!(parse_hex_rgb("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex_rgb("#FFEA00").unwrap(), [0xff, 0xea, 0x00]);
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        assert!(parse_hex_rgb("").is_err());
        assert!(parse_hex_rgb("#fff").is_err());
        assert!(parse_hex_rgb("#ffea0").is_err());
        assert!(parse_hex_rgb("#ffea000").is_err());
        assert!(parse_hex_rgb("#ggea00").is_err());
        assert!(parse_hex_rgb("#ffea0ü").is_err());
    }

    #[test]
    fn test_format_round_trips() {
        for rgb in [[0, 0, 0], [0xff, 0xea, 0x00], [0x12, 0x34, 0x56]] {
            assert_eq!(parse_hex_rgb(&format_hex_rgb(rgb)).unwrap(), rgb);
        }
        assert_eq!(format_hex_rgb(DEFAULT_TINT), "#ffea00");
    }
}
