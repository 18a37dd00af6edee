//! Targeting plugin: cursor → world ray → nearest tagged hit.
//!
//! Wraps avian's `SpatialQuery` ray cast behind two small helpers and keeps
//! the player's live aim point in the [`Aim`] resource. The cast returns the
//! nearest hit along the ray, filtered by collision-layer membership, so hit
//! semantics are decoupled from entity names. Nothing here caches across
//! frames; camera and scene both move, so the aim point is re-derived every
//! `Update`.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::plugins::camera::MainCamera;

/// Far plane for interaction rays.
pub const MAX_RAY_DISTANCE: f32 = 500.0;

/// Live pointer-derived target position on a platform, or `None` when the
/// cursor misses every platform (or left the window).
#[derive(Resource, Default, Debug)]
pub struct Aim {
    pub point: Option<Vec3>,
}

/// Build a world-space ray through the cursor. `None` when the cursor is
/// outside the window.
pub fn cursor_ray(window: &Window, camera: &Camera, camera_tf: &GlobalTransform) -> Option<Ray3d> {
    let cursor = window.cursor_position()?;
    camera.viewport_to_world(camera_tf, cursor).ok()
}

/// Nearest intersection of `ray` with colliders in the given layers.
/// Returns the hit entity and the world-space hit point.
pub fn cast_tagged(
    spatial: &SpatialQuery,
    ray: Ray3d,
    mask: impl Into<LayerMask>,
) -> Option<(Entity, Vec3)> {
    let filter = SpatialQueryFilter::from_mask(mask);
    let hit = spatial.cast_ray(ray.origin, ray.direction, MAX_RAY_DISTANCE, true, &filter)?;
    Some((hit.entity, ray.origin + *ray.direction * hit.distance))
}

/// Re-derive the aim point from the cursor every frame.
///
/// Missing window/camera means the render side isn't wired (headless app);
/// leave the resource alone so tests can drive it directly. A present cursor
/// that misses every platform clears the target.
pub fn update_aim_from_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    spatial: SpatialQuery,
    mut aim: ResMut<Aim>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };

    let Some(ray) = cursor_ray(window, camera, camera_tf) else {
        aim.point = None;
        return;
    };

    aim.point = cast_tagged(&spatial, ray, Layer::Platform).map(|(_, point)| point);
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Aim>()
        .add_systems(Update, update_aim_from_cursor);
}
