//! Placement plugin: the prep-phase grid editor.
//!
//! Pipeline (Update, prep phase only):
//! - `update_ghost`: cursor ray → platform hit → grid snap → [`GhostPreview`]
//! - `handle_click`: one hit test resolves the topmost interactive target;
//!   removing an existing box and committing the ghost are mutually exclusive
//!   outcomes of that single resolution.
//!
//! The store owns placed boxes; obstacle entities are a projection of it.
//! Two sync systems reconcile the ECS against `GameSession::boxes()`, so
//! `remove_box` and `clear_boxes` need no entity-side special cases.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, phase::GamePhase};
use crate::plugins::camera::MainCamera;
use crate::plugins::session::{BoxId, GameSession, MAX_PLACED_BOXES};
use crate::plugins::targeting::{cast_tagged, cursor_ray};
use crate::plugins::world::LevelConfig;

/// Placed boxes sit one unit above the platform surface.
pub const PLACE_HEIGHT: f32 = 1.0;

/// Where the next box would land, or `None` when placement is currently
/// impossible (at capacity, or the cursor misses every platform). Never
/// persisted in the store.
#[derive(Resource, Default, Debug)]
pub struct GhostPreview(pub Option<Vec3>);

/// ECS projection of one store box. Holds only the store id; position and
/// body live on the entity.
#[derive(Component, Debug)]
pub struct PlacedObstacle {
    pub id: BoxId,
}

/// Snap a hit point's horizontal components to the placement lattice.
/// `f32::round` rounds half away from zero on both axes independently;
/// height is fixed at [`PLACE_HEIGHT`].
pub fn snap_to_grid(point: Vec3, cell_size: f32) -> Vec3 {
    Vec3::new(
        (point.x / cell_size).round() * cell_size,
        PLACE_HEIGHT,
        (point.z / cell_size).round() * cell_size,
    )
}

pub fn plugin(app: &mut App) {
    app.init_resource::<GhostPreview>()
        .add_systems(
            Update,
            (update_ghost, handle_click.after(update_ghost))
                .run_if(in_state(GamePhase::Prep)),
        )
        .add_systems(
            Update,
            (sync_spawned_boxes, sync_removed_boxes).after(handle_click),
        )
        .add_systems(OnEnter(GamePhase::Combat), (release_obstacles, clear_ghost));
}

pub(crate) fn update_ghost(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    spatial: SpatialQuery,
    session: Res<GameSession>,
    level: Res<LevelConfig>,
    mut ghost: ResMut<GhostPreview>,
) {
    if session.boxes().len() >= MAX_PLACED_BOXES {
        ghost.0 = None;
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, camera_tf) else {
        ghost.0 = None;
        return;
    };
    let Some((_, point)) = cast_tagged(&spatial, ray, Layer::Platform) else {
        ghost.0 = None;
        return;
    };

    ghost.0 = Some(snap_to_grid(point, level.grid_size));
}

pub(crate) fn handle_click(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    spatial: SpatialQuery,
    ghost: Res<GhostPreview>,
    q_obstacles: Query<&PlacedObstacle>,
    mut session: ResMut<GameSession>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };

    // Topmost interactive target wins: the nearest hit along the cursor ray
    // decides the outcome, so a click landing on a placed box can never also
    // commit the ghost behind it.
    let hit_obstacle = cursor_ray(window, camera, camera_tf)
        .and_then(|ray| cast_tagged(&spatial, ray, [Layer::Obstacle, Layer::Platform]))
        .and_then(|(entity, _)| q_obstacles.get(entity).ok().map(|o| o.id));

    resolve_click(hit_obstacle, ghost.0, &mut session);
}

/// Apply one prep-phase click, given the placed box the cursor ray hit first
/// (if any). Removing that box and committing the ghost are mutually
/// exclusive outcomes.
pub(crate) fn resolve_click(
    hit_obstacle: Option<BoxId>,
    ghost: Option<Vec3>,
    session: &mut GameSession,
) {
    if let Some(id) = hit_obstacle {
        session.remove_box(id);
        return;
    }
    let Some(position) = ghost else {
        return;
    };
    // Capacity is enforced inside the store; a full list makes this a no-op.
    session.add_box(position);
}

/// Spawn an obstacle entity for every store box that has none yet.
pub(crate) fn sync_spawned_boxes(
    mut commands: Commands,
    session: Res<GameSession>,
    phase: Res<State<GamePhase>>,
    q_obstacles: Query<&PlacedObstacle>,
) {
    let body = match phase.get() {
        GamePhase::Prep => RigidBody::Static,
        GamePhase::Combat => RigidBody::Dynamic,
    };

    for placed in session.boxes() {
        if q_obstacles.iter().any(|o| o.id == placed.id) {
            continue;
        }
        commands.spawn((
            Name::new("PlacedBox"),
            PlacedObstacle { id: placed.id },
            Transform::from_translation(placed.position),
            body,
            Collider::cuboid(1.0, 1.0, 1.0),
            CollisionLayers::new(Layer::Obstacle, [Layer::Platform, Layer::Player, Layer::Obstacle]),
        ));
    }
}

/// Despawn obstacle entities whose id has left the store (removal or
/// clear-all).
pub(crate) fn sync_removed_boxes(
    mut commands: Commands,
    session: Res<GameSession>,
    q_obstacles: Query<(Entity, &PlacedObstacle)>,
) {
    for (entity, obstacle) in &q_obstacles {
        if session.boxes().iter().all(|b| b.id != obstacle.id) {
            commands.entity(entity).despawn();
        }
    }
}

/// Combat frees every placed box into the simulation.
pub(crate) fn release_obstacles(
    mut commands: Commands,
    q_obstacles: Query<Entity, With<PlacedObstacle>>,
) {
    for entity in &q_obstacles {
        commands.entity(entity).insert(RigidBody::Dynamic);
    }
}

fn clear_ghost(mut ghost: ResMut<GhostPreview>) {
    ghost.0 = None;
}
