//! Store-driven placement flow: the placed-box list in the session is the
//! source of truth; obstacle entities are reconciled against it every frame.

mod common;

use avian3d::prelude::*;
use bevy::prelude::*;

use boxfort::common::phase::GamePhase;
use boxfort::plugins::placement::{GhostPreview, PlacedObstacle};
use boxfort::plugins::session::{GameSession, MAX_PLACED_BOXES};

fn obstacle_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<&PlacedObstacle>().iter(world).count()
}

#[test]
fn store_boxes_materialize_as_static_obstacles() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut()
        .resource_mut::<GameSession>()
        .add_box(Vec3::new(1.0, 1.0, 0.0))
        .unwrap();
    app.world_mut()
        .resource_mut::<GameSession>()
        .add_box(Vec3::new(-2.0, 1.0, 3.0))
        .unwrap();
    app.update();

    assert_eq!(obstacle_count(&mut app), 2);

    let world = app.world_mut();
    let all_static = world
        .query_filtered::<&RigidBody, With<PlacedObstacle>>()
        .iter(world)
        .all(|rb| matches!(rb, RigidBody::Static));
    assert!(all_static);
}

#[test]
fn removing_from_the_store_despawns_the_obstacle() {
    let mut app = common::app_headless();
    app.update();

    let id = app
        .world_mut()
        .resource_mut::<GameSession>()
        .add_box(Vec3::new(1.0, 1.0, 0.0))
        .unwrap();
    app.update();
    assert_eq!(obstacle_count(&mut app), 1);

    app.world_mut().resource_mut::<GameSession>().remove_box(id);
    app.update();
    assert_eq!(obstacle_count(&mut app), 0);
}

#[test]
fn capacity_is_enforced_by_the_store() {
    let mut app = common::app_headless();
    app.update();

    {
        let mut session = app.world_mut().resource_mut::<GameSession>();
        for i in 0..MAX_PLACED_BOXES {
            assert!(session.add_box(Vec3::new(i as f32, 1.0, 0.0)).is_some());
        }
        assert!(session.add_box(Vec3::ZERO).is_none());
    }
    app.update();

    assert_eq!(obstacle_count(&mut app), MAX_PLACED_BOXES);
}

#[test]
fn entering_combat_releases_obstacles_and_clears_ghost() {
    let mut app = common::app_headless();
    app.update();

    app.world_mut()
        .resource_mut::<GameSession>()
        .add_box(Vec3::new(1.0, 1.0, 0.0));
    app.world_mut().resource_mut::<GhostPreview>().0 = Some(Vec3::new(2.0, 1.0, 2.0));
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GamePhase>>()
        .set(GamePhase::Combat);
    app.update();

    let world = app.world_mut();
    let body = world
        .query_filtered::<&RigidBody, With<PlacedObstacle>>()
        .single(world)
        .unwrap();
    assert!(matches!(body, RigidBody::Dynamic));
    assert!(app.world().resource::<GhostPreview>().0.is_none());
}

#[test]
fn clearing_the_store_despawns_everything() {
    let mut app = common::app_headless();
    app.update();

    for i in 0..5 {
        app.world_mut()
            .resource_mut::<GameSession>()
            .add_box(Vec3::new(i as f32, 1.0, 0.0));
    }
    app.update();
    assert_eq!(obstacle_count(&mut app), 5);

    app.world_mut().resource_mut::<GameSession>().clear_boxes();
    app.update();
    assert_eq!(obstacle_count(&mut app), 0);
}
