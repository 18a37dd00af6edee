mod common;

use avian3d::prelude::*;
use bevy::prelude::*;

use boxfort::common::phase::GamePhase;
use boxfort::plugins::player::{GroundContacts, Player};
use boxfort::plugins::session::GameSession;
use boxfort::plugins::world::{InitialBox, Platform};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn session_starts_in_prep_with_defaults() {
    let mut app = common::app_headless();
    app.update();

    assert_eq!(
        app.world().resource::<State<GamePhase>>().get(),
        &GamePhase::Prep
    );

    let session = app.world().resource::<GameSession>();
    assert_eq!(session.current_level(), 1);
    assert_eq!(session.timer(), 60.0);
    assert_eq!(session.enemies_alive(), 0);
    assert!(!session.is_spawning());
    assert!(!session.level_complete());
    assert!(session.boxes().is_empty());
}

#[test]
fn level_and_player_are_spawned() {
    let mut app = common::app_headless();
    app.update();

    let world = app.world_mut();

    let platforms = world.query::<&Platform>().iter(world).count();
    assert_eq!(platforms, 3);

    let initial_boxes = world.query::<&InitialBox>().iter(world).count();
    assert_eq!(initial_boxes, 20);

    let player = world
        .query::<(&Player, &RigidBody, &GroundContacts)>()
        .iter(world)
        .next();
    assert!(player.is_some());
}
