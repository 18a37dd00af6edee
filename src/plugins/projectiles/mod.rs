//! Projectiles plugin: message-based producer → consumer shot pipeline.
//!
//! ```text
//!   Update schedule (variable dt)
//! ┌──────────────────────────────────────────────────────────────┐
//! │  (A) targeting::update_aim_from_cursor                       │
//! │      - writes: Aim { point: Option<Vec3> }                   │
//! │                                                              │
//! │  (B) Producer: request::request_player_shots                 │
//! │      - reads: MouseButton input, Aim, player Transform       │
//! │      - gates: cooldown, boomerang ammo (mutates WeaponState) │
//! │      - writes: SpawnShotRequest message                      │
//! │                                                              │
//! │  (C) Consumer: spawn::spawn_shots                            │
//! │      - single writer of ShotIds + ActiveShots                │
//! │      - spawns Shot + Flight entities                         │
//! └──────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate (fixed dt)
//! ┌──────────────────────────────────────────────────────────────┐
//! │  (D) flight::advance_shots                                   │
//! │      - moves shots toward their captured target              │
//! │      - bow: retires on arrival or max flight time            │
//! │      - boomerang: flips to a return leg aimed at the         │
//! │        player's live position, then retires                  │
//! │      - writes ShotComplete exactly once per shot             │
//! └──────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   player::collect_returns reads ShotComplete, prunes ActiveShots and
//!   restores boomerang ammunition on a catch.
//! ```

pub mod components;
pub mod messages;

pub mod flight;
pub mod request;
pub mod spawn;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::plugins::targeting;

pub struct ProjectilesPlugin;

/// Maintain shot message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_shot_messages(
    mut requests: ResMut<Messages<messages::SpawnShotRequest>>,
    mut completions: ResMut<Messages<messages::ShotComplete>>,
) {
    requests.update();
    completions.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::ShotIds>()
            .init_resource::<components::ActiveShots>();

        // Message storage for the spawn/completion pipeline.
        app.init_resource::<Messages<messages::SpawnShotRequest>>();
        app.init_resource::<Messages<messages::ShotComplete>>();
        app.add_systems(PostUpdate, update_shot_messages);

        // Update-phase pipeline: aim -> request -> spawn
        app.add_systems(
            Update,
            (
                request::request_player_shots.after(targeting::update_aim_from_cursor),
                spawn::spawn_shots.after(request::request_player_shots),
            ),
        );

        app.add_systems(FixedUpdate, flight::advance_shots);
    }
}
