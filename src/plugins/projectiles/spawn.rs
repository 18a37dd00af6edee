//! Spawn consumer: turn validated requests into shot entities.
//!
//! Single writer of the id allocator and the active-shot list, so ids stay
//! monotonic and every live entity has exactly one registered id.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{ActiveShots, Flight, Leg, Shot, ShotIds};
use super::messages::SpawnShotRequest;

pub fn spawn_shots(
    mut commands: Commands,
    mut reader: MessageReader<SpawnShotRequest>,
    mut ids: ResMut<ShotIds>,
    mut active: ResMut<ActiveShots>,
) {
    for req in reader.read() {
        let id = ids.alloc();
        active.register(id);

        commands.spawn((
            Name::new("Shot"),
            Shot { id, kind: req.kind },
            Flight {
                target: req.target,
                leg: Leg::Outbound,
                airtime: 0.0,
            },
            Transform::from_translation(req.origin),
        ));
    }
}
