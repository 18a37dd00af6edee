//! Fixed-rate flight: advance every shot toward its target and retire it.
//!
//! Retirement is the only place a `ShotComplete` message is written, and the
//! entity despawns in the same branch, so the completion signal cannot
//! double-fire for one shot.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

use super::components::{Flight, Leg, Shot, ShotKind};
use super::messages::ShotComplete;

pub fn advance_shots(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, (With<Player>, Without<Shot>)>,
    mut q_shots: Query<(Entity, &Shot, &mut Flight, &mut Transform), Without<Player>>,
    mut completed: MessageWriter<ShotComplete>,
) {
    let dt = time.delta_secs();

    for (entity, shot, mut flight, mut tf) in &mut q_shots {
        flight.airtime += dt;
        if flight.airtime > tunables.max_flight_secs {
            completed.write(ShotComplete {
                id: shot.id,
                kind: shot.kind,
                position: tf.translation,
            });
            commands.entity(entity).despawn();
            continue;
        }

        let to_target = flight.target - tf.translation;
        let step = tunables.shot_speed * dt;

        if to_target.length() > step {
            tf.translation += to_target.normalize() * step;
            continue;
        }

        // Arrived this tick.
        tf.translation = flight.target;

        match (shot.kind, flight.leg) {
            (ShotKind::Boomerang, Leg::Outbound) => {
                // The return leg chases where the player is NOW, not the
                // origin the shot was fired from. A vanished player leaves
                // the target in place, so the shot retires next tick.
                let return_target = q_player
                    .single()
                    .map(|p| p.translation)
                    .unwrap_or(tf.translation);
                flight.leg = Leg::Returning;
                flight.target = return_target;
            }
            _ => {
                completed.write(ShotComplete {
                    id: shot.id,
                    kind: shot.kind,
                    position: tf.translation,
                });
                commands.entity(entity).despawn();
            }
        }
    }
}
