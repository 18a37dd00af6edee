use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::{Player, WeaponState};
use crate::plugins::targeting::Aim;

use super::components::ShotKind;
use super::messages::SpawnShotRequest;

/// Producer: validate a fire input and write a SpawnShotRequest message.
///
/// All gating is precondition-based and silent: no player body, no live aim
/// target, shared cooldown not elapsed, or an empty boomerang pouch simply
/// produce no request. This system is the single writer of `WeaponState`,
/// so the ammunition decrement and the cooldown stamp land together with the
/// accepted request.
pub fn request_player_shots(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    time: Res<Time>,
    tunables: Res<Tunables>,
    aim: Res<Aim>,
    mut weapon: ResMut<WeaponState>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<SpawnShotRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };

    // Primary = bow, secondary = boomerang.
    let kind = if buttons.just_pressed(MouseButton::Left) {
        ShotKind::Bow
    } else if buttons.just_pressed(MouseButton::Right) {
        ShotKind::Boomerang
    } else {
        return;
    };

    let Ok(player_tf) = q_player.single() else {
        debug!("fire input with no player body");
        return;
    };
    let Some(target) = aim.point else {
        debug!("fire input with no aim target");
        return;
    };

    let now = time.elapsed_secs();
    if now - weapon.last_shot_time < tunables.shot_cooldown {
        return;
    }
    if kind == ShotKind::Boomerang && weapon.boomerangs_left == 0 {
        return;
    }

    if kind == ShotKind::Boomerang {
        weapon.boomerangs_left -= 1;
    }
    weapon.last_shot_time = now;

    let origin = player_tf.translation + Vec3::Y * tunables.muzzle_height;
    writer.write(SpawnShotRequest { kind, origin, target });
}
