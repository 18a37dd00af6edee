//! Player plugin.
//!
//! Pipeline:
//! - Update: sample key state into the PlayerInput resource; settle completed
//!   shots (prune the active list, evaluate boomerang catches).
//! - FixedUpdate: translate intent into physics velocity. Movement runs
//!   before the jump branch inside one system so the jump impulse can never
//!   be overwritten by the vertical-velocity passthrough.
//! - FixedPostUpdate: maintain the ground-contact count from collision
//!   start/end messages.
//!
//! Grounded state is a reference count of live ground contacts rather than a
//! last-writer-wins flag, so losing one of several simultaneous contacts
//! does not un-ground the player.

use avian3d::collision::narrow_phase::CollisionEventSystems;
use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};
use crate::plugins::projectiles::components::{ActiveShots, ShotKind};
use crate::plugins::projectiles::messages::ShotComplete;

#[derive(Component)]
pub struct Player;

/// Discrete input flags, sampled once per frame.
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PlayerInput {
    /// Raw movement intent on the ground plane (x = strafe, y = forward
    /// axis, matching world z). Zero when no direction is held.
    pub fn move_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.forward {
            axis.y -= 1.0;
        }
        if self.backward {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

/// Count of live ground contacts. Grounded while > 0.
#[derive(Component, Default, Debug)]
pub struct GroundContacts(pub u32);

impl GroundContacts {
    pub fn is_grounded(&self) -> bool {
        self.0 > 0
    }
}

/// Ammunition and cooldown bookkeeping for the fire producer.
#[derive(Resource, Debug)]
pub struct WeaponState {
    pub boomerangs_left: u32,
    /// Elapsed-time stamp of the last accepted shot of either kind.
    pub last_shot_time: f32,
}

impl Default for WeaponState {
    fn default() -> Self {
        Self {
            boomerangs_left: 3,
            last_shot_time: f32::NEG_INFINITY,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>()
        .init_resource::<WeaponState>()
        .add_systems(Startup, spawn)
        .add_systems(Update, (gather_input, collect_returns))
        .add_systems(FixedUpdate, apply_movement)
        .add_systems(
            FixedPostUpdate,
            track_ground_contacts.after(CollisionEventSystems),
        );
}

fn spawn(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Platform, Layer::Obstacle]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Transform::from_xyz(0.0, 5.0, 0.0),
        RigidBody::Dynamic,
        Collider::sphere(0.5),
        Mass(1.0),
        LockedAxes::ROTATION_LOCKED,
        layers,
        LinearVelocity::ZERO,
        GroundContacts::default(),
        CollisionEventsEnabled,
    ));
}

fn gather_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.forward = keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp);
    input.backward = keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown);
    input.left = keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft);
    input.right = keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight);
    input.jump = keys.pressed(KeyCode::Space);
}

/// Per-tick velocity control.
///
/// Horizontal velocity is commanded directly (no drift when idle); vertical
/// velocity always passes through so gravity and the jump arc are untouched
/// by steering. The jump branch runs last and zeroes the contact count so a
/// second jump cannot trigger before the next collision message lands.
pub(crate) fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &mut GroundContacts), With<Player>>,
) {
    let Ok((mut vel, mut contacts)) = q_player.single_mut() else {
        return;
    };

    let axis = input.move_axis();
    if axis.length_squared() > 0.0 {
        // Rotate input space into world space by the fixed camera yaw.
        let world = Vec2::from_angle(tunables.camera_yaw).rotate(axis.normalize());
        vel.0.x = world.x * tunables.move_speed;
        vel.0.z = world.y * tunables.move_speed;
    } else {
        vel.0.x = 0.0;
        vel.0.z = 0.0;
    }

    if input.jump && contacts.is_grounded() {
        vel.0.y = tunables.jump_impulse;
        contacts.0 = 0;
    }
}

/// Maintain the ground-contact count from collision messages involving the
/// player body.
pub(crate) fn track_ground_contacts(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    mut q_player: Query<(Entity, &mut GroundContacts), With<Player>>,
) {
    let Ok((player, mut contacts)) = q_player.single_mut() else {
        return;
    };

    let involves = |c1: Entity, c2: Entity, b1: Option<Entity>, b2: Option<Entity>| {
        c1 == player || c2 == player || b1 == Some(player) || b2 == Some(player)
    };

    for ev in started.read() {
        if involves(ev.collider1, ev.collider2, ev.body1, ev.body2) {
            contacts.0 += 1;
        }
    }
    for ev in ended.read() {
        if involves(ev.collider1, ev.collider2, ev.body1, ev.body2) {
            // A contact consumed by a jump may already be gone.
            contacts.0 = contacts.0.saturating_sub(1);
        }
    }
}

/// Settle completed shots: prune the active list and evaluate boomerang
/// catches against the player's current position.
pub(crate) fn collect_returns(
    tunables: Res<Tunables>,
    mut completed: MessageReader<ShotComplete>,
    mut active: ResMut<ActiveShots>,
    mut weapon: ResMut<WeaponState>,
    q_player: Query<&Transform, With<Player>>,
) {
    for msg in completed.read() {
        // A completion for an id we never issued (or already settled) means
        // a wiring bug upstream; drop it rather than crash.
        if !active.retire(msg.id) {
            warn!("completion for unknown shot id {:?}", msg.id);
            continue;
        }
        if msg.kind != ShotKind::Boomerang {
            continue;
        }
        let Ok(player_tf) = q_player.single() else {
            continue;
        };
        if msg.position.distance(player_tf.translation) < tunables.catch_radius {
            weapon.boomerangs_left += 1;
        }
    }
}
