//! World plugin: level layout.
//!
//! Spawns the platforms the player moves and aims on, the decorative
//! golden-spiral box field, and the spawner/portal markers. `LevelConfig` is
//! static data: read-only at runtime, never mutated by gameplay.

use avian3d::prelude::*;
use bevy::prelude::*;
use std::f32::consts::PI;

use crate::common::{layers::Layer, phase::GamePhase};

/// Surface the player can stand on, aim at, and place boxes on.
/// Ray queries resolve "platform" through this entity's `Layer::Platform`
/// membership, not through its name.
#[derive(Component)]
pub struct Platform;

/// Non-interactive decoration box from the generated initial layout.
#[derive(Component)]
pub struct InitialBox;

/// Enemy spawn point marker.
#[derive(Component)]
pub struct Spawner;

/// Level exit marker.
#[derive(Component)]
pub struct Portal;

#[derive(Clone, Copy, Debug)]
pub struct PlatformDef {
    pub position: Vec3,
    pub scale: Vec3,
}

/// Static per-level layout data, supplied to the core from outside.
#[derive(Resource, Clone, Debug)]
pub struct LevelConfig {
    pub platforms: Vec<PlatformDef>,
    pub spawner_position: Vec3,
    pub portal_position: Vec3,
    pub grid_size: f32,
    pub initial_box_count: usize,
}

impl LevelConfig {
    pub fn for_level(level: u32) -> Self {
        match level {
            2 => Self {
                platforms: vec![
                    PlatformDef { position: Vec3::new(0.0, 0.0, 0.0), scale: Vec3::new(30.0, 1.0, 30.0) },
                    PlatformDef { position: Vec3::new(-12.0, 1.0, -12.0), scale: Vec3::new(6.0, 0.5, 6.0) },
                    PlatformDef { position: Vec3::new(12.0, 1.0, 12.0), scale: Vec3::new(6.0, 0.5, 6.0) },
                    PlatformDef { position: Vec3::new(0.0, 2.0, 0.0), scale: Vec3::new(4.0, 0.5, 4.0) },
                ],
                spawner_position: Vec3::new(-12.0, 2.0, -12.0),
                portal_position: Vec3::new(12.0, 2.0, 12.0),
                grid_size: 1.0,
                initial_box_count: 30,
            },
            _ => Self {
                platforms: vec![
                    PlatformDef { position: Vec3::new(0.0, 0.0, 0.0), scale: Vec3::new(20.0, 1.0, 20.0) },
                    PlatformDef { position: Vec3::new(-8.0, 1.0, -8.0), scale: Vec3::new(4.0, 0.5, 4.0) },
                    PlatformDef { position: Vec3::new(8.0, 1.0, 8.0), scale: Vec3::new(4.0, 0.5, 4.0) },
                ],
                spawner_position: Vec3::new(-8.0, 2.0, -8.0),
                portal_position: Vec3::new(8.0, 2.0, 8.0),
                grid_size: 1.0,
                initial_box_count: 20,
            },
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::for_level(1)
    }
}

/// Golden-angle (phyllotaxis) spiral: point `i` sits at polar radius
/// `sqrt(i) * 0.8` and angle `i * π(3 − √5)`, one unit above the floor.
/// Pure function of the index, so the layout is identical on every
/// generation.
pub fn fibonacci_layout(count: usize) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    (0..count)
        .map(|i| {
            let radius = (i as f32).sqrt() * 0.8;
            let angle = i as f32 * golden_angle;
            Vec3::new(radius * angle.cos(), 1.0, radius * angle.sin())
        })
        .collect()
}

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelConfig>()
        .add_systems(OnEnter(GamePhase::Prep), spawn_level);
}

fn spawn_level(mut commands: Commands, config: Res<LevelConfig>) {
    let platform_layers = CollisionLayers::new(Layer::Platform, [Layer::Player, Layer::Obstacle]);

    for (index, def) in config.platforms.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Platform{index}")),
            Platform,
            Transform::from_translation(def.position).with_scale(def.scale),
            RigidBody::Static,
            // Unit cuboid; the per-platform size comes from the transform scale.
            Collider::cuboid(1.0, 1.0, 1.0),
            platform_layers,
        ));
    }

    let decor_layers = CollisionLayers::new(Layer::Obstacle, [Layer::Player, Layer::Obstacle]);

    for position in fibonacci_layout(config.initial_box_count) {
        commands.spawn((
            Name::new("InitialBox"),
            InitialBox,
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(1.0, 1.0, 1.0),
            decor_layers,
        ));
    }

    commands.spawn((
        Name::new("Spawner"),
        Spawner,
        Transform::from_translation(config.spawner_position),
    ));

    commands.spawn((
        Name::new("Portal"),
        Portal,
        Transform::from_translation(config.portal_position),
    ));
}

#[cfg(test)]
mod tests;
