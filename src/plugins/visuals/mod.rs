//! Visuals plugin (render-only).
//!
//! Gameplay systems spawn bare physics entities; this plugin dresses them
//! with meshes so the headless configuration never touches `Assets<Mesh>`.
//! It only reads gameplay state (tags, the ghost preview resource), matching
//! the store → presentation direction of the data flow.

use bevy::prelude::*;

use crate::plugins::placement::{GhostPreview, PlacedObstacle};
use crate::plugins::player::Player;
use crate::plugins::projectiles::components::{Shot, ShotKind};
use crate::plugins::targeting::Aim;
use crate::plugins::world::{InitialBox, Platform, Portal, Spawner};

#[derive(Component)]
struct GhostVisual;

#[derive(Component)]
struct AimVisual;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_ghost_visual, spawn_aim_visual))
        .add_systems(
            Update,
            (
                dress_platforms,
                dress_boxes,
                dress_player,
                dress_shots,
                dress_markers,
                sync_ghost_visual,
                sync_aim_visual,
            ),
        );
}

fn dress_platforms(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q_added: Query<Entity, Added<Platform>>,
) {
    for entity in &q_added {
        // Platform size lives in the transform scale; the mesh is a unit cube.
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.39, 0.58, 0.93))),
        ));
    }
}

fn dress_boxes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q_placed: Query<Entity, Added<PlacedObstacle>>,
    q_initial: Query<Entity, Added<InitialBox>>,
) {
    for entity in q_placed.iter().chain(q_initial.iter()) {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.55, 0.27, 0.07))),
        ));
    }
}

fn dress_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q_added: Query<Entity, Added<Player>>,
) {
    for entity in &q_added {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(0.5))),
            MeshMaterial3d(materials.add(Color::srgb(0.2, 0.4, 0.9))),
        ));
    }
}

fn dress_shots(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q_added: Query<(Entity, &Shot), Added<Shot>>,
) {
    for (entity, shot) in &q_added {
        let color = match shot.kind {
            ShotKind::Bow => Color::srgb(1.0, 0.85, 0.3),
            ShotKind::Boomerang => Color::srgb(0.3, 0.9, 0.7),
        };
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(0.15))),
            MeshMaterial3d(materials.add(color)),
        ));
    }
}

fn dress_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q_spawner: Query<Entity, Added<Spawner>>,
    q_portal: Query<Entity, Added<Portal>>,
) {
    for entity in &q_spawner {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(0.5))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.15, 0.15))),
        ));
    }
    for entity in &q_portal {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Torus::new(0.8, 1.2))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.6, 0.2, 0.8),
                emissive: LinearRgba::rgb(0.3, 0.1, 0.4),
                ..default()
            })),
        ));
    }
}

fn spawn_ghost_visual(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("GhostBox"),
        GhostVisual,
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 1.0, 0.0, 0.5),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
    ));
}

/// Small marker showing where the cursor ray currently lands.
fn spawn_aim_visual(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("AimMarker"),
        AimVisual,
        Mesh3d(meshes.add(Sphere::new(0.15))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.3, 0.2, 0.8),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
    ));
}

fn sync_aim_visual(
    aim: Res<Aim>,
    mut q_visual: Query<(&mut Transform, &mut Visibility), With<AimVisual>>,
) {
    let Ok((mut tf, mut visibility)) = q_visual.single_mut() else {
        return;
    };
    match aim.point {
        Some(position) => {
            tf.translation = position;
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

fn sync_ghost_visual(
    ghost: Res<GhostPreview>,
    mut q_visual: Query<(&mut Transform, &mut Visibility), With<GhostVisual>>,
) {
    let Ok((mut tf, mut visibility)) = q_visual.single_mut() else {
        return;
    };
    match ghost.0 {
        Some(position) => {
            tf.translation = position;
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}
