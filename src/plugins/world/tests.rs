use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use super::{fibonacci_layout, InitialBox, LevelConfig, Platform};

#[test]
fn fibonacci_layout_is_deterministic() {
    assert_eq!(fibonacci_layout(30), fibonacci_layout(30));
}

#[test]
fn fibonacci_layout_matches_formula() {
    let points = fibonacci_layout(3);
    assert_eq!(points.len(), 3);

    // Index 0: radius 0, so the point sits on the spiral center.
    assert_eq!(points[0], Vec3::new(0.0, 1.0, 0.0));

    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let expected = Vec3::new(0.8 * golden_angle.cos(), 1.0, 0.8 * golden_angle.sin());
    assert!((points[1] - expected).length() < 1e-6);

    // Every point is at fixed height 1.
    assert!(points.iter().all(|p| p.y == 1.0));
}

#[test]
fn spawn_level_creates_static_platforms() {
    let mut world = World::new();
    world.insert_resource(LevelConfig::for_level(1));

    run_system_once(&mut world, super::spawn_level);

    let platforms = world
        .query::<(&Platform, &RigidBody)>()
        .iter(&world)
        .filter(|(_, rb)| matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(platforms, 3);
}

#[test]
fn spawn_level_creates_initial_box_field() {
    let mut world = World::new();
    world.insert_resource(LevelConfig::for_level(2));

    run_system_once(&mut world, super::spawn_level);

    let boxes = world.query::<&InitialBox>().iter(&world).count();
    assert_eq!(boxes, 30);
}
