//! Camera plugin (render-only).
//!
//! A fixed isometric-style view; movement input is rotated by the matching
//! yaw in the player plugin so WASD stays screen-relative.

use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(12.0, 14.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
