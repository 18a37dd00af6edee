//! Tunable gameplay constants.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_4;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub move_speed: f32,
    pub jump_impulse: f32,
    /// Fixed camera-relative yaw applied to movement input so WASD matches
    /// the isometric camera.
    pub camera_yaw: f32,
    /// Shared cooldown across both shot kinds, in seconds.
    pub shot_cooldown: f32,
    pub shot_speed: f32,
    /// Upper bound on any shot's lifetime.
    pub max_flight_secs: f32,
    /// Shots emerge this far above the player's center.
    pub muzzle_height: f32,
    /// A boomerang finishing within this distance of the player is caught.
    pub catch_radius: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_impulse: 10.0,
            camera_yaw: -FRAC_PI_4,
            shot_cooldown: 0.3,
            shot_speed: 14.0,
            max_flight_secs: 3.0,
            muzzle_height: 0.5,
            catch_radius: 2.0,
        }
    }
}
