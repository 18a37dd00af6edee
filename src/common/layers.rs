//! Collision layers.
//!
//! A collider's layer membership doubles as its gameplay tag: ray queries
//! filter on membership instead of matching scene-graph names.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Platform,
    Player,
    Obstacle,
}
