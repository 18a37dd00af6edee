//! Global phase machine.
//!
//! `Prep` is the build stage: the player lays out defensive boxes on the grid.
//! `Combat` releases those boxes into the physics simulation and disables
//! placement input. Only the prep → combat transition is modeled; re-entering
//! prep is not defined at this layer.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GamePhase {
    #[default]
    Prep,
    Combat,
}
