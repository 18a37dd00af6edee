//! Buffered shot messages.
//!
//! Producers enqueue intent; the spawn consumer applies it. Keeping the id
//! allocator and active-shot list behind a single consumer is what makes
//! their updates atomic under rapid repeated fire inputs.

use bevy::prelude::*;

use super::components::{ShotId, ShotKind};

/// Intent to fire, already validated by the producer (cooldown, ammunition,
/// live target).
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnShotRequest {
    pub kind: ShotKind,
    pub origin: Vec3,
    pub target: Vec3,
}

/// Written exactly once per shot, when it retires. Carries the final
/// position so the owner can evaluate a boomerang catch.
#[derive(Message, Clone, Copy, Debug)]
pub struct ShotComplete {
    pub id: ShotId,
    pub kind: ShotKind,
    pub position: Vec3,
}
