//! Session plugin: the authoritative game-state store.
//!
//! `GameSession` is the single cross-component mutable resource. Every field
//! is mutated through a setter and read through a getter so any reader on the
//! main schedule observes a consistent value. The placed-box list is the one
//! piece with a cross-field constraint: the capacity check in [`GameSession::add_box`]
//! reads the length, compares, and appends as one step, so rapid repeated
//! placement triggers in a single tick can never push the list past the cap.
//!
//! Box entities in the ECS are a projection of this list (see the placement
//! plugin); the store never holds entity ids.

use bevy::prelude::*;

use crate::common::phase::GamePhase;

/// Hard cap on live placed boxes.
pub const MAX_PLACED_BOXES: usize = 20;

/// Countdown value a fresh session starts with, in seconds.
pub const FULL_TIMER_SECS: f32 = 60.0;

/// Opaque, unique handle for a placed box.
///
/// Backed by a session-local monotonic counter; ids are never reused within
/// a session, so a stale id simply fails to match anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedBox {
    pub id: BoxId,
    pub position: Vec3,
}

#[derive(Resource, Debug)]
pub struct GameSession {
    current_level: u32,
    timer: f32,
    enemies_alive: u32,
    is_spawning: bool,
    level_complete: bool,
    placed: Vec<PlacedBox>,
    next_box_id: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            current_level: 1,
            timer: FULL_TIMER_SECS,
            enemies_alive: 0,
            is_spawning: false,
            level_complete: false,
            placed: Vec::new(),
            next_box_id: 0,
        }
    }
}

impl GameSession {
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn set_current_level(&mut self, level: u32) {
        self.current_level = level;
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn set_timer(&mut self, secs: f32) {
        self.timer = secs;
    }

    pub fn enemies_alive(&self) -> u32 {
        self.enemies_alive
    }

    pub fn set_enemies_alive(&mut self, count: u32) {
        self.enemies_alive = count;
    }

    pub fn is_spawning(&self) -> bool {
        self.is_spawning
    }

    pub fn set_is_spawning(&mut self, spawning: bool) {
        self.is_spawning = spawning;
    }

    pub fn level_complete(&self) -> bool {
        self.level_complete
    }

    pub fn set_level_complete(&mut self, complete: bool) {
        self.level_complete = complete;
    }

    pub fn boxes(&self) -> &[PlacedBox] {
        &self.placed
    }

    /// Append a placed box, enforcing the capacity cap atomically.
    ///
    /// Returns the new box's id, or `None` when the list is full (the 21st
    /// attempt is a no-op and the store is unchanged).
    pub fn add_box(&mut self, position: Vec3) -> Option<BoxId> {
        if self.placed.len() >= MAX_PLACED_BOXES {
            return None;
        }
        let id = BoxId(self.next_box_id);
        self.next_box_id += 1;
        self.placed.push(PlacedBox { id, position });
        Some(id)
    }

    /// Remove a box by id. Removing an unknown id is a no-op.
    pub fn remove_box(&mut self, id: BoxId) -> bool {
        let before = self.placed.len();
        self.placed.retain(|b| b.id != id);
        self.placed.len() != before
    }

    /// Drop every placed box (level reset). Clearing an empty list is a no-op.
    pub fn clear_boxes(&mut self) {
        self.placed.clear();
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<GameSession>()
        .add_systems(Update, tick_timer.run_if(in_state(GamePhase::Combat)));
}

/// Count the session timer down while combat runs. Clamped at zero; what
/// happens at zero (level end) is decided by the out-of-scope progression
/// layer reading the store.
fn tick_timer(time: Res<Time>, mut session: ResMut<GameSession>) {
    let remaining = (session.timer() - time.delta_secs()).max(0.0);
    session.set_timer(remaining);
}
