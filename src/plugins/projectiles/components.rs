use bevy::prelude::*;

/// Monotonic shot identifier. Issued only by [`ShotIds`]; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShotId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotKind {
    Bow,
    Boomerang,
}

#[derive(Component, Debug)]
pub struct Shot {
    pub id: ShotId,
    pub kind: ShotKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    Outbound,
    Returning,
}

/// Kinematic flight toward a captured target point.
///
/// The target is resolved at fire time and not re-queried, with one
/// exception: a boomerang's return target is re-sampled from the player's
/// live position at the instant the return leg begins.
#[derive(Component, Debug)]
pub struct Flight {
    pub target: Vec3,
    pub leg: Leg,
    pub airtime: f32,
}

/// Id allocator. The spawn consumer is its single writer.
#[derive(Resource, Default, Debug)]
pub struct ShotIds {
    next: u64,
}

impl ShotIds {
    pub fn alloc(&mut self) -> ShotId {
        let id = ShotId(self.next);
        self.next += 1;
        id
    }
}

/// Ids of shots currently in flight.
///
/// Completion handling filters against this list, so a completion for an id
/// that was never issued (or already retired) is a no-op instead of a crash.
#[derive(Resource, Default, Debug)]
pub struct ActiveShots(Vec<ShotId>);

impl ActiveShots {
    pub fn register(&mut self, id: ShotId) {
        self.0.push(id);
    }

    /// Remove `id` from the active list. Returns false for unknown ids.
    pub fn retire(&mut self, id: ShotId) -> bool {
        match self.0.iter().position(|&s| s == id) {
            Some(index) => {
                self.0.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ShotId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
