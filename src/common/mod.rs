//! Common, shared types.

pub mod layers;
pub mod phase;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
