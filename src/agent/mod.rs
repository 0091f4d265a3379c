//! Decision making for the self-playing snake
//!
//! The agent senses a [`Snapshot`](crate::game::Snapshot), searches for a
//! path to the food, picks one step and settles its score once the
//! environment reports whether the food was eaten.

pub mod pathfinder;
pub mod policy;
pub mod snake;

pub use pathfinder::{Path, PathFinder, DETOUR_COST, STEP_COST};
pub use policy::{decide_direction, Decision};
pub use snake::Agent;
