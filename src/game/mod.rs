//! Core game logic module for Snake
//!
//! This module contains the board model and the turn driver without any I/O
//! or rendering dependencies. Drivers in [`crate::modes`] pace it and draw it.

pub mod action;
pub mod body;
pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod snapshot;

// Re-export commonly used types
pub use action::Direction;
pub use body::Body;
pub use collision::{is_valid_move, valid_directions};
pub use config::{ConfigError, EdgeCostReference, GameConfig};
pub use engine::{Environment, GameOverReason, GameSummary, Status, TickOutcome};
pub use grid::{Cell, Grid};
pub use snapshot::Snapshot;
