//! A* Snake - a snake that plays itself
//!
//! This library provides:
//! - Board model and turn driver (game module)
//! - Path finding and move selection (agent module)
//! - TUI rendering and input (render, input modules)
//! - Session metrics (metrics module)
//! - Execution modes (watch, headless)

pub mod agent;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
