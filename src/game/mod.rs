//! Core game simulation.
//!
//! A real-time arcade game where the player steers a bird through scrolling
//! pipe obstacles by clicking or pressing a key to flap. Gravity pulls the
//! bird down each frame, and hitting a pipe, the ceiling, or the ground ends
//! the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
