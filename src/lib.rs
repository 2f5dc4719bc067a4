//! Skyward - a flappy-flight arcade game for the terminal.
//!
//! This crate exposes the game simulation, input mapping, and rendering so
//! integration tests can drive full sessions without a terminal.

pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;
