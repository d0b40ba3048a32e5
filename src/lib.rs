//! Cycles - a two-player light-cycle game for the terminal
//!
//! This library provides:
//! - Core game model: points, actors, cycles and the cast (game module)
//! - The per-frame actions and the director that sequences them (script module)
//! - Keyboard state and terminal video services (input and render modules)
//! - Round timing and win tally (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod script;
