//! Core game model for the cycles arena
//!
//! Value types (points, colors, directions), the actors that live on the grid, the cycles built
//! out of them, the cast that owns everything, and the round state. No I/O lives here.

pub mod actor;
pub mod cast;
pub mod color;
pub mod config;
pub mod cycle;
pub mod direction;
pub mod point;
pub mod state;

// Re-export commonly used types
pub use actor::{Actor, ActorKind};
pub use cast::{Cast, Group};
pub use color::Color;
pub use config::{GameConfig, PlayerKeys};
pub use cycle::Cycle;
pub use direction::{Direction, Player};
pub use point::{Bounds, Point};
pub use state::GameState;
