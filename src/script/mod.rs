//! Per-frame actions over the cast
//!
//! A frame is input, then movement, then collisions, then drawing; [`Director`] runs them in
//! that order.

pub mod collision;
pub mod control;
pub mod director;
pub mod draw;
pub mod movement;

pub use collision::HandleCollisionsAction;
pub use control::ControlActorsAction;
pub use director::Director;
pub use draw::DrawActorsAction;
pub use movement::MoveActorsAction;
