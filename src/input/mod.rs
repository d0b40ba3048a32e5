//! Keyboard plumbing between the terminal and the frame actions

pub mod handler;

pub use handler::{InputHandler, KeyAction, KeyboardState};

/// Level-triggered key state, polled once per frame
pub trait KeyboardService {
    /// True while `key` counts as held for the current frame. Letters are matched lowercase.
    fn is_key_down(&self, key: char) -> bool;
}
