//! Terminal drawing

pub mod renderer;

pub use renderer::{StatusLine, TerminalVideo};

use anyhow::Result;

use crate::game::Actor;

/// Double-buffered drawing surface used by the draw action
pub trait VideoService {
    fn clear_buffer(&mut self);
    fn draw_actor(&mut self, actor: &Actor);
    /// Draw a batch. With `centered`, each actor's text is centred on its position.
    fn draw_actors(&mut self, actors: &[Actor], centered: bool);
    /// Present everything drawn since the last clear
    fn flush_buffer(&mut self) -> Result<()>;
}
