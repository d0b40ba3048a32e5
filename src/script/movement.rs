use crate::game::Cast;

/// Steps every actor in the cast along its velocity. Runs whether or not the round is over.
#[derive(Debug, Default)]
pub struct MoveActorsAction;

impl MoveActorsAction {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, cast: &mut Cast) {
        let bounds = cast.bounds();
        for cycle in cast.cycles_mut() {
            cycle.move_next();
        }
        for actor in cast.free_actors_mut() {
            actor.move_next(bounds);
        }
    }
}
