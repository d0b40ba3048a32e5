use super::actor::Actor;
use super::cycle::Cycle;
use super::direction::Player;
use super::point::{Bounds, Point};

/// Role groups actors are filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Cycles,
    Foods,
    Scores,
    Messages,
}

/// Every actor in the scene, grouped by role.
///
/// Two cycles (red first), one food and two scores are held in fixed slots, so a cast with a
/// missing or extra member of those groups cannot be built. Only messages come and go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    cycles: [Cycle; 2],
    food: Actor,
    scores: [Actor; 2],
    messages: Vec<Actor>,
    bounds: Bounds,
}

impl Cast {
    pub fn new(cycles: [Cycle; 2], food: Actor, scores: [Actor; 2], bounds: Bounds) -> Self {
        Self {
            cycles,
            food,
            scores,
            messages: Vec::new(),
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn cycle(&self, player: Player) -> &Cycle {
        &self.cycles[player.index()]
    }

    pub fn cycle_mut(&mut self, player: Player) -> &mut Cycle {
        &mut self.cycles[player.index()]
    }

    pub fn cycles_mut(&mut self) -> &mut [Cycle; 2] {
        &mut self.cycles
    }

    pub fn food(&self) -> &Actor {
        &self.food
    }

    pub fn food_mut(&mut self) -> &mut Actor {
        &mut self.food
    }

    pub fn score(&self, player: Player) -> &Actor {
        &self.scores[player.index()]
    }

    pub fn score_mut(&mut self, player: Player) -> &mut Actor {
        &mut self.scores[player.index()]
    }

    pub fn messages(&self) -> &[Actor] {
        &self.messages
    }

    /// Actors of one group in insertion order. Cycles contribute their segments, red first.
    pub fn actors(&self, group: Group) -> Vec<&Actor> {
        match group {
            Group::Cycles => self
                .cycles
                .iter()
                .flat_map(|cycle| cycle.segments().iter())
                .collect(),
            Group::Foods => vec![&self.food],
            Group::Scores => self.scores.iter().collect(),
            Group::Messages => self.messages.iter().collect(),
        }
    }

    pub fn first_actor(&self, group: Group) -> Option<&Actor> {
        self.actors(group).into_iter().next()
    }

    /// Every actor in the scene: cycles, food, scores, then messages
    pub fn all_actors(&self) -> Vec<&Actor> {
        [Group::Cycles, Group::Foods, Group::Scores, Group::Messages]
            .into_iter()
            .flat_map(|group| self.actors(group))
            .collect()
    }

    /// Actors that move on their own rather than as part of a cycle
    pub fn free_actors_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        std::iter::once(&mut self.food)
            .chain(self.scores.iter_mut())
            .chain(self.messages.iter_mut())
    }

    /// File an actor under `group`.
    ///
    /// # Panics
    ///
    /// Cycles, foods and scores have fixed membership; adding to them is a caller bug.
    pub fn add_actor(&mut self, group: Group, actor: Actor) {
        match group {
            Group::Messages => self.messages.push(actor),
            fixed => panic!("cannot add an actor to fixed-size group {:?}", fixed),
        }
    }

    /// Cells covered by any cycle segment
    pub fn occupied_cells(&self) -> Vec<Point> {
        self.actors(Group::Cycles)
            .into_iter()
            .map(|segment| segment.position)
            .collect()
    }
}
