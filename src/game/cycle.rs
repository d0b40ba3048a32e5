use super::actor::{Actor, HEAD_GLYPH, SEGMENT_GLYPH};
use super::color::Color;
use super::point::{Bounds, Point};

/// A player's light cycle: a trail of segments with the head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    segments: Vec<Actor>,
    color: Color,
    bounds: Bounds,
}

impl Cycle {
    /// Create a cycle of `length` segments trailing behind `head`, all travelling at `velocity`
    pub fn new(head: Point, velocity: Point, length: usize, color: Color, bounds: Bounds) -> Self {
        let mut cycle = Self {
            segments: vec![Actor::segment(head, velocity, color, HEAD_GLYPH)],
            color,
            bounds,
        };
        cycle.grow_tail(length.saturating_sub(1));
        cycle
    }

    pub fn head(&self) -> &Actor {
        &self.segments[0]
    }

    pub fn segments(&self) -> &[Actor] {
        &self.segments
    }

    /// Everything behind the head
    pub fn body(&self) -> &[Actor] {
        &self.segments[1..]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a cycle keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Set the head's velocity. Reversing into the neck is not rejected.
    pub fn turn_head(&mut self, velocity: Point) {
        self.segments[0].velocity = velocity;
    }

    /// Append `count` segments behind the tail, each following the tail's velocity
    pub fn grow_tail(&mut self, count: usize) {
        for _ in 0..count {
            let tail = &self.segments[self.segments.len() - 1];
            let velocity = tail.velocity;
            let position = tail.position.add(velocity.reverse()).wrapped(self.bounds);
            self.segments
                .push(Actor::segment(position, velocity, self.color, SEGMENT_GLYPH));
        }
    }

    /// Move every segment, then hand each segment the velocity of the one ahead of it
    pub fn move_next(&mut self) {
        for segment in &mut self.segments {
            segment.move_next(self.bounds);
        }
        for i in (1..self.segments.len()).rev() {
            self.segments[i].velocity = self.segments[i - 1].velocity;
        }
    }

    /// Recolor the whole trail
    pub fn paint(&mut self, color: Color) {
        for segment in &mut self.segments {
            segment.color = color;
        }
    }
}
