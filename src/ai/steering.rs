//! Turning a target tile into a direction.

use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::entity::actor::Actor;
use crate::map::direction::Direction;
use crate::map::maze::Occupancy;

pub type Candidates = SmallVec<[Direction; 4]>;

/// Euclidean distance between two cells, in tiles.
pub fn distance(a: IVec2, b: IVec2) -> f32 {
    a.as_vec2().distance(b.as_vec2())
}

/// Directions whose destination is traversable, in `Up, Down, Left, Right` order.
pub fn legal_directions(actor: &Actor, maze: &impl Occupancy) -> Candidates {
    Direction::DIRECTIONS
        .iter()
        .copied()
        .filter(|&direction| actor.can_move(maze, direction))
        .collect()
}

/// Drops the reverse of `facing`, unless it is the only option left.
pub fn without_reversal(mut candidates: Candidates, facing: Direction) -> Candidates {
    let reverse = facing.opposite();
    if candidates.iter().any(|&d| d != reverse) {
        candidates.retain(|d| *d != reverse);
    }
    candidates
}

/// The non-reversing legal direction that lands closest to `target`.
///
/// Ties keep the earliest candidate. Returns `None` when the actor is boxed in.
pub fn best_direction(actor: &Actor, maze: &impl Occupancy, target: IVec2) -> Option<Direction> {
    let candidates = without_reversal(legal_directions(actor, maze), actor.facing());

    let mut best: Option<(Direction, f32)> = None;
    for direction in candidates {
        let score = distance(actor.neighbor(direction), target);
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((direction, score));
        }
    }
    best.map(|(direction, _)| direction)
}

/// A uniformly random non-reversing legal direction, reversing only as a last resort.
pub fn random_direction(actor: &Actor, maze: &impl Occupancy, rng: &mut impl Rng) -> Option<Direction> {
    let candidates = without_reversal(legal_directions(actor, maze), actor.facing());
    candidates.choose(rng).copied()
}

/// Greedy homeward steps in preference order.
///
/// The X axis comes first; the Y axis follows as the fallback, or leads once
/// X is aligned. Empty when `from == to`.
pub fn homeward_directions(from: IVec2, to: IVec2) -> Candidates {
    let mut steps = Candidates::new();
    if to.x != from.x {
        steps.push(if to.x > from.x { Direction::Right } else { Direction::Left });
    }
    if to.y != from.y {
        steps.push(if to.y > from.y { Direction::Down } else { Direction::Up });
    }
    steps
}
