//! Per-personality target tiles.
//!
//! Every strategy is a pure function of positions; none of them checks the
//! target against the maze; distance scoring copes with off-board targets.

use glam::IVec2;

use crate::ai::steering::distance;
use crate::constants::targeting::{AMBUSH_DISTANCE, BASHFUL_RETREAT_DISTANCE, FICKLE_PIVOT_DISTANCE};
use crate::entity::ghost::Personality;
use crate::entity::PlayerView;
use crate::map::direction::Direction;

/// Fixed scatter corner for each personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterCorners([IVec2; 4]);

impl ScatterCorners {
    /// The corners just inside the border of a `width` x `height` maze.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let right = width as i32 - 2;
        let bottom = height as i32 - 2;
        Self([
            IVec2::new(1, 1),
            IVec2::new(right, 1),
            IVec2::new(1, bottom),
            IVec2::new(right, bottom),
        ])
    }

    pub fn corner(&self, personality: Personality) -> IVec2 {
        self.0[personality.as_usize()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetingParams {
    pub ambush_distance: i32,
    pub fickle_pivot_distance: i32,
    /// The Bashful ghost retreats while strictly closer than this.
    pub bashful_retreat_distance: f32,
    /// Facing Up offsets the ambush point diagonally by half the distance on both axes.
    pub ambusher_up_quirk: bool,
}

impl Default for TargetingParams {
    fn default() -> Self {
        Self {
            ambush_distance: AMBUSH_DISTANCE,
            fickle_pivot_distance: FICKLE_PIVOT_DISTANCE,
            bashful_retreat_distance: BASHFUL_RETREAT_DISTANCE,
            ambusher_up_quirk: true,
        }
    }
}

/// Everything a chase strategy may look at.
#[derive(Debug, Clone, Copy)]
pub struct ChaseContext {
    pub ghost_cell: IVec2,
    pub player_cell: IVec2,
    pub player_facing: Direction,
    /// Cell of the Chaser ghost, when one is on the board.
    pub chaser_cell: Option<IVec2>,
}

impl ChaseContext {
    pub fn new(ghost_cell: IVec2, player: &impl PlayerView, chaser_cell: Option<IVec2>) -> Self {
        Self {
            ghost_cell,
            player_cell: player.cell(),
            player_facing: player.facing(),
            chaser_cell,
        }
    }
}

pub fn chaser_target(player_cell: IVec2) -> IVec2 {
    player_cell
}

pub fn ambusher_target(player_cell: IVec2, facing: Direction, params: &TargetingParams) -> IVec2 {
    let offset = match facing {
        Direction::Up if params.ambusher_up_quirk => IVec2::splat(-params.ambush_distance / 2),
        _ => facing.as_ivec2() * params.ambush_distance,
    };
    player_cell + offset
}

/// Reflects the Chaser's cell through the point just ahead of the player.
pub fn fickle_target(player_cell: IVec2, facing: Direction, chaser_cell: IVec2, params: &TargetingParams) -> IVec2 {
    let pivot = player_cell + facing.as_ivec2() * params.fickle_pivot_distance;
    pivot + (pivot - chaser_cell)
}

pub fn bashful_target(ghost_cell: IVec2, player_cell: IVec2, corner: IVec2, params: &TargetingParams) -> IVec2 {
    if distance(ghost_cell, player_cell) < params.bashful_retreat_distance {
        corner
    } else {
        player_cell
    }
}

/// Chase-mode target for `personality`.
pub fn chase_target(
    personality: Personality,
    context: &ChaseContext,
    corners: &ScatterCorners,
    params: &TargetingParams,
) -> IVec2 {
    match personality {
        Personality::Chaser => chaser_target(context.player_cell),
        Personality::Ambusher => ambusher_target(context.player_cell, context.player_facing, params),
        Personality::Fickle => match context.chaser_cell {
            Some(chaser_cell) => fickle_target(context.player_cell, context.player_facing, chaser_cell, params),
            None => chaser_target(context.player_cell),
        },
        Personality::Bashful => bashful_target(
            context.ghost_cell,
            context.player_cell,
            corners.corner(Personality::Bashful),
            params,
        ),
    }
}
