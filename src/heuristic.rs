//! Manhattan-distance heuristic.

use crate::error::StateError;
use crate::state::{coords, State, MAX_TILE};

/// Sum of per-tile Manhattan distances from `from` to `to`, ignoring blanks.
///
/// Fails when a tile of `from` has no place in `to`.
pub fn heuristic(from: &State, to: &State) -> Result<u32, StateError> {
    from.check_same_tiles(to)?;
    Ok(GoalTable::new(to).distance(from))
}

/// Precomputed target positions for every tile of a goal board.
///
/// Built once per solve so each per-node estimate is a plain table walk.
#[derive(Debug, Clone)]
pub struct GoalTable {
    positions: [usize; MAX_TILE as usize + 1],
}

impl GoalTable {
    pub fn new(goal: &State) -> Self {
        let mut positions = [0; MAX_TILE as usize + 1];
        for (i, &tile) in goal.tiles().iter().enumerate() {
            positions[tile as usize] = i;
        }
        Self { positions }
    }

    /// Heuristic of `state` against the goal this table was built from.
    ///
    /// The caller guarantees both boards share a tile set.
    pub fn distance(&self, state: &State) -> u32 {
        let mut distance = 0;
        for (i, &tile) in state.tiles().iter().enumerate() {
            if tile != 0 {
                let (x, y) = coords(i);
                let (gx, gy) = coords(self.positions[tile as usize]);
                distance += x.abs_diff(gx) + y.abs_diff(gy);
            }
        }
        distance as u32
    }
}
