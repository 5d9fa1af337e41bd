//! Random boards that are known to be solvable.

use rand::{seq::SliceRandom, Rng};

use crate::state::{State, CELLS};

/// Whether `goal` can be reached from `state` at all.
///
/// With two blanks every arrangement is reachable. With one blank, on an
/// odd-width board a slide never changes the parity of the tile sequence's
/// inversion count, so both boards must agree on it.
pub fn is_solvable(state: &State, goal: &State) -> bool {
    if state.check_same_tiles(goal).is_err() {
        return false;
    }
    state.blank_count() == 2 || odd_inversions(state) == odd_inversions(goal)
}

/// True when an odd number of tile pairs read out of order. A blank never
/// counts as smaller than the tile before it.
fn odd_inversions(state: &State) -> bool {
    let tiles = state.tiles();
    let mut odd = false;
    for i in 0..CELLS {
        for &later in &tiles[i + 1..] {
            if later != 0 && later < tiles[i] {
                odd = !odd;
            }
        }
    }
    odd
}

/// Shuffles the cells of `goal` until the arrangement is solvable.
pub fn scramble<R: Rng + ?Sized>(goal: &State, rng: &mut R) -> State {
    let mut tiles = *goal.tiles();

    loop {
        tiles.shuffle(rng);

        // A permutation of a valid board is itself valid.
        if let Ok(state) = State::try_from(&tiles[..]) {
            if is_solvable(&state, goal) {
                return state;
            }
        }
    }
}
