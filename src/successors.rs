//! One-move neighbourhood of a board.

use tracing::trace;

use crate::state::{neighbor, Direction, State};

/// Every board reachable by sliding one tile into an adjacent blank.
///
/// The result never contains `state` itself, holds no duplicates and is
/// sorted ascending so expansion order does not depend on discovery order.
pub fn successors(state: &State) -> Vec<State> {
    let mut succ = Vec::with_capacity(8);

    for blank in state.blanks() {
        for dir in Direction::ALL {
            let Some(next) = neighbor(blank, dir) else {
                continue;
            };
            let candidate = state.swapped(blank, next);
            // Swapping two blanks leaves the board unchanged.
            if candidate != *state && !succ.contains(&candidate) {
                succ.push(candidate);
            }
        }
    }

    succ.sort_unstable();
    trace!(state = %state, count = succ.len(), "generated successors");
    succ
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    fn state(tiles: [u8; 9]) -> State {
        State::new(tiles).unwrap()
    }

    #[test]
    fn sample_board_successors() {
        let from = state([2, 5, 1, 4, 0, 6, 7, 0, 3]);
        let expected = vec![
            state([2, 0, 1, 4, 5, 6, 7, 0, 3]),
            state([2, 5, 1, 0, 4, 6, 7, 0, 3]),
            state([2, 5, 1, 4, 0, 6, 0, 7, 3]),
            state([2, 5, 1, 4, 0, 6, 7, 3, 0]),
            state([2, 5, 1, 4, 6, 0, 7, 0, 3]),
        ];
        assert_eq!(successors(&from), expected);
    }

    #[test]
    fn single_blank_corner_has_two_moves() {
        let from = state([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            successors(&from),
            vec![
                state([1, 0, 2, 3, 4, 5, 6, 7, 8]),
                state([3, 1, 2, 0, 4, 5, 6, 7, 8]),
            ]
        );
    }

    #[test]
    fn single_blank_center_has_four_moves() {
        let from = state([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(successors(&from).len(), 4);
    }

    #[test]
    fn sorted_unique_and_excludes_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut tiles = *State::GOAL.tiles();
        for _ in 0..500 {
            tiles.shuffle(&mut rng);
            let from = state(tiles);
            let succ = successors(&from);

            assert!((2..=8).contains(&succ.len()), "{} -> {}", from, succ.len());
            assert!(!succ.contains(&from));
            assert!(succ.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn every_successor_differs_by_one_slide() {
        let from = state([6, 0, 0, 3, 5, 1, 7, 2, 4]);
        for next in successors(&from) {
            let changed: Vec<usize> = (0..9)
                .filter(|&i| from.tiles()[i] != next.tiles()[i])
                .collect();
            assert_eq!(changed.len(), 2);
            assert!(changed.iter().any(|&i| from.tiles()[i] == 0));
        }
    }
}
