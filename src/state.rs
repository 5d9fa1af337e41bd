//! Board representation for the 3x3 sliding puzzle.
//!
//! A [`State`] is a row-major arrangement of nine cells where `0` marks a
//! blank. Boards carry one or two blanks; every constructed `State` has been
//! validated, so the search code never has to re-check it.

use std::fmt;
use std::str::FromStr;

use crate::error::StateError;

/// Width and height of the board.
pub const SIDE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;
/// Largest tile value a board may hold.
pub const MAX_TILE: u8 = 8;

/// Slide directions on the board.
///
/// `y` is the row index and grows downward, so `Down` moves to the next row
/// in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Neighbour offsets in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Converts a linear cell index into `(x, y)` board coordinates.
pub fn coords(index: usize) -> (usize, usize) {
    (index % SIDE, index / SIDE)
}

/// Index of the cell next to `index` in direction `dir`, if it is on the board.
pub fn neighbor(index: usize, dir: Direction) -> Option<usize> {
    let (x, y) = coords(index);
    let (dx, dy) = dir.as_offset();

    let nx = x as isize + dx;
    let ny = y as isize + dy;

    if nx >= 0 && nx < SIDE as isize && ny >= 0 && ny < SIDE as isize {
        Some(ny as usize * SIDE + nx as usize)
    } else {
        None
    }
}

/// An immutable, validated tile arrangement.
///
/// Ordering is lexicographic over the cells, which is the tie-breaker the
/// solver relies on for deterministic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State([u8; CELLS]);

impl State {
    /// Canonical goal: tiles 1-7 in reading order, two trailing blanks.
    pub const GOAL: State = State([1, 2, 3, 4, 5, 6, 7, 0, 0]);

    /// Goal for the single-blank variant.
    pub const GOAL_ONE_BLANK: State = State([1, 2, 3, 4, 5, 6, 7, 8, 0]);

    pub fn new(tiles: [u8; CELLS]) -> Result<Self, StateError> {
        Self::from_cells(tiles.map(u32::from))
    }

    /// Validates an arbitrary cell sequence and builds a board from it.
    pub fn from_cells<I>(cells: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut tiles = [0u8; CELLS];
        let mut seen = [false; MAX_TILE as usize + 1];
        let mut blanks = 0;
        let mut len = 0;

        for cell in cells {
            if len < CELLS {
                if cell > MAX_TILE as u32 {
                    return Err(StateError::TileOutOfRange(cell));
                }
                let tile = cell as u8;
                if tile == 0 {
                    blanks += 1;
                } else if seen[tile as usize] {
                    return Err(StateError::DuplicateTile(tile));
                } else {
                    seen[tile as usize] = true;
                }
                tiles[len] = tile;
            }
            len += 1;
        }

        if len != CELLS {
            return Err(StateError::WrongLength(len));
        }
        if !(1..=2).contains(&blanks) {
            return Err(StateError::BlankCount(blanks));
        }

        Ok(State(tiles))
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Indices of the blank cells, in ascending order.
    pub fn blanks(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == 0)
            .map(|(i, _)| i)
    }

    pub fn blank_count(&self) -> usize {
        self.blanks().count()
    }

    /// Cell index holding `tile`.
    pub fn position(&self, tile: u8) -> Option<usize> {
        self.0.iter().position(|&t| t == tile)
    }

    /// A new board with cells `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> State {
        let mut tiles = self.0;
        tiles.swap(a, b);
        State(tiles)
    }

    /// Checks that both boards carry the same non-blank tiles.
    pub fn check_same_tiles(&self, other: &State) -> Result<(), StateError> {
        for (a, b) in [(self, other), (other, self)] {
            if let Some(&tile) = a.0.iter().find(|&&t| t != 0 && b.position(t).is_none()) {
                return Err(StateError::TileMismatch(tile));
            }
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for State {
    type Error = StateError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        Self::from_cells(tiles.iter().map(|&t| u32::from(t)))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tile) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tile)?;
        }
        write!(f, "]")
    }
}

impl FromStr for State {
    type Err = StateError;

    /// Accepts `6 0 0 3 5 1 7 2 4`, `6,0,0,...` or `[6, 0, 0, ...]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body.strip_prefix('[').unwrap_or(body);
        let body = body.strip_suffix(']').unwrap_or(body);

        let cells = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u32>()
                    .map_err(|_| StateError::Parse(format!("`{}` is not a tile", tok)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_textual_forms() {
        let expected = State::new([6, 0, 0, 3, 5, 1, 7, 2, 4]).unwrap();
        assert_eq!("6 0 0 3 5 1 7 2 4".parse::<State>().unwrap(), expected);
        assert_eq!("6,0,0,3,5,1,7,2,4".parse::<State>().unwrap(), expected);
        assert_eq!("[6, 0, 0, 3, 5, 1, 7, 2, 4]".parse::<State>().unwrap(), expected);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let state = State::GOAL;
        assert_eq!(state.to_string(), "[1, 2, 3, 4, 5, 6, 7, 0, 0]");
        assert_eq!(state.to_string().parse::<State>().unwrap(), state);
    }

    #[test]
    fn rejects_malformed_boards() {
        assert_eq!(
            "1 2 3".parse::<State>(),
            Err(StateError::WrongLength(3))
        );
        assert_eq!(
            State::from_cells([1u32, 2, 3, 4, 5, 6, 7, 9, 0]),
            Err(StateError::TileOutOfRange(9))
        );
        assert_eq!(
            State::new([1, 1, 3, 4, 5, 6, 7, 0, 0]),
            Err(StateError::DuplicateTile(1))
        );
        assert_eq!(
            State::new([1, 2, 3, 4, 0, 0, 7, 0, 0]),
            Err(StateError::BlankCount(4))
        );
        assert_eq!(
            State::new([1, 2, 3, 4, 5, 6, 7, 8, 8]),
            Err(StateError::DuplicateTile(8))
        );
        assert!(matches!(
            "1 2 x 4 5 6 7 0 0".parse::<State>(),
            Err(StateError::Parse(_))
        ));
    }

    #[test]
    fn tile_sets_must_match() {
        assert!(State::GOAL.check_same_tiles(&State::GOAL).is_ok());
        assert_eq!(
            State::GOAL_ONE_BLANK.check_same_tiles(&State::GOAL),
            Err(StateError::TileMismatch(8))
        );
        assert_eq!(
            State::GOAL.check_same_tiles(&State::GOAL_ONE_BLANK),
            Err(StateError::TileMismatch(8))
        );
    }

    #[test]
    fn neighbors_stay_on_board() {
        assert_eq!(neighbor(0, Direction::Left), None);
        assert_eq!(neighbor(0, Direction::Up), None);
        assert_eq!(neighbor(0, Direction::Right), Some(1));
        assert_eq!(neighbor(8, Direction::Right), None);
        assert_eq!(neighbor(8, Direction::Down), None);
    }

    #[test]
    fn down_moves_to_the_next_row() {
        assert_eq!(neighbor(0, Direction::Down), Some(3));
        assert_eq!(neighbor(4, Direction::Down), Some(7));
        assert_eq!(neighbor(4, Direction::Up), Some(1));
        assert_eq!(coords(7), (1, 2));
    }

    #[test]
    fn slices_of_any_length_are_checked() {
        let short: &[u8] = &[1, 2, 3];
        assert_eq!(State::try_from(short), Err(StateError::WrongLength(3)));

        let long: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 0, 0, 0];
        assert_eq!(State::try_from(long), Err(StateError::WrongLength(10)));

        let exact: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 0, 0];
        assert_eq!(State::try_from(exact), Ok(State::GOAL));
        assert_eq!(
            State::from_cells([6u32, 0, 0, 3, 5, 1, 7, 2, 4]),
            State::new([6, 0, 0, 3, 5, 1, 7, 2, 4])
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = State::new([0, 2, 3, 4, 5, 6, 7, 1, 0]).unwrap();
        let b = State::new([1, 0, 3, 4, 5, 6, 7, 2, 0]).unwrap();
        assert!(a < b);
        assert!(b < State::GOAL);
    }
}
