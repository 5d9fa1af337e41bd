//! A* solver for the 3x3 sliding tile puzzle with one or two blanks.
//!
//! ```
//! use eight_puzzle::{solve, State};
//!
//! let start: State = "6 0 0 3 5 1 7 2 4".parse().unwrap();
//! let solution = solve(&start, &State::GOAL).unwrap();
//! assert_eq!(solution.path.last().unwrap().state, State::GOAL);
//! ```

pub mod error;
pub mod heuristic;
pub mod scramble;
pub mod solver;
pub mod state;
pub mod successors;

pub use error::{Result, SolveError, StateError};
pub use heuristic::heuristic;
pub use scramble::{is_solvable, scramble};
pub use solver::{solve, Solution, Solver, Step};
pub use state::State;
pub use successors::successors;
