//! A* search over puzzle boards.
//!
//! The frontier is a binary heap without decrease-key: improved routes are
//! pushed as fresh entries and superseded ones are dropped when popped.

use std::cmp::Reverse;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::error::{Result, SolveError};
use crate::heuristic::GoalTable;
use crate::state::State;
use crate::successors::successors;

/// One board on a solution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: State,
    /// Manhattan distance to the goal.
    pub h: u32,
    /// Moves taken from the initial board.
    pub g: u32,
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Boards from the initial one to the goal, inclusive.
    pub path: Vec<Step>,
    /// Largest number of entries the frontier held at once.
    pub max_frontier: usize,
}

impl Solution {
    /// Number of slides in the solution.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Frontier entry. Field order is the heap order: priority first, then the
/// board itself so equal-priority ties resolve deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    priority: u32,
    state: State,
    g: u32,
    h: u32,
    /// Index into the expansion records; `None` for the initial board.
    parent: Option<usize>,
}

/// Search state for a single solve. Nothing outlives [`Solver::run`].
pub struct Solver {
    goal: State,
    table: GoalTable,
    frontier: BinaryHeap<Reverse<Entry>>,
    /// Lowest `g` seen per board.
    visited: HashMap<State, u32>,
    parents: HashMap<State, Option<usize>>,
    /// Expanded boards in expansion order.
    records: Vec<Step>,
    max_frontier: usize,
}

impl Solver {
    /// Prepares a search from `initial` to `goal`.
    ///
    /// Both boards must carry the same tiles.
    pub fn new(initial: State, goal: State) -> Result<Self> {
        initial.check_same_tiles(&goal)?;

        let table = GoalTable::new(&goal);
        let h = table.distance(&initial);

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(Entry {
            priority: h,
            state: initial,
            g: 0,
            h,
            parent: None,
        }));

        Ok(Self {
            goal,
            table,
            frontier,
            visited: HashMap::from([(initial, 0)]),
            parents: HashMap::from([(initial, None)]),
            records: Vec::new(),
            max_frontier: 1,
        })
    }

    /// Runs the search to completion.
    pub fn run(mut self) -> Result<Solution> {
        debug!(goal = %self.goal, "starting search");

        let mut found = false;

        while let Some(Reverse(entry)) = self.frontier.pop() {
            if self.visited.get(&entry.state).is_some_and(|&best| best < entry.g) {
                trace!(state = %entry.state, g = entry.g, "skipping stale entry");
                continue;
            }

            self.visited.insert(entry.state, entry.g);
            self.parents.insert(entry.state, entry.parent);
            self.records.push(Step {
                state: entry.state,
                h: entry.h,
                g: entry.g,
            });
            trace!(state = %entry.state, g = entry.g, h = entry.h, "expanded");

            if entry.state == self.goal {
                found = true;
                break;
            }

            self.expand(&entry);
        }

        if !found {
            debug!(
                expanded = self.records.len(),
                max_frontier = self.max_frontier,
                "frontier exhausted"
            );
            return Err(SolveError::Unsolvable {
                expanded: self.records.len(),
                max_frontier: self.max_frontier,
            });
        }

        let path = self.reconstruct();
        debug!(
            moves = path.len() - 1,
            expanded = self.records.len(),
            max_frontier = self.max_frontier,
            "solved"
        );

        Ok(Solution {
            path,
            max_frontier: self.max_frontier,
        })
    }

    /// Queues every successor of `current` that is new or newly cheaper.
    fn expand(&mut self, current: &Entry) {
        let parent = self.records.len() - 1;
        let g = current.g + 1;

        for next in successors(&current.state) {
            let h = self.table.distance(&next);

            match self.visited.entry(next) {
                MapEntry::Occupied(mut seen) => {
                    if *seen.get() <= g {
                        continue;
                    }
                    seen.insert(g);
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(g);
                }
            }

            self.frontier.push(Reverse(Entry {
                priority: g + h,
                state: next,
                g,
                h,
                parent: Some(parent),
            }));
            self.max_frontier = self.max_frontier.max(self.frontier.len());
        }
    }

    /// Walks parent links back from the last expanded board.
    fn reconstruct(&self) -> Vec<Step> {
        let mut path = Vec::new();
        let mut index = self.records.len().checked_sub(1);

        while let Some(i) = index {
            let step = self.records[i];
            path.push(step);
            index = self.parents.get(&step.state).copied().flatten();
        }

        path.reverse();
        path
    }
}

/// Shortest sequence of boards from `initial` to `goal`.
pub fn solve(initial: &State, goal: &State) -> Result<Solution> {
    Solver::new(*initial, *goal)?.run()
}
