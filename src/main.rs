use std::process::ExitCode;

use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tracing::{error, info, warn};

use eight_puzzle::state::SIDE;
use eight_puzzle::{heuristic, is_solvable, scramble, solve, successors, SolveError, State};

#[derive(Parser, Debug)]
#[command(
    name = "eight-puzzle",
    version,
    about = "Solve the 3x3 sliding tile puzzle with A* and Manhattan distance"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shortest path from STATE to the goal
    Solve {
        /// Nine tiles in row-major order, 0 for blanks
        state: State,
        /// Goal board (defaults to 1 2 3 4 5 6 7 0 0)
        #[arg(short, long, value_name = "STATE")]
        goal: Option<State>,
        /// Draw each step as a 3x3 board
        #[arg(long)]
        grid: bool,
    },
    /// Print every board one slide away from STATE with its heuristic
    Succ {
        state: State,
        #[arg(short, long, value_name = "STATE")]
        goal: Option<State>,
    },
    /// Generate a random solvable board and solve it
    Scramble {
        /// Seed for a reproducible board
        #[arg(short, long)]
        seed: Option<u64>,
        /// Use the single-blank goal 1 2 3 4 5 6 7 8 0
        #[arg(long)]
        one_blank: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eight_puzzle=info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.cmd {
        None => demo(),
        Some(Command::Solve { state, goal, grid }) => {
            print_solution(&state, &goal.unwrap_or(State::GOAL), grid)
        }
        Some(Command::Succ { state, goal }) => print_succ(&state, &goal.unwrap_or(State::GOAL)),
        Some(Command::Scramble { seed, one_blank }) => {
            let goal = if one_blank {
                State::GOAL_ONE_BLANK
            } else {
                State::GOAL
            };
            let state = match seed {
                Some(seed) => scramble(&goal, &mut StdRng::seed_from_u64(seed)),
                None => scramble(&goal, &mut thread_rng()),
            };
            info!(%state, "scrambled board");
            print_solution(&state, &goal, false)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sample run over two hardcoded boards.
fn demo() -> Result<(), SolveError> {
    let sample = State::new([2, 5, 1, 4, 0, 6, 7, 0, 3])?;

    print_succ(&sample, &State::GOAL)?;
    println!();

    println!("{}", heuristic(&sample, &State::GOAL)?);
    println!();

    let start = State::new([6, 0, 0, 3, 5, 1, 7, 2, 4])?;
    print_solution(&start, &State::GOAL, false)?;
    println!();

    Ok(())
}

fn print_succ(state: &State, goal: &State) -> Result<(), SolveError> {
    for succ in successors(state) {
        println!("{} h={}", succ, heuristic(&succ, goal)?);
    }
    Ok(())
}

fn print_solution(state: &State, goal: &State, grid: bool) -> Result<(), SolveError> {
    if !is_solvable(state, goal) {
        warn!(%state, %goal, "board looks unsolvable, searching anyway");
    }

    let solution = solve(state, goal)?;
    for (i, step) in solution.path.iter().enumerate() {
        if grid {
            println!("h={} moves: {}", step.h, i);
            print!("{}", render(&step.state));
            println!();
        } else {
            println!("{} h={} moves: {}", step.state, step.h, i);
        }
    }
    println!("Max queue length: {}", solution.max_frontier);
    Ok(())
}

/// Board drawn row by row with blanks dimmed.
fn render(state: &State) -> String {
    let mut out = String::new();
    for row in state.tiles().chunks(SIDE) {
        for &val in row {
            let cell = if val == 0 {
                " . ".dark_grey().to_string()
            } else {
                format!("{:2} ", val).bold().to_string()
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}
