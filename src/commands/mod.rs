//! Command implementations

pub mod assist;
pub mod console;
pub mod play;
pub mod solve;
pub mod test_all;

pub use assist::run_assist;
pub use play::{GameEnd, pick_solution, play_game, run_play};
pub use solve::{GuessStep, SolveResult, solve_with, solve_word};
pub use test_all::{
    SolutionSource, TestStatistics, run_test_all, select_solutions, write_statistics,
};
