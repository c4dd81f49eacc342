//! Breadth-first, depth-first and A* search over the 8-tile sliding puzzle.

pub mod cli;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod puzzle;
pub mod search;
pub mod visited;

pub use error::PuzzleError;
pub use heuristic::Heuristic;
pub use puzzle::{Fingerprint, Move, State, GOAL};
pub use search::{
    run, search_astar_linear_conflict, search_astar_manhattan, search_astar_misplaced,
    search_bfs, search_dfs, SearchResult, SearchStatus, Strategy,
};
