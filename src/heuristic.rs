//! Distance estimates from a state to [`GOAL`](crate::puzzle::GOAL).
//!
//! All estimates are computed from the given state's own tiles; nothing is
//! carried over from a parent node.

use serde::Serialize;
use std::fmt;

use crate::puzzle::{State, CELLS, GOAL_TILES, WIDTH};

/// Row and column a non-blank tile occupies when solved.
fn goal_cell(value: u8) -> (usize, usize) {
    let index = value as usize - 1;
    (index / WIDTH, index % WIDTH)
}

/// Number of non-blank tiles not on their goal cell. Range 0..=8.
pub fn misplaced_tiles(state: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(GOAL_TILES.iter())
        .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
        .count() as u32
}

/// Sum over non-blank tiles of row distance plus column distance to the
/// tile's goal cell.
pub fn manhattan_distance(state: &State) -> u32 {
    let mut distance = 0;
    for (index, &value) in state.tiles().iter().enumerate() {
        if value != 0 {
            let (target_row, target_col) = goal_cell(value);
            distance += (index / WIDTH).abs_diff(target_row);
            distance += (index % WIDTH).abs_diff(target_col);
        }
    }
    distance as u32
}

/// Pairs of tiles sharing their goal row (or column) that sit in it in
/// reversed order.
pub fn linear_conflicts(state: &State) -> u32 {
    let tiles = state.tiles();
    let mut conflicts = 0;

    // Row conflicts
    for row in 0..WIDTH {
        let mut max_seen = 0;
        for col in 0..WIDTH {
            let value = tiles[row * WIDTH + col];
            if value != 0 && goal_cell(value).0 == row {
                if value > max_seen {
                    max_seen = value;
                } else {
                    conflicts += 1;
                }
            }
        }
    }

    // Column conflicts
    for col in 0..WIDTH {
        let mut max_seen = 0;
        for row in 0..WIDTH {
            let value = tiles[row * WIDTH + col];
            if value != 0 && goal_cell(value).1 == col {
                if value > max_seen {
                    max_seen = value;
                } else {
                    conflicts += 1;
                }
            }
        }
    }

    conflicts
}

/// Estimate used to order an A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
    /// Manhattan distance plus two moves per linear conflict.
    LinearConflict,
}

impl Heuristic {
    pub fn evaluate(&self, state: &State) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state),
            Heuristic::Manhattan => manhattan_distance(state),
            Heuristic::LinearConflict => manhattan_distance(state) + 2 * linear_conflicts(state),
        }
    }

    /// Largest value the estimate can take on a 3x3 grid.
    pub fn upper_bound(&self) -> u32 {
        match self {
            Heuristic::MisplacedTiles => (CELLS - 1) as u32,
            // Each tile is at most 4 slides from home.
            Heuristic::Manhattan => 4 * (CELLS - 1) as u32,
            Heuristic::LinearConflict => 4 * (CELLS - 1) as u32 + 2 * 2 * (2 * WIDTH) as u32,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heuristic::MisplacedTiles => "misplaced tiles",
            Heuristic::Manhattan => "Manhattan distance",
            Heuristic::LinearConflict => "linear conflict",
        };
        write!(f, "{}", s)
    }
}
