use rand::{seq::SliceRandom, Rng};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};

/// Side length of the grid.
pub const WIDTH: usize = 3;

/// Number of cells on the grid, blank included.
pub const CELLS: usize = WIDTH * WIDTH;

/// Tiles of the solved arrangement, row-major, blank last.
pub const GOAL_TILES: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// The solved arrangement.
pub const GOAL: State = State {
    tiles: GOAL_TILES,
    blank: 8,
    key: Fingerprint(123_456_780),
};

/// Cells the blank may swap with, indexed by the blank's cell.
///
/// The order of each row fixes the order successors are generated in.
pub const NEIGHBORS: [&[usize]; CELLS] = [
    &[1, 3],
    &[2, 4, 0],
    &[5, 1],
    &[0, 4, 6],
    &[1, 5, 7, 3],
    &[2, 8, 4],
    &[3, 7],
    &[4, 8, 6],
    &[5, 7],
];

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Change in (row, column) of the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The move that carries the blank from cell `from` to the adjacent cell `to`.
    pub fn between(from: usize, to: usize) -> Option<Self> {
        if from >= CELLS || to >= CELLS {
            return None;
        }
        match to as isize - from as isize {
            -3 => Some(Move::Up),
            3 => Some(Move::Down),
            -1 if from / WIDTH == to / WIDTH => Some(Move::Left),
            1 if from / WIDTH == to / WIDTH => Some(Move::Right),
            _ => None,
        }
    }

    /// Cell the blank lands on when this move is applied from `blank`.
    pub fn target(&self, blank: usize) -> Option<usize> {
        let (dr, dc) = self.as_offset();
        let row = (blank / WIDTH) as isize + dr;
        let col = (blank % WIDTH) as isize + dc;

        if row >= 0 && row < WIDTH as isize && col >= 0 && col < WIDTH as isize {
            Some(row as usize * WIDTH + col as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Canonical key of a [`State`]: its tiles read row-major as a 9-digit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u32);

impl Fingerprint {
    fn of(tiles: &[u8; CELLS]) -> Self {
        Fingerprint(tiles.iter().fold(0, |acc, &t| acc * 10 + u32::from(t)))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Digits of the fingerprint, row-major.
    pub fn tiles(&self) -> [u8; CELLS] {
        let mut tiles = [0; CELLS];
        let mut rest = self.0;
        for cell in tiles.iter_mut().rev() {
            *cell = (rest % 10) as u8;
            rest /= 10;
        }
        tiles
    }

    /// Cell holding the blank.
    pub fn blank(&self) -> usize {
        self.tiles().iter().position(|&t| t == 0).unwrap_or(CELLS - 1)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One arrangement of the nine cells. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct State {
    tiles: [u8; CELLS],
    blank: u8,
    key: Fingerprint,
}

impl State {
    /// Builds a state, rejecting anything that is not a permutation of 0..=8.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for (position, &value) in tiles.iter().enumerate() {
            if value as usize >= CELLS {
                return Err(PuzzleError::TileOutOfRange { value, position });
            }
            if seen[value as usize] {
                return Err(PuzzleError::DuplicateTile { value });
            }
            seen[value as usize] = true;
        }

        Ok(Self::from_valid(tiles))
    }

    /// Caller guarantees `tiles` is a permutation of 0..=8.
    fn from_valid(tiles: [u8; CELLS]) -> Self {
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(0) as u8;
        Self {
            tiles,
            blank,
            key: Fingerprint::of(&tiles),
        }
    }

    /// Uniformly random arrangement. Half of these cannot reach [`GOAL`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(rng);
        Self::from_valid(tiles)
    }

    /// Random arrangement drawn until one is solvable.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let state = Self::random(rng);
            if state.is_solvable() {
                return state;
            }
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.key
    }

    /// Cell currently holding the blank.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    pub fn is_goal(&self) -> bool {
        self.key == GOAL.key
    }

    /// Whether [`GOAL`] is reachable. On an odd-width grid that holds
    /// exactly when the inversion count is even.
    pub fn is_solvable(&self) -> bool {
        Self::count_inversions(&self.tiles) % 2 == 0
    }

    fn count_inversions(tiles: &[u8]) -> usize {
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Swaps the blank with cell `target`. The caller checks adjacency.
    fn swapped(&self, target: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(self.blank(), target);
        Self {
            tiles,
            blank: target as u8,
            key: Fingerprint::of(&tiles),
        }
    }

    pub fn try_move(&self, dir: Move) -> Option<Self> {
        dir.target(self.blank()).map(|target| self.swapped(target))
    }

    /// Every state one slide away, paired with the move that produces it.
    pub fn successors_with_moves(&self) -> impl Iterator<Item = (Move, State)> + '_ {
        let blank = self.blank();
        NEIGHBORS[blank].iter().filter_map(move |&target| {
            Move::between(blank, target).map(|dir| (dir, self.swapped(target)))
        })
    }

    /// Every state one slide away: two from a corner, three from an edge,
    /// four from the centre.
    pub fn successors(&self) -> Vec<State> {
        self.successors_with_moves().map(|(_, s)| s).collect()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for State {}

impl std::hash::Hash for State {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl From<Fingerprint> for State {
    fn from(key: Fingerprint) -> Self {
        Self::from_valid(key.tiles())
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    /// Accepts nine digits, optionally separated by commas or whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let mut tiles = Vec::with_capacity(CELLS);
        for (position, character) in s.trim().chars().enumerate() {
            if character == ',' || character.is_whitespace() {
                continue;
            }
            let digit = character
                .to_digit(10)
                .ok_or(PuzzleError::InvalidCharacter { character, position })?;
            tiles.push(digit as u8);
        }

        let tiles: [u8; CELLS] = tiles
            .as_slice()
            .try_into()
            .map_err(|_| PuzzleError::InvalidLength { got: tiles.len() })?;
        Self::new(tiles)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(WIDTH) {
            for &val in row {
                if val == 0 {
                    write!(f, " _ ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
