use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Cardinal direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// One-cell step offset.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell::new(self.x + dx, self.y + dy)
    }

    pub fn in_bounds(self, cols: i32, rows: i32) -> bool {
        self.x >= 0 && self.x < cols && self.y >= 0 && self.y < rows
    }
}

/// Pick a food cell uniformly over the grid, never on the snake body.
///
/// Rejection sampling: the body covers a small fraction of the grid in any
/// playable state, so this terminates quickly.
pub fn random_food(rng: &mut StdRng, cols: i32, rows: i32, body: &VecDeque<Cell>) -> Cell {
    loop {
        let cell = Cell::new(rng.random_range(0..cols), rng.random_range(0..rows));
        if !body.contains(&cell) {
            return cell;
        }
    }
}
