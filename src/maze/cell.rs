use std::fmt;

use crate::maze::Coord;

/// The four sides of a cell, in the fixed order used everywhere neighbors are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Top, right, bottom, left. Neighbor queries and tie-breaks rely on this order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    pub fn opposite(self) -> Self {
        Direction::ALL[(self.index() + 2) % 4]
    }

    /// Clockwise quarter turn.
    pub fn turn_right(self) -> Self {
        Direction::ALL[(self.index() + 1) % 4]
    }

    /// Counter-clockwise quarter turn.
    pub fn turn_left(self) -> Self {
        Direction::ALL[(self.index() + 3) % 4]
    }

    /// Row and column offset of one move in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Top => write!(f, "top"),
            Direction::Right => write!(f, "right"),
            Direction::Bottom => write!(f, "bottom"),
            Direction::Left => write!(f, "left"),
        }
    }
}

/// A single maze cell.
///
/// Walls are private so that they can only change through
/// [`Grid::remove_wall_between`](crate::maze::Grid::remove_wall_between), which keeps
/// both sides of a wall in sync. Everything else is plain state a renderer reads:
/// generation flags (`visited`, `in_maze`), role flags (`is_start`, `is_end`) and the
/// solution projection written by [`Maze::apply_marks`](crate::maze::Maze::apply_marks).
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
    walls: [bool; 4],
    pub visited: bool,
    /// Membership flag used by Prim's generator.
    pub in_maze: bool,
    pub is_start: bool,
    pub is_end: bool,
    /// Trail of everything the solver explored, the solution included. Unlike
    /// `visited` it survives [`Maze::clear_path_only`](crate::maze::Maze::clear_path_only).
    pub is_path: bool,
    pub is_solution: bool,
    /// `None` stands for an infinite distance.
    pub distance: Option<u32>,
    pub heuristic: u32,
    pub parent: Option<Coord>,
}

impl Cell {
    pub fn new(row: u16, col: u16) -> Self {
        Cell {
            row,
            col,
            walls: [true; 4],
            visited: false,
            in_maze: false,
            is_start: false,
            is_end: false,
            is_path: false,
            is_solution: false,
            distance: None,
            heuristic: 0,
            parent: None,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Walls in top, right, bottom, left order.
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Number of open sides.
    pub fn openings(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls[direction.index()] = present;
    }

    /// Restores all four walls and clears every flag except the start/end roles.
    pub(crate) fn reset(&mut self) {
        self.walls = [true; 4];
        self.in_maze = false;
        self.reset_path_data();
    }

    /// Clears solve-related state. Walls and start/end flags are untouched.
    pub fn reset_path_data(&mut self) {
        self.visited = false;
        self.is_path = false;
        self.is_solution = false;
        self.distance = None;
        self.parent = None;
    }
}
