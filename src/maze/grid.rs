use super::cell::{Cell, Direction};
use crate::maze::Coord;

/// Fixed-size `rows x cols` array of cells, addressed by `(row, col)`.
#[derive(Debug, Clone)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: u16,
    cols: u16,
}

impl Grid {
    /// Creates a grid with every wall present. `(0, 0)` is the start cell and
    /// `(rows - 1, cols - 1)` the end cell.
    pub(crate) fn new(rows: u16, cols: u16) -> Self {
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let mut grid = Grid { data, rows, cols };
        let (start, end) = (grid.start(), grid.end());
        grid[start].is_start = true;
        grid[end].is_end = true;
        grid
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn start(&self) -> Coord {
        (0, 0)
    }

    pub fn end(&self) -> Coord {
        (self.rows - 1, self.cols - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    /// Flat index of a cell. Overflow-safe since both dimensions are u16.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    pub fn unravel_index(&self, index: usize) -> Coord {
        (
            (index / self.cols as usize) as u16,
            (index % self.cols as usize) as u16,
        )
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.is_in_bounds(coord)
            .then(|| &self.data[self.ravel_index(coord)])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.data.iter_mut()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// The in-bounds cell one move away from `coord` in `direction`, if any.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.offset();
        let row = coord.0 as i32 + dr;
        let col = coord.1 as i32 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        let next = (row as u16, col as u16);
        self.is_in_bounds(next).then_some(next)
    }

    /// Neighbors of `coord` in top, right, bottom, left order, restricted to the grid.
    ///
    /// With `include_walled == false` only neighbors reachable without crossing a
    /// wall are returned.
    pub fn neighbors(
        &self,
        coord: Coord,
        include_walled: bool,
    ) -> impl Iterator<Item = Coord> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter(move |&dir| include_walled || !self[coord].has_wall(dir))
            .filter_map(move |dir| self.step(coord, dir))
    }

    /// Side of `a` that faces `b`, or `None` when they are not orthogonally adjacent.
    pub fn direction_between(&self, a: Coord, b: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(a, dir) == Some(b))
    }

    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Whether `a` and `b` are adjacent with no wall between them.
    pub fn is_open_between(&self, a: Coord, b: Coord) -> bool {
        match self.direction_between(a, b) {
            Some(dir) => !self[a].has_wall(dir) && !self[b].has_wall(dir.opposite()),
            None => false,
        }
    }

    /// Removes the wall between two orthogonally adjacent cells, on both sides.
    ///
    /// # Panics
    /// * If either cell is out of bounds
    /// * If the cells are not at Manhattan distance 1
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) {
        let Some(dir) = self.direction_between(a, b) else {
            panic!("Cannot remove wall between non-adjacent cells {a:?} and {b:?}");
        };
        self[a].set_wall(dir, false);
        self[b].set_wall(dir.opposite(), false);
    }

    /// Resets path data of one cell. Walls and start/end flags are untouched.
    pub fn reset_path_data(&mut self, coord: Coord) {
        self[coord].reset_path_data();
    }

    pub(crate) fn reset_all_path_data(&mut self) {
        self.data.iter_mut().for_each(Cell::reset_path_data);
    }

    /// Restores every wall and clears all generation and path state.
    pub(crate) fn reset(&mut self) {
        self.data.iter_mut().for_each(Cell::reset);
    }

    /// Number of passages, counting each removed wall once.
    pub fn removed_wall_count(&self) -> usize {
        self.data
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&dir| !cell.has_wall(dir))
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
