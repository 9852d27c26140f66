pub mod cell;
pub mod grid;

use std::sync::mpsc::Sender;

pub use cell::Cell;
pub use grid::GridEvent;
use grid::Grid;

pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a new maze with the given width and height, filled with walls.
    pub fn new(width: u16, height: u16) -> Self {
        Maze {
            grid: Grid::new(width, height, Cell::Wall),
        }
    }

    /// Returns the height of the maze in cells, border included.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells, border included.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.grid.data()
    }

    /// Iterates over the rows of the maze, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on 0, an empty grid has no rows anyway
        self.cells().chunks(self.width().max(1) as usize)
    }

    pub fn cell_state(&self, coord: (u16, u16)) -> Cell {
        self[coord]
    }

    /// Streams every subsequent cell change to `sender`, or stops streaming on `None`.
    pub fn set_event_sender(&mut self, sender: Option<Sender<GridEvent>>) {
        self.grid.set_sender(sender);
    }

    pub fn set(&mut self, coord: (u16, u16), cell: Cell) {
        self.grid.set(coord, cell);
    }

    /// Overwrites every cell, border included.
    pub fn fill(&mut self, cell: Cell) {
        self.grid.fill(cell);
    }

    /// Checks if the coordinate lies strictly inside the border ring.
    pub fn is_interior(&self, coord: (u16, u16)) -> bool {
        let (x, y) = coord;
        x > 0
            && y > 0
            && x < self.width().saturating_sub(1)
            && y < self.height().saturating_sub(1)
    }

    /// Interior orthogonal neighbors of a cell, in the order up, down, left, right.
    pub fn neighbors(&self, coord: (u16, u16)) -> impl Iterator<Item = (u16, u16)> + '_ {
        let (x, y) = coord;
        [
            // NOTE: wrapping 0 - 1 to u16::MAX and saturating at u16::MAX both land
            // outside any interior, so the filter below drops them.
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
        ]
        .into_iter()
        .filter(move |&c| self.is_interior(c))
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5);
        maze.set((2, 3), Cell::Start);
        assert_eq!(maze[(2, 3)], Cell::Start);
        assert_eq!(maze.cell_state((3, 2)), Cell::Wall);
    }

    #[test]
    fn test_new_is_all_walls() {
        let maze = Maze::new(20, 10);
        assert_eq!(maze.cells().len(), 200);
        assert!(maze.cells().iter().all(|&c| c == Cell::Wall));
        assert_eq!(maze.rows().count(), 10);
        assert!(maze.rows().all(|row| row.len() == 20));
    }

    #[test]
    fn test_is_interior() {
        let maze = Maze::new(5, 4);
        assert!(maze.is_interior((1, 1)));
        assert!(maze.is_interior((3, 2)));
        assert!(!maze.is_interior((0, 1)));
        assert!(!maze.is_interior((4, 1)));
        assert!(!maze.is_interior((1, 0)));
        assert!(!maze.is_interior((1, 3)));
        assert!(!maze.is_interior((u16::MAX, 1)));
    }

    #[test]
    fn test_is_interior_degenerate() {
        let maze = Maze::new(0, 0);
        assert!(!maze.is_interior((0, 0)));
        assert_eq!(maze.rows().count(), 0);
    }

    #[test]
    fn test_neighbors() {
        let maze = Maze::new(7, 7);
        let neighbors = maze.neighbors((3, 3)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(3, 2), (3, 4), (2, 3), (4, 3)]);

        // Corner of the interior only sees two interior neighbors
        let neighbors = maze.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 2), (2, 1)]);

        // Border cells never underflow
        let neighbors = maze.neighbors((0, 0)).collect::<Vec<_>>();
        assert!(neighbors.is_empty());
    }
}
