use std::sync::mpsc::Sender;

use rand::{Rng, rngs::StdRng};

use crate::{
    error::{MIN_DIMENSION, MazeError},
    generators::{Frontier, get_rng},
    maze::{Cell, GridEvent, Maze},
};

/// Every maze grows from, and is entered at, this cell.
pub const START: (u16, u16) = (1, 1);

/// Counters collected during one run of [`MazeGenerator::generate_maze`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Walls turned into passages. The seed cell is not counted.
    pub conversions: usize,
    /// Popped entries that had already been carved through a duplicate.
    pub stale: usize,
    /// Popped walls touching zero or several passages.
    pub rejected: usize,
    /// Total frontier insertions.
    pub pushed: usize,
    /// Whether the goal cell was a passage before being marked as the goal.
    pub goal_carved: bool,
}

/// Randomized Prim's generator over a wall-filled grid.
///
/// The maze is a spanning tree of passages grown from [`START`]. A wall is
/// carved only when it touches exactly one passage, which rules out cycles.
pub struct MazeGenerator<R = StdRng> {
    maze: Maze,
    rng: R,
}

impl MazeGenerator<StdRng> {
    /// Creates a generator backed by a [`StdRng`], seeded from `seed` or from the OS.
    pub fn new(width: u16, height: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        Self::with_rng(width, height, get_rng(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Creates a generator with an all-wall grid. No carving happens until
    /// [`generate_maze`](Self::generate_maze) is called.
    pub fn with_rng(width: u16, height: u16, rng: R) -> Result<Self, MazeError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(MazeGenerator {
            maze: Maze::new(width, height),
            rng,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn cell_state(&self, coord: (u16, u16)) -> Cell {
        self.maze.cell_state(coord)
    }

    pub fn start(&self) -> (u16, u16) {
        START
    }

    pub fn goal(&self) -> (u16, u16) {
        (self.maze.width() - 2, self.maze.height() - 2)
    }

    /// Replaces the random source used by subsequent runs.
    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    pub fn set_event_sender(&mut self, sender: Option<Sender<GridEvent>>) {
        self.maze.set_event_sender(sender);
    }

    /// Regenerates the maze from scratch.
    ///
    /// The grid is reset to walls first, so calling this repeatedly never leaks
    /// state from a previous run. Start and goal are assigned unconditionally at
    /// the end; see [`GenerationStats::goal_carved`].
    pub fn generate_maze(&mut self) -> GenerationStats {
        let mut stats = GenerationStats::default();
        let mut frontier = Frontier::new();

        self.maze.fill(Cell::Wall);
        self.maze.set(START, Cell::Passage);
        stats.pushed += self.add_walls(START, &mut frontier);

        while let Some(wall) = frontier.pop_random(&mut self.rng) {
            // Duplicates may have been carved since they were queued
            if self.maze[wall] != Cell::Wall {
                stats.stale += 1;
                continue;
            }

            if self.can_be_converted_to_path(wall) {
                self.maze.set(wall, Cell::Passage);
                stats.conversions += 1;
                tracing::trace!("[generator] Carved passage at {:?}", wall);
                stats.pushed += self.add_walls(wall, &mut frontier);
            } else {
                // Not re-queued here; only another neighbor's add_walls brings it back
                stats.rejected += 1;
            }
        }

        let goal = self.goal();
        stats.goal_carved = self.maze[goal] == Cell::Passage;
        if !stats.goal_carved {
            tracing::debug!("[generator] Goal {:?} was never carved", goal);
        }
        self.maze.set(START, Cell::Start);
        self.maze.set(goal, Cell::Goal);

        tracing::debug!(
            "[generator] Generated {}x{} maze: {:?}",
            self.maze.width(),
            self.maze.height(),
            stats
        );
        stats
    }

    /// Queues every interior wall next to `coord`. Returns how many were queued.
    fn add_walls(&self, coord: (u16, u16), frontier: &mut Frontier) -> usize {
        let mut added = 0;
        for neighbor in self.maze.neighbors(coord) {
            if self.maze[neighbor] == Cell::Wall {
                frontier.push(neighbor);
                added += 1;
            }
        }
        added
    }

    /// A wall can be carved iff exactly one of its neighbors is a passage.
    fn can_be_converted_to_path(&self, coord: (u16, u16)) -> bool {
        self.maze
            .neighbors(coord)
            .filter(|&c| self.maze[c] == Cell::Passage)
            .count()
            == 1
    }
}
