use std::sync::mpsc::Sender;

use super::cell::Cell;

/// A change to the grid, streamed to whoever is animating the generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Every cell was overwritten with `cell`.
    Reset { cell: Cell, width: u16, height: u16 },
    Update {
        coord: (u16, u16),
        old: Cell,
        new: Cell,
    },
}

pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
    sender: Option<Sender<GridEvent>>,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
            sender: None,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn data(&self) -> &[Cell] {
        &self.data
    }

    pub fn set_sender(&mut self, sender: Option<Sender<GridEvent>>) {
        self.sender = sender;
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    fn notify(&self, event: GridEvent) {
        if let Some(sender) = &self.sender {
            // A dropped receiver only means nobody is watching anymore
            let _ = sender.send(event);
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.data.fill(cell);
        self.notify(GridEvent::Reset {
            cell,
            width: self.width,
            height: self.height,
        });
    }

    pub fn set(&mut self, coord: (u16, u16), cell: Cell) {
        let idx = self.ravel_index(coord.0, coord.1);
        let old = self.data[idx];
        if old != cell {
            self.data[idx] = cell;
            self.notify(GridEvent::Update {
                coord,
                old,
                new: cell,
            });
        }
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_emits_update_only_on_change() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut grid = Grid::new(4, 3, Cell::Wall);
        grid.set_sender(Some(tx));

        grid.set((2, 1), Cell::Passage);
        grid.set((2, 1), Cell::Passage);

        assert_eq!(grid[(2, 1)], Cell::Passage);
        let events = rx.try_iter().collect::<Vec<_>>();
        assert_eq!(
            events,
            vec![GridEvent::Update {
                coord: (2, 1),
                old: Cell::Wall,
                new: Cell::Passage,
            }]
        );
    }

    #[test]
    fn test_fill_emits_reset() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut grid = Grid::new(3, 3, Cell::Passage);
        grid.set_sender(Some(tx));
        grid.fill(Cell::Wall);

        assert!(grid.data().iter().all(|&c| c == Cell::Wall));
        assert_eq!(
            rx.try_recv().ok(),
            Some(GridEvent::Reset {
                cell: Cell::Wall,
                width: 3,
                height: 3,
            })
        );
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        let mut grid = Grid::new(3, 3, Cell::Wall);
        grid.set_sender(Some(tx));
        grid.set((1, 1), Cell::Start);
        assert_eq!(grid[(1, 1)], Cell::Start);
    }
}
