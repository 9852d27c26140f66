use std::{fmt, io::Write, sync::mpsc::Receiver, time::Duration};

use crossterm::{
    cursor, queue, style,
    terminal::{self, ClearType},
};

use crate::maze::{Cell, GridEvent, Maze};

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes the maze as bare glyphs, one line per row.
pub fn render_plain<W: Write>(maze: &Maze, out: &mut W) -> std::io::Result<()> {
    write!(out, "{}", maze)?;
    out.flush()
}

/// Same layout as [`render_plain`], with colored glyphs.
pub fn render_styled<W: Write>(maze: &Maze, out: &mut W) -> std::io::Result<()> {
    for row in maze.rows() {
        for cell in row {
            queue!(out, style::PrintStyledContent(cell.styled()))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}

/// Check if the terminal is large enough to animate a grid of the given dimensions.
/// Fails when stdout is not a terminal.
pub fn fits_terminal(width: u16, height: u16) -> std::io::Result<bool> {
    let (term_width, term_height) = terminal::size()?;
    Ok(term_width >= width.saturating_mul(Cell::CELL_WIDTH) && term_height > height)
}

/// Redraws a grid cell by cell from a stream of [`GridEvent`]s.
pub struct Replayer<W: Write> {
    out: W,
    /// Current grid dimensions (width, height)
    grid_dims: Option<(u16, u16)>,
    /// Time to wait after each cell update
    refresh_time: Duration,
}

impl<W: Write> Replayer<W> {
    pub fn new(out: W, refresh_time: Duration) -> Self {
        Self {
            out,
            grid_dims: None,
            refresh_time,
        }
    }

    /// Render a single grid event to the terminal
    fn render_grid_event(&mut self, event: &GridEvent) -> std::io::Result<()> {
        match *event {
            GridEvent::Reset {
                cell,
                width,
                height,
            } => {
                self.grid_dims = Some((width, height));
                queue!(
                    self.out,
                    terminal::Clear(ClearType::All),
                    cursor::Hide,
                    cursor::MoveTo(0, 0)
                )?;
                for _y in 0..height {
                    for _x in 0..width {
                        queue!(self.out, style::PrintStyledContent(cell.styled()))?;
                    }
                    queue!(self.out, style::Print("\r\n"))?;
                }
                self.out.flush()?;
            }
            GridEvent::Update { coord, new, .. } => match self.grid_dims {
                Some(_) => {
                    queue!(
                        self.out,
                        cursor::MoveTo(coord.0 * Cell::CELL_WIDTH, coord.1),
                        style::PrintStyledContent(new.styled())
                    )?;
                    self.out.flush()?;
                    std::thread::sleep(self.refresh_time);
                }
                // Nothing to draw on before the first reset
                None => {
                    tracing::debug!("[render] Skipping update before reset: {:?}", event);
                }
            },
        }
        Ok(())
    }

    /// Drains the events already queued in `events` and draws them in order.
    /// Returns the number of events drawn.
    pub fn replay(&mut self, events: &Receiver<GridEvent>) -> std::io::Result<usize> {
        let mut count = 0;
        for event in events.try_iter() {
            self.render_grid_event(&event)?;
            count += 1;
        }
        tracing::debug!("[render] Replayed {} grid events", count);
        Ok(count)
    }

    /// Parks the cursor below the grid and shows it again.
    pub fn finish(&mut self) -> std::io::Result<()> {
        let height = self.grid_dims.map_or(0, |(_, height)| height);
        queue!(self.out, cursor::MoveTo(0, height), cursor::Show)?;
        self.out.flush()
    }
}
