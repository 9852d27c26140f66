use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single grid position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Passage,
    /// The fixed entry of the maze at (1, 1).
    Start,
    /// The fixed exit of the maze at (width - 2, height - 2).
    Goal,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 1;

    /// Anything a walker could stand on.
    pub fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '█',
            Cell::Passage => ' ',
            Cell::Start => 'S',
            Cell::Goal => 'G',
        }
    }

    pub fn styled(self) -> StyledContent<char> {
        let glyph = self.glyph();
        match self {
            Cell::Wall => glyph.with(Color::White),
            Cell::Passage => glyph.with(Color::Reset),
            Cell::Start => glyph.with(Color::Green).bold(),
            Cell::Goal => glyph.with(Color::Red).bold(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.glyph();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthChar;
            assert_eq!(
                glyph.width(),
                Some(Cell::CELL_WIDTH as usize),
                "Each cell must occupy exactly one character width."
            );
        }

        write!(f, "{}", glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(Cell::Wall.to_string(), "█");
        assert_eq!(Cell::Passage.to_string(), " ");
        assert_eq!(Cell::Start.to_string(), "S");
        assert_eq!(Cell::Goal.to_string(), "G");
    }

    #[test]
    fn test_default_is_wall() {
        assert_eq!(Cell::default(), Cell::Wall);
        assert!(!Cell::Wall.is_open());
        assert!(Cell::Passage.is_open());
        assert!(Cell::Start.is_open());
        assert!(Cell::Goal.is_open());
    }

    #[test]
    fn test_styled_keeps_glyph() {
        for cell in [Cell::Wall, Cell::Passage, Cell::Start, Cell::Goal] {
            assert_eq!(*cell.styled().content(), cell.glyph());
        }
    }
}
