use std::fmt;

/// Smallest width or height that leaves room for an interior inside the border ring.
pub const MIN_DIMENSION: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is below [`MIN_DIMENSION`].
    InvalidDimension { width: u16, height: u16 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => write!(
                f,
                "invalid maze dimensions {}x{}: width and height must be at least {}",
                width, height, MIN_DIMENSION
            ),
        }
    }
}

impl std::error::Error for MazeError {}
