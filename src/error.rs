use thiserror::Error;

use crate::maze::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("unknown solving algorithm: {0:?}")]
    UnknownAlgorithm(String),
    #[error("unknown generation algorithm: {0:?}")]
    UnknownGenerator(String),
    #[error("invalid maze dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimensions { rows: u16, cols: u16 },
    #[error("cells {a:?} and {b:?} are not orthogonally adjacent")]
    NotAdjacent { a: Coord, b: Coord },
    #[error("cell {0:?} is out of bounds")]
    OutOfBounds(Coord),
    #[error("maze generation has not completed yet")]
    GenerationIncomplete,
    #[error("a comparison needs 2 to 4 algorithms, got {0}")]
    ComparisonSize(usize),
    #[error("algorithm {0:?} was selected more than once")]
    DuplicateAlgorithm(String),
}

impl From<MazeError> for std::io::Error {
    fn from(err: MazeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
