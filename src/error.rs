use thiserror::Error;

/// Result type of all fallible lifegrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by cell stores and the stepping algorithm.
///
/// All errors are synchronous and surface to the immediate caller; none are
/// transient. A failed read or write leaves the store untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A coordinate argument fell outside the declared grid dimensions.
    /// Every representation rejects these identically.
    #[error("coordinate ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// A generation step was asked to produce a grid of different dimensions
    /// than the board it reads from.
    #[error(
        "dimension mismatch: previous grid is {prev_height}x{prev_width}, target is {height}x{width}"
    )]
    DimensionMismatch {
        prev_height: usize,
        prev_width: usize,
        height: usize,
        width: usize,
    },

    /// A seed line was not two whitespace-separated integers.
    #[error("malformed seed line {line_number}")]
    MalformedSeed { line_number: usize },
}
