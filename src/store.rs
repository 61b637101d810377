use crate::error::{Error, Result};

/// A bounded set of alive cells over a fixed height by width domain.
///
/// Implementations differ only in physical layout and cost model; the set
/// contents and the declared dimensions are the whole observable state. The
/// backend is picked at construction through a type parameter, never by
/// inspecting a value at runtime.
pub trait CellStore {
    /// Make a new store with every cell dead.
    ///
    /// Panics if either dimension is zero.
    fn new(height: usize, width: usize) -> Self
    where
        Self: Sized;

    /// Whether the cell at `(row, col)` is alive. Never mutates.
    fn read(&self, row: usize, col: usize) -> Result<bool>;

    /// Set the aliveness of the cell at `(row, col)`.
    ///
    /// Idempotent: writing a value the cell already holds changes nothing.
    /// On error the store is untouched.
    fn write(&mut self, row: usize, col: usize, alive: bool) -> Result<()>;

    /// The fixed number of rows.
    fn height(&self) -> usize;

    /// The fixed number of columns.
    fn width(&self) -> usize;

    /// A model of this representation's memory consumption in bytes.
    ///
    /// Tracks stored contents, not allocated capacity. Used for comparative
    /// reporting only, never for correctness.
    fn estimated_byte_size(&self) -> usize;

    /// Every alive coordinate as `(row, col)` pairs, in no particular order.
    fn alive_cells(&self) -> Vec<(usize, usize)>;

    /// Reject coordinates outside the declared dimensions.
    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height() || col >= self.width() {
            Err(Error::OutOfRange {
                row,
                col,
                height: self.height(),
                width: self.width(),
            })
        } else {
            Ok(())
        }
    }
}
