use crate::error::Result;
use crate::store::CellStore;

/// Fully materialized backend: one `bool` per cell of the whole domain.
///
/// Reads and writes are O(1). Space is proportional to the domain regardless
/// of how many cells are alive, which makes it the baseline the sparse
/// representations are measured against.
#[derive(Clone, Debug)]
pub struct DenseStore {
    cells: Vec<bool>,
    height: usize,
    width: usize,
}

impl DenseStore {
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl CellStore for DenseStore {
    fn new(height: usize, width: usize) -> Self {
        assert!(
            height >= 1 && width >= 1,
            "grid is empty, which isnt allowed"
        );
        DenseStore {
            cells: vec![false; height * width],
            height,
            width,
        }
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    #[inline]
    fn write(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.check_bounds(row, col)?;
        let ix = self.index(row, col);
        self.cells[ix] = alive;
        Ok(())
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    /// Two bytes per cell of the domain, alive or not.
    fn estimated_byte_size(&self) -> usize {
        self.height * self.width * 2
    }

    fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(ix, _)| (ix / self.width, ix % self.width))
            .collect()
    }
}
