use crate::error::Result;
use crate::store::CellStore;

/// Sparse backend: an unordered growable list of alive `(row, col)` pairs.
///
/// Membership is a linear scan over the alive count k, so reads and writes
/// are O(k). Space is proportional to the population, not the domain. Pairs
/// are unique by construction since writes de-duplicate.
#[derive(Clone, Debug)]
pub struct SparseListStore {
    alive: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl CellStore for SparseListStore {
    fn new(height: usize, width: usize) -> Self {
        assert!(
            height >= 1 && width >= 1,
            "grid is empty, which isnt allowed"
        );
        SparseListStore {
            alive: Vec::new(),
            height,
            width,
        }
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.alive.contains(&(row, col)))
    }

    fn write(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.check_bounds(row, col)?;
        let found = self.alive.iter().position(|&cell| cell == (row, col));
        match (alive, found) {
            (true, None) => self.alive.push((row, col)),
            (false, Some(ix)) => {
                // The list is unordered, so the last entry can fill the hole.
                self.alive.swap_remove(ix);
            }
            _ => {}
        }
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

    /// Two 4-byte components per stored pair.
    fn estimated_byte_size(&self) -> usize {
        self.alive.len() * 2 * 4
    }

    fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.alive.clone()
    }
}
