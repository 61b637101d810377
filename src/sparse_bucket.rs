use std::collections::HashMap;

use crate::error::Result;
use crate::store::CellStore;

/// Sparse backend: row index mapped to the alive columns of that row.
///
/// Membership only scans the addressed row's bucket. A row key exists iff
/// its bucket is nonempty; killing the last cell of a row removes the row
/// entirely, so emptied rows never linger in the footprint accounting.
#[derive(Clone, Debug)]
pub struct SparseBucketStore {
    rows: HashMap<usize, Vec<usize>>,
    height: usize,
    width: usize,
}

impl CellStore for SparseBucketStore {
    fn new(height: usize, width: usize) -> Self {
        assert!(
            height >= 1 && width >= 1,
            "grid is empty, which isnt allowed"
        );
        SparseBucketStore {
            rows: HashMap::new(),
            height,
            width,
        }
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self
            .rows
            .get(&row)
            .map_or(false, |bucket| bucket.contains(&col)))
    }

    fn write(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.check_bounds(row, col)?;
        if alive {
            let bucket = self.rows.entry(row).or_insert_with(Vec::new);
            if !bucket.contains(&col) {
                bucket.push(col);
            }
        } else if let Some(bucket) = self.rows.get_mut(&row) {
            if let Some(ix) = bucket.iter().position(|&c| c == col) {
                bucket.remove(ix);
                if bucket.is_empty() {
                    self.rows.remove(&row);
                }
            }
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

    /// Four bytes per nonempty row key plus four per stored column.
    fn estimated_byte_size(&self) -> usize {
        let cols: usize = self.rows.values().map(Vec::len).sum();
        self.rows.len() * 4 + cols * 4
    }

    fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| (row, col)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn round_trip() {
        let mut store = SparseBucketStore::new(4, 4);
        store.write(2, 1, true).unwrap();
        assert_eq!(store.read(2, 1), Ok(true));
        assert_eq!(store.read(2, 2), Ok(false));
        store.write(2, 1, false).unwrap();
        assert_eq!(store.read(2, 1), Ok(false));
    }

    #[test]
    fn writes_are_idempotent() {
        let mut store = SparseBucketStore::new(4, 4);
        store.write(1, 2, true).unwrap();
        store.write(1, 2, true).unwrap();
        assert_eq!(store.alive_cells(), vec![(1, 2)]);
        store.write(1, 2, false).unwrap();
        store.write(1, 2, false).unwrap();
        assert!(store.alive_cells().is_empty());
    }

    #[test]
    fn footprint_counts_rows_and_columns() {
        let mut store = SparseBucketStore::new(8, 8);
        store.write(2, 4, true).unwrap();
        store.write(2, 5, true).unwrap();
        store.write(3, 7, true).unwrap();
        // Two nonempty rows, three stored columns.
        assert_eq!(store.estimated_byte_size(), 2 * 4 + 3 * 4);
        store.write(2, 5, false).unwrap();
        assert_eq!(store.estimated_byte_size(), 2 * 4 + 2 * 4);
    }

    #[test]
    fn emptied_rows_leave_no_phantom_buckets() {
        let mut store = SparseBucketStore::new(8, 8);
        store.write(3, 7, true).unwrap();
        assert_eq!(store.estimated_byte_size(), 4 + 4);
        store.write(3, 7, false).unwrap();
        assert_eq!(store.estimated_byte_size(), 0);
        assert_eq!(store.read(3, 7), Ok(false));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut store = SparseBucketStore::new(4, 4);
        let err = Error::OutOfRange {
            row: 9,
            col: 9,
            height: 4,
            width: 4,
        };
        assert_eq!(store.read(9, 9), Err(err));
        assert_eq!(store.write(9, 9, true), Err(err));
        assert_eq!(store.estimated_byte_size(), 0);
    }
}
