use log::debug;

use crate::error::{Error, Result};
use crate::step::evolve;
use crate::store::CellStore;

/// Owns one cell store and drives it through successive generations.
///
/// The board's identity persists across steps; its store does not. Each step
/// replaces the store wholesale with a freshly populated one, so at most one
/// generation's worth of discarded storage exists at a time.
#[derive(Clone, Debug)]
pub struct Board<S> {
    cells: S,
    generation: u64,
}

impl<S: CellStore> Board<S> {
    /// Make a board with every cell dead.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            cells: S::new(height, width),
            generation: 0,
        }
    }

    /// Mark a sequence of `(x, y)` seed pairs alive.
    ///
    /// Seed files are column-first: a pair `x y` marks `(row = y, col = x)`.
    /// Order is irrelevant; the final state is the set union of the pairs.
    pub fn seed<I>(&mut self, coords: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (x, y) in coords {
            self.cells.write(y, x, true)?;
        }
        debug!(
            "seeded board: {} alive cells, {} bytes estimated",
            self.cells.alive_cells().len(),
            self.cells.estimated_byte_size()
        );
        Ok(())
    }

    /// Parse seed text and mark its coordinates alive.
    ///
    /// One pair of whitespace-separated integers per line, blank lines
    /// skipped. The whole text is validated before the store is touched, so
    /// a malformed line never leaves a partial seed behind.
    pub fn seed_from_text(&mut self, text: &str) -> Result<()> {
        let coords = parse_seed(text)?;
        self.seed(coords)
    }

    /// Replace the store with the next generation's.
    pub fn step(&mut self) -> Result<()> {
        self.cells = evolve(&self.cells, self.cells.height(), self.cells.width())?;
        self.generation += 1;
        Ok(())
    }

    /// Render the interior of the grid for diagnostics, one line per row.
    ///
    /// Each line carries a `[NNN]` row label padded to three digits, then
    /// one character per interior column: `*` alive, space dead.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for row in 1..self.height() - 1 {
            out.push_str(&format!("[{:03}] ", row));
            for col in 1..self.width() - 1 {
                out.push(if self.cells.read(row, col)? { '*' } else { ' ' });
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// How many generations this board has advanced.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The store's estimated memory footprint in bytes.
    #[inline]
    pub fn footprint(&self) -> usize {
        self.cells.estimated_byte_size()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.height()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// The backing store, for renderers that enumerate alive cells.
    #[inline]
    pub fn store(&self) -> &S {
        &self.cells
    }
}

/// Parse the external seed format: one `x y` pair per line.
fn parse_seed(text: &str) -> Result<Vec<(usize, usize)>> {
    let mut coords = Vec::new();
    for (ix, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let x = fields.next().and_then(|f| f.parse().ok());
        let y = fields.next().and_then(|f| f.parse().ok());
        match (x, y, fields.next()) {
            (Some(x), Some(y), None) => coords.push((x, y)),
            _ => return Err(Error::MalformedSeed { line_number: ix + 1 }),
        }
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseStore;

    #[test]
    fn seed_swaps_axes() {
        let mut board = Board::<DenseStore>::new(8, 8);
        board.seed(vec![(5, 2)]).unwrap();
        assert_eq!(board.store().read(2, 5), Ok(true));
        assert_eq!(board.store().read(5, 2), Ok(false));
    }

    #[test]
    fn seed_text_matches_coordinate_list() {
        let mut from_text = Board::<DenseStore>::new(8, 8);
        from_text.seed_from_text("2 2\n2 3\n\n3 2\n3 3\n").unwrap();
        let mut from_list = Board::<DenseStore>::new(8, 8);
        from_list
            .seed(vec![(2, 2), (2, 3), (3, 2), (3, 3)])
            .unwrap();
        let mut a = from_text.store().alive_cells();
        let mut b = from_list.store().alive_cells();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_seed_line_is_reported() {
        let mut board = Board::<DenseStore>::new(8, 8);
        assert_eq!(
            board.seed_from_text("2 2\ntwo 3\n"),
            Err(Error::MalformedSeed { line_number: 2 })
        );
        assert_eq!(
            board.seed_from_text("1 2 3\n"),
            Err(Error::MalformedSeed { line_number: 1 })
        );
        // Validation happens up front; nothing from a bad text is seeded.
        assert!(board.store().alive_cells().is_empty());
    }

    #[test]
    fn render_labels_interior_rows() {
        let mut board = Board::<DenseStore>::new(5, 5);
        board.seed(vec![(2, 2)]).unwrap();
        assert_eq!(board.render().unwrap(), "[001]    \n[002]  * \n[003]    \n");
    }

    #[test]
    fn step_counts_generations() {
        let mut board = Board::<DenseStore>::new(8, 8);
        assert_eq!(board.generation(), 0);
        board.step().unwrap();
        board.step().unwrap();
        assert_eq!(board.generation(), 2);
    }
}
