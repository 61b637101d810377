use enum_iterator::IntoEnumIterator;
use itertools::Itertools;
use log::trace;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::store::CellStore;

/// Advance one generation.
///
/// Reads `previous` and populates a freshly allocated store of the same
/// representation with the next timestep: an alive cell survives with 2 or 3
/// alive neighbors, a dead cell is born with exactly 3. Only the interior
/// `[1, height-2] x [1, width-2]` is evaluated; the outer ring is never
/// examined and stays dead in the result. Every cell's next state derives
/// from `previous` alone, so evaluation order cannot affect the outcome.
pub fn evolve<S: CellStore>(previous: &S, height: usize, width: usize) -> Result<S> {
    if height != previous.height() || width != previous.width() {
        return Err(Error::DimensionMismatch {
            prev_height: previous.height(),
            prev_width: previous.width(),
            height,
            width,
        });
    }

    let mut next = S::new(height, width);
    for (row, col) in (1..height - 1).cartesian_product(1..width - 1) {
        let neighbors = alive_neighbors(previous, row, col)?;
        let alive = if previous.read(row, col)? {
            (2..=3).contains(&neighbors)
        } else {
            neighbors == 3
        };
        // The fresh store starts all-dead, so only births need a write.
        if alive {
            next.write(row, col, true)?;
        }
    }
    trace!(
        "advanced one generation, {} cells alive",
        next.alive_cells().len()
    );
    Ok(next)
}

/// Count the alive cells among the eight neighbors of an interior coordinate.
///
/// The border ring is permanently dead as far as the rule is concerned, so a
/// neighbor on the ring never counts no matter what the store holds there.
fn alive_neighbors<S: CellStore>(store: &S, row: usize, col: usize) -> Result<usize> {
    let mut count = 0;
    for dir in Direction::into_enum_iter() {
        let (r, c) = dir.offset(row, col);
        if r == 0 || r == store.height() - 1 || c == 0 || c == store.width() - 1 {
            continue;
        }
        if store.read(r, c)? {
            count += 1;
        }
    }
    Ok(count)
}
