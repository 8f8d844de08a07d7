//! Searching a summed-area table for the most powerful square.

use error::GridError;
use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;
use table::SummedAreaTable;
use IteratorExt;

/// A square of fuel cells: its top-left corner, its size, and its total power.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Square {
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub power: i64,
}

impl Square {
    /// The square's top-left corner, as `(x, y)`.
    pub fn corner(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

/// Formats as `X,Y,SIZE`, the way the puzzle wants its answers.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.size)
    }
}

/// Find the `size` x `size` square in `table` with the greatest total power.
///
/// Top-left corners are visited in row-major order, and among squares with
/// equal power the first visited wins.
pub fn best_square_of_size(table: &SummedAreaTable, size: usize) -> Result<Square, GridError> {
    table.check_size(size)?;
    let last = table.dimension() - size + 1;

    let best = (1..=last)
        .cartesian_product(1..=last)
        .map(|(y, x)| Square { x, y, size, power: table.square_unchecked(x, y, size) })
        .first_max_by_key(|square| square.power);

    // A valid size always leaves at least the (1, 1) position.
    best.ok_or(GridError::SizeOutOfRange { size, dimension: table.dimension() })
}

fn size_winner(table: &SummedAreaTable, size: usize) -> Square {
    let best = best_square_of_size(table, size)
        .expect("sizes from 1 to the dimension are always valid");
    debug!(size, x = best.x, y = best.y, power = best.power, "best square of size");
    best
}

/// Find the square of any size in `table` with the greatest total power.
///
/// If squares of different sizes tie, the smallest size wins.
pub fn best_square_any_size(table: &SummedAreaTable) -> Square {
    let best = (1..=table.dimension())
        .map(|size| size_winner(table, size))
        .first_max_by_key(|square| square.power)
        .expect("tables are never empty");
    info!(%best, power = best.power, "best square of any size");
    best
}

/// Like `best_square_any_size`, but search each size on rayon's thread pool.
///
/// The per-size winners are collected in order of size before choosing among
/// them, so the result is the same as the sequential search's.
pub fn par_best_square_any_size(table: &SummedAreaTable) -> Square {
    let per_size: Vec<Square> = (1..table.dimension() + 1)
        .into_par_iter()
        .map(|size| size_winner(table, size))
        .collect();
    let best = per_size
        .into_iter()
        .first_max_by_key(|square| square.power)
        .expect("tables are never empty");
    info!(%best, power = best.power, "best square of any size");
    best
}
