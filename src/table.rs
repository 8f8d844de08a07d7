//! Summed-area tables over a square grid of fuel cells.

use error::GridError;
use ndarray::Array2;
use power::power;

/// The largest grid dimension a table will accept. A table this size holds
/// about 16.8 million sums, and searching every size of square in it already
/// takes on the order of 10^10 queries.
pub const MAX_DIMENSION: usize = 4096;

/// Northwest sums: the element at `(y, x)` holds the sum of all powers in the
/// rectangle with corners at `(1, 1)` and `(x, y)`, that is, all the powers to
/// the northwest of that cell.
///
/// Grid coordinates are 1-based, but ndarray's are not, so the array has an
/// extra top row and left column of zeros. That lets a square query subtract
/// the row or column just outside the square without special cases.
#[derive(Clone, Debug)]
pub struct SummedAreaTable {
    dimension: usize,
    sums: Array2<i64>,
}

impl SummedAreaTable {
    /// Build the table for a `dimension` x `dimension` grid of fuel cells with
    /// the given serial number.
    pub fn new(serial: i64, dimension: usize) -> Result<SummedAreaTable, GridError> {
        debug!(serial, dimension, "building summed-area table");
        SummedAreaTable::from_fn(dimension, |x, y| i64::from(power(x as i64, y as i64, serial)))
    }

    /// Build the table for a `dimension` x `dimension` grid whose cell at
    /// `(x, y)` holds `cell(x, y)`. Both coordinates run from 1 to `dimension`,
    /// which must be in `1..=MAX_DIMENSION`.
    pub fn from_fn<F>(dimension: usize, mut cell: F) -> Result<SummedAreaTable, GridError>
    where F: FnMut(usize, usize) -> i64
    {
        if dimension == 0 {
            return Err(GridError::ZeroDimension);
        }
        if dimension > MAX_DIMENSION {
            return Err(GridError::DimensionTooLarge {
                dimension,
                limit: MAX_DIMENSION,
            });
        }

        let mut sums = Array2::<i64>::zeros((dimension + 1, dimension + 1));
        for y in 1..=dimension {
            let mut row_sum = 0;
            for x in 1..=dimension {
                row_sum += cell(x, y);
                // Equivalent to cell + [y-1][x] + [y][x-1] - [y-1][x-1]: the
                // row above already covers the rectangle above this row.
                sums[(y, x)] = row_sum + sums[(y - 1, x)];
            }
        }

        Ok(SummedAreaTable { dimension, sums })
    }

    /// The width and height of the grid, in cells.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Return the sum of all cells `(x', y')` with `x' <= x` and `y' <= y`.
    /// Either coordinate may be zero, in which case the sum is empty.
    ///
    /// Panics if `x` or `y` exceeds the grid's dimension.
    pub fn cumulative(&self, x: usize, y: usize) -> i64 {
        self.sums[(y, x)]
    }

    /// Recover the value of the single cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<i64, GridError> {
        self.square(x, y, 1)
    }

    /// Return the total power of the `size` x `size` square whose top-left
    /// corner is `(x, y)`.
    ///
    /// The square must lie entirely within the grid: `size` must be in
    /// `1..=dimension`, and `x` and `y` in `1..=dimension - size + 1`.
    pub fn square(&self, x: usize, y: usize, size: usize) -> Result<i64, GridError> {
        self.check_size(size)?;
        let last = self.dimension - size + 1;
        if x < 1 || x > last || y < 1 || y > last {
            return Err(GridError::CornerOutOfRange {
                x,
                y,
                size,
                dimension: self.dimension,
            });
        }
        Ok(self.square_unchecked(x, y, size))
    }

    /// Return an error unless `size` is a possible square size for this grid.
    pub(crate) fn check_size(&self, size: usize) -> Result<(), GridError> {
        if size < 1 || size > self.dimension {
            return Err(GridError::SizeOutOfRange {
                size,
                dimension: self.dimension,
            });
        }
        Ok(())
    }

    /// Like `square`, for callers that have already validated the square.
    /// ndarray still bounds-checks the indexing, so a bad square panics
    /// rather than reading out of bounds.
    pub(crate) fn square_unchecked(&self, x: usize, y: usize, size: usize) -> i64 {
        // Step back one cell so the subtracted areas stop just short of the
        // square's top row and left column.
        let (x, y) = (x - 1, y - 1);
        let s = &self.sums;
        s[(y + size, x + size)] - s[(y + size, x)] - s[(y, x + size)] + s[(y, x)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn brute_force(serial: i64, x: usize, y: usize, size: usize) -> i64 {
        let mut total = 0;
        for cy in y..y + size {
            for cx in x..x + size {
                total += i64::from(power(cx as i64, cy as i64, serial));
            }
        }
        total
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(SummedAreaTable::new(18, 0).unwrap_err(), GridError::ZeroDimension);
        assert_eq!(SummedAreaTable::from_fn(0, |_, _| 1).unwrap_err(),
                   GridError::ZeroDimension);
    }

    #[test]
    fn test_dimension_too_large() {
        let too_large = GridError::DimensionTooLarge { dimension: MAX_DIMENSION + 1, limit: MAX_DIMENSION };
        assert_eq!(SummedAreaTable::new(1, MAX_DIMENSION + 1).unwrap_err(), too_large);
        assert_eq!(SummedAreaTable::new(1, usize::max_value()).unwrap_err(),
                   GridError::DimensionTooLarge { dimension: usize::max_value(), limit: MAX_DIMENSION });
        assert_eq!(SummedAreaTable::new(1, 1_000_000).unwrap_err(),
                   GridError::DimensionTooLarge { dimension: 1_000_000, limit: MAX_DIMENSION });

        // The cell function is never consulted for a rejected grid.
        let mut calls = 0;
        assert!(SummedAreaTable::from_fn(usize::max_value(), |_, _| { calls += 1; 0 }).is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_padding() {
        let table = SummedAreaTable::new(7689, 50).unwrap();
        for i in 0..=50 {
            assert_eq!(table.cumulative(i, 0), 0);
            assert_eq!(table.cumulative(0, i), 0);
        }
    }

    #[test]
    fn test_inclusion_exclusion() {
        for &(serial, dimension) in &[(18, 300), (42, 60), (-3, 17), (7689, 1)] {
            let table = SummedAreaTable::new(serial, dimension).unwrap();
            for y in 1..=dimension {
                for x in 1..=dimension {
                    let t = |x, y| table.cumulative(x, y);
                    assert_eq!(t(x, y) - t(x, y - 1) - t(x - 1, y) + t(x - 1, y - 1),
                               i64::from(power(x as i64, y as i64, serial)),
                               "serial {} cell ({},{})", serial, x, y);
                }
            }
        }
    }

    #[test]
    fn test_small_grid() {
        // 1 2 3
        // 4 5 6
        // 7 8 9
        let table = SummedAreaTable::from_fn(3, |x, y| (3 * (y - 1) + x) as i64).unwrap();
        assert_eq!(table.dimension(), 3);
        assert_eq!(table.cumulative(3, 3), 45);
        assert_eq!(table.cumulative(2, 1), 3);
        assert_eq!(table.cumulative(1, 2), 5);
        assert_eq!(table.cell(2, 3), Ok(8));
        assert_eq!(table.square(2, 2, 2), Ok(5 + 6 + 8 + 9));
        assert_eq!(table.square(1, 1, 3), Ok(45));
        assert_eq!(table.square(3, 1, 1), Ok(3));
    }

    #[test]
    fn test_square_3x3() {
        let table = SummedAreaTable::new(18, 300).unwrap();
        assert_eq!(table.square(33, 45, 3), Ok(29));
        let table = SummedAreaTable::new(42, 300).unwrap();
        assert_eq!(table.square(21, 61, 3), Ok(30));
    }

    #[test]
    fn test_square_out_of_range() {
        let table = SummedAreaTable::new(18, 10).unwrap();
        assert_eq!(table.square(1, 1, 0),
                   Err(GridError::SizeOutOfRange { size: 0, dimension: 10 }));
        assert_eq!(table.square(1, 1, 11),
                   Err(GridError::SizeOutOfRange { size: 11, dimension: 10 }));
        assert_eq!(table.square(0, 1, 3),
                   Err(GridError::CornerOutOfRange { x: 0, y: 1, size: 3, dimension: 10 }));
        assert_eq!(table.square(1, 0, 3),
                   Err(GridError::CornerOutOfRange { x: 1, y: 0, size: 3, dimension: 10 }));
        assert_eq!(table.square(9, 1, 3),
                   Err(GridError::CornerOutOfRange { x: 9, y: 1, size: 3, dimension: 10 }));
        assert_eq!(table.square(1, 9, 3),
                   Err(GridError::CornerOutOfRange { x: 1, y: 9, size: 3, dimension: 10 }));
        assert_eq!(table.cell(11, 1),
                   Err(GridError::CornerOutOfRange { x: 11, y: 1, size: 1, dimension: 10 }));

        // The far corner itself is fine.
        assert!(table.square(8, 8, 3).is_ok());
        assert!(table.square(1, 1, 10).is_ok());
    }

    #[test]
    fn test_square_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let serial = rng.gen_range(-10_000..10_000);
            let dimension = rng.gen_range(1..=40);
            let table = SummedAreaTable::new(serial, dimension).unwrap();
            for _ in 0..20 {
                let size = rng.gen_range(1..=dimension);
                let last = dimension - size + 1;
                let x = rng.gen_range(1..=last);
                let y = rng.gen_range(1..=last);
                assert_eq!(table.square(x, y, size), Ok(brute_force(serial, x, y, size)),
                           "serial {} dimension {}: {}x{} square at ({},{})",
                           serial, dimension, size, size, x, y);
            }
        }
    }
}
