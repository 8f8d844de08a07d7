//! Errors for queries that fall outside the grid.

/// A query asked about a square that doesn't lie entirely within the grid, or
/// a grid that can't exist.
#[derive(Clone, Debug, Eq, Fail, PartialEq)]
pub enum GridError {
    #[fail(display = "grid dimension must be at least 1")]
    ZeroDimension,

    #[fail(display = "grid dimension {} is larger than the limit of {}", dimension, limit)]
    DimensionTooLarge { dimension: usize, limit: usize },

    #[fail(display = "square size {} is outside 1..={}", size, dimension)]
    SizeOutOfRange { size: usize, dimension: usize },

    #[fail(display = "{}x{} square at ({},{}) extends outside the {}x{} grid",
           size, size, x, y, dimension, dimension)]
    CornerOutOfRange { x: usize, y: usize, size: usize, dimension: usize },
}

#[test]
fn test_display() {
    assert_eq!(GridError::ZeroDimension.to_string(),
               "grid dimension must be at least 1");
    assert_eq!(GridError::DimensionTooLarge { dimension: 5000, limit: 4096 }.to_string(),
               "grid dimension 5000 is larger than the limit of 4096");
    assert_eq!(GridError::SizeOutOfRange { size: 0, dimension: 300 }.to_string(),
               "square size 0 is outside 1..=300");
    assert_eq!(GridError::CornerOutOfRange { x: 299, y: 1, size: 3, dimension: 300 }.to_string(),
               "3x3 square at (299,1) extends outside the 300x300 grid");
}
