//! The power level of a single fuel cell.

/// Return the power level of the fuel cell at `(x, y)` in a grid with the
/// given serial number.
///
/// The rack ID is `x + 10`. Start from the rack ID times `y`, add the serial
/// number, and multiply by the rack ID again. Keep only the hundreds digit of
/// the magnitude of that, and subtract 5. The result is always in `-5 ..= 4`.
///
/// The product is computed in `i128`, which is exact for any grid that fits in
/// memory. Outlandish inputs wrap instead of panicking.
pub fn power(x: i64, y: i64, serial: i64) -> i32 {
    let rack_id = i128::from(x).wrapping_add(10);
    let level = rack_id
        .wrapping_mul(i128::from(y))
        .wrapping_add(i128::from(serial))
        .wrapping_mul(rack_id);
    /*
        level = ((x + 10) * y + serial) * (x + 10)
              = y * (x + 10)^2 + serial * (x + 10)

        For x, y <= 300 that is at most about 2.9e7 plus the serial term, so
        i32 would do for the puzzle itself; i128 leaves room for big grids
        and big serial numbers.
    */
    (level.unsigned_abs() / 100 % 10) as i32 - 5
}

#[test]
fn test_power() {
    assert_eq!(power(3, 5, 8), 4);
    assert_eq!(power(122, 79, 57), -5);
    assert_eq!(power(217, 196, 39), 0);
    assert_eq!(power(101, 153, 71), 4);
}

#[test]
fn test_power_negative_intermediate() {
    // (11 * 1 - 1000) * 11 = -10879: the hundreds digit of 10879 is 8.
    assert_eq!(power(1, 1, -1000), 3);
    // (-9 * 1 + 0) * -9 = 81: no hundreds digit at all.
    assert_eq!(power(-19, 1, 0), -5);
}

#[test]
fn test_power_range() {
    for serial in &[-7689, -1, 0, 18, 42, 7689, i64::max_value(), i64::min_value()] {
        for x in 1..40 {
            for y in 1..40 {
                let p = power(x, y, *serial);
                assert!(-5 <= p && p <= 4, "power({}, {}, {}) = {}", x, y, serial, p);
            }
        }
    }
    // Total, even far outside any sensible grid.
    let p = power(i64::max_value(), i64::min_value(), i64::max_value());
    assert!(-5 <= p && p <= 4);
}
