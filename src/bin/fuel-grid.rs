extern crate failure;
extern crate fuel_grid;
extern crate tracing_subscriber;

use failure::Error;
use fuel_grid::config::Config;
use fuel_grid::{best_square_of_size, par_best_square_any_size, SummedAreaTable};
use tracing_subscriber::EnvFilter;

/// Return the lines reporting the best 3x3 square and the best square of any
/// size in `table`.
fn report(table: &SummedAreaTable) -> Result<Vec<String>, Error> {
    let dimension = table.dimension();
    let mut lines = Vec::new();

    if dimension >= 3 {
        let best = best_square_of_size(table, 3)?;
        let (x, y) = best.corner();
        lines.push(format!("3x3 square with the largest total power: {},{} (power {})",
                           x, y, best.power));
    } else {
        lines.push(format!("no 3x3 square fits in a {}x{} grid", dimension, dimension));
    }

    let best = par_best_square_any_size(table);
    lines.push(format!("square of any size with the largest total power: {} (power {})",
                       best, best.power));

    Ok(lines)
}

#[test]
fn test_report() {
    let table = SummedAreaTable::new(18, 300).unwrap();
    assert_eq!(report(&table).unwrap(),
               vec!["3x3 square with the largest total power: 33,45 (power 29)",
                    "square of any size with the largest total power: 90,269,16 (power 113)"]);

    // 4 0
    // 0 0
    let table = SummedAreaTable::from_fn(2, |x, y| if (x, y) == (1, 1) { 4 } else { 0 }).unwrap();
    assert_eq!(report(&table).unwrap(),
               vec!["no 3x3 square fits in a 2x2 grid",
                    "square of any size with the largest total power: 1,1,1 (power 4)"]);
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(std::env::args().skip(1))?;
    let table = SummedAreaTable::new(config.serial, config.dimension)?;

    for line in report(&table)? {
        println!("{}", line);
    }

    Ok(())
}
