#[macro_use]
extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate itertools;
extern crate ndarray;
extern crate rayon;
#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate lazy_static;
#[cfg(test)]
extern crate rand;

use std::cmp::Ordering;

pub mod config;
pub mod error;
pub mod power;
pub mod search;
pub mod table;

pub use error::GridError;
pub use power::power;
pub use search::{best_square_any_size, best_square_of_size, par_best_square_any_size, Square};
pub use table::SummedAreaTable;

pub trait IteratorExt: Iterator {
    fn first_max_by_key<B, F>(self, f: F) -> Option<Self::Item>
    where B: Ord,
          F: FnMut(&Self::Item) -> B;
}

impl<I: Iterator> IteratorExt for I {
    /// Return the item of `self` for which `f` returns the greatest value. If
    /// several items tie, return the first of them.
    ///
    /// This differs from `Iterator::max_by_key`, which returns the last.
    fn first_max_by_key<B, F>(mut self, mut f: F) -> Option<Self::Item>
    where B: Ord,
          F: FnMut(&Self::Item) -> B
    {
        let mut best = match self.next() {
            None => return None,
            Some(b) => b
        };
        let mut best_key = f(&best);

        for item in self {
            let key = f(&item);
            if let Ordering::Greater = key.cmp(&best_key) {
                best = item;
                best_key = key;
            }
        }

        Some(best)
    }
}

#[test]
fn test_first_max_by_key() {
    let v = vec![(1, 'a'), (3, 'b'), (2, 'c'), (3, 'd')];
    assert_eq!(v.iter().first_max_by_key(|p| p.0), Some(&(3, 'b')));
    assert_eq!(v.iter().max_by_key(|p| p.0), Some(&(3, 'd')));

    let empty: Vec<i32> = vec![];
    assert_eq!(empty.iter().first_max_by_key(|&&n| n), None);

    assert_eq!(vec![-5, -7, -5].into_iter().enumerate().first_max_by_key(|p| p.1),
               Some((0, -5)));
}
