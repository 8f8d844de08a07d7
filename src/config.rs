//! Command-line configuration.

use failure::Error;
use std::str::FromStr;
use table::MAX_DIMENSION;

/// The grid size the puzzle uses.
pub const DEFAULT_DIMENSION: usize = 300;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub serial: i64,
    pub dimension: usize,
}

impl Config {
    /// Parse `SERIAL [DIMENSION]` from `args`, which should not include the
    /// program name.
    pub fn from_args<I>(args: I) -> Result<Config, Error>
    where I: IntoIterator<Item = String>
    {
        let mut args = args.into_iter();

        let serial = args
            .next()
            .ok_or_else(|| format_err!("usage: fuel-grid SERIAL [DIMENSION]"))?;
        let serial = i64::from_str(serial.trim())
            .map_err(|e| format_err!("bad serial number {:?}: {}", serial, e))?;

        let dimension = match args.next() {
            None => DEFAULT_DIMENSION,
            Some(d) => usize::from_str(d.trim())
                .map_err(|e| format_err!("bad grid dimension {:?}: {}", d, e))?,
        };
        if dimension == 0 {
            return Err(format_err!("grid dimension must be at least 1"));
        }
        if dimension > MAX_DIMENSION {
            return Err(format_err!("grid dimension {} is larger than the limit of {}",
                                   dimension, MAX_DIMENSION));
        }

        if let Some(extra) = args.next() {
            return Err(format_err!("unexpected argument: {:?}", extra));
        }

        Ok(Config { serial, dimension })
    }
}
