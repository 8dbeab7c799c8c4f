//! # twophase
//! `twophase`: crate for manipulating and solving the 3x3 Rubik's cube with
//! [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).
//!
//! The cube is taken from a 54 character facelet string to the cubie level,
//! projected onto small integer coordinates, and solved by two consecutive
//! IDA* searches over precomputed move and pruning tables.

#[macro_use]
extern crate lazy_static;

/// Module containing functions for scrambling the cube.
pub mod scramble;

/// Error define.
pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;

/// Module for represent a cube on the coordinate level.
pub mod coord;

/// Module for represent a cube on the cubie level.
pub mod cubie;

/// Module for represent a cube on the facelet level.
pub mod facelet;

/// Module for represent move and create move tables.
pub mod moves;

/// Module for create pruning tables. The pruning tables cut the search tree during the search.
pub mod pruning;

/// Module for the table lifecycle: build once, cache on disk, share read-only.
pub mod tables;

/// Module for Solver.
pub mod solver;

use bincode::{
    config::{self, Configuration},
    decode_from_slice, encode_to_vec,
    error::DecodeError,
    Decode, Encode,
};

use crate::error::Error;

const CONFIG: Configuration = config::standard();

fn encode_table<T: Encode>(table: &T) -> Result<Vec<u8>, Error> {
    Ok(encode_to_vec(table, CONFIG)?)
}

fn decode_table<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let (decoded, written) = decode_from_slice(bytes, CONFIG)?;
    let additional = bytes.len() - written;

    if additional != 0 {
        return Err(DecodeError::UnexpectedEnd { additional })?;
    }
    Ok(decoded)
}
