use thiserror::Error;

/// Everything that can go wrong between a facelet string and a solution.
///
/// The `Display` strings of the validation and search variants are the error
/// kinds reported to callers of [`crate::solver::solve_string`] as
/// `Error: <kind>`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid length")]
    InvalidLength,
    #[error("invalid symbol")]
    InvalidSymbol,
    #[error("invalid counts")]
    InvalidCounts,
    #[error("invalid centers")]
    InvalidCenters,
    #[error("invalid cube")]
    InvalidCube,
    #[error("unsolvable")]
    Unsolvable,
    #[error("no solution in budget")]
    NoSolutionInBudget,
    #[error("invalid scramble string")]
    InvalidScramble,
    #[error("table cache version mismatch")]
    CacheVersionMismatch,
    #[error("corrupted table cache")]
    CacheCorrupt,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
}
