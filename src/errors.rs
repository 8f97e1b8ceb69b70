/*!
Error types for the assembly core.
Outer layers (FASTA handling, the binary) use boxed errors, and everything here converts into those via `?`.
*/

use thiserror::Error;

/// Failures that can occur while encoding, aligning, or assembling fragments
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    /// A character outside of {a, c, g, t} was found while encoding
    #[error("Invalid nucleotide symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    /// Out-of-bounds access into a sequence or collection
    #[error("Index {index} is out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// Too few fragments to build a path or merge anything
    #[error("At least 2 fragments are required, found {count}")]
    DegenerateInput { count: usize },
    /// A layout path that visits the same fragment more than once
    #[error("Fragment {fragment} appears more than once in the layout path")]
    DuplicateFragment { fragment: usize },
    /// An overlap matrix that is not square with the expected dimension
    #[error("Overlap graph must be {expected}x{expected}, found {found} entries")]
    MalformedGraph { expected: usize, found: usize }
}

/// Shorthand for results from the assembly core
pub type Result<T> = std::result::Result<T, AssemblyError>;
