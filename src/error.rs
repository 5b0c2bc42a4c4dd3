use thiserror::Error;

/// Unified error type for the cubie, facelet, coordinate and search layers.
///
/// The `verify()` family of variants mirrors the five negative tags a legal
/// cubie state must never produce; [`Error::code`] maps them (plus search
/// exhaustion and timeout) back onto the `Error N` tokens written by the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("facelet string is not 54 characters over the URFDLB alphabet with six single-color centers")]
    InvalidFaceletString,

    #[error("facelet string does not correspond to a legal cubie permutation")]
    InvalidFaceletValue,

    #[error("edge permutation is not a bijection on the twelve edge slots")]
    MissingEdge,

    #[error("total edge flip is not a multiple of two")]
    EdgeFlipParity,

    #[error("corner permutation is not a bijection on the eight corner slots")]
    MissingCorner,

    #[error("total corner twist is not a multiple of three")]
    CornerTwistParity,

    #[error("corner permutation parity does not match edge permutation parity")]
    PermutationParity,

    #[error("no solution found within the given move limit")]
    MaxDepthExceeded,

    #[error("search exceeded its time budget")]
    Timeout,

    #[error("'{0}' is not a move in the U R F D L B / 2 / ' alphabet")]
    InvalidScramble(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps an error onto the `Error N` token the CLI writes to the output
    /// file, or `None` for errors that have no token (I/O failures are
    /// reported as a nonzero process exit instead, per the CLI contract).
    pub fn code(&self) -> Option<u32> {
        match self {
            Error::MissingEdge => Some(2),
            Error::EdgeFlipParity => Some(3),
            Error::MissingCorner => Some(4),
            Error::CornerTwistParity => Some(5),
            Error::PermutationParity => Some(6),
            Error::MaxDepthExceeded => Some(7),
            Error::Timeout => Some(8),
            Error::InvalidFaceletString | Error::InvalidFaceletValue | Error::InvalidScramble(_) => None,
            Error::Io(_) => None,
        }
    }
}
