//! Error type shared by the generator, the instance codec and the CLI.

use thiserror::Error;

/// Everything that can go wrong while building or reading an instance.
///
/// The coverage checker itself is total and never returns one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// A universe of size 0 has no elements to draw from.
    #[error("universe size must be at least 1")]
    EmptyUniverse,

    /// `size * max_sets_factor` does not fit in a `usize`.
    #[error("universe size {size} is too large for the configured set-count range")]
    UniverseTooLarge { size: usize },

    /// A [`Params`](crate::Params) bundle with an empty or inverted range.
    #[error("invalid generator parameters: {0}")]
    InvalidParams(&'static str),

    /// An instance lists an element that its universe does not contain.
    #[error("element {element} outside universe of size {size}")]
    OutOfUniverse { element: usize, size: usize },

    /// Malformed JSON candidate state or instance.
    #[error("failed to parse candidate state: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
