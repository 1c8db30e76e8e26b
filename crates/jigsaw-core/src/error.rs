//! Engine errors.
//!
//! Every error is local to one generation attempt. The recovery in all cases
//! is to discard the attempt's state and retry from region generation with
//! fresh randomness; nothing here is fatal to the process.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Region growth ran out of restart budget without producing a valid
    /// irregular partition.
    GenerationExhausted,
    /// Construction-mode search exhausted every branch from the given grid.
    NoSolutionFound,
    /// Requested difficulty level outside the configured 1..=6 mapping.
    InvalidDifficulty(u8),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::GenerationExhausted => {
                write!(f, "no valid region partition found within the attempt budget")
            }
            Error::NoSolutionFound => {
                write!(f, "backtracking search found no solution from this grid")
            }
            Error::InvalidDifficulty(level) => {
                write!(f, "difficulty level {} is outside the supported range 1-6", level)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_level() {
        let message = Error::InvalidDifficulty(9).to_string();
        assert!(message.contains('9'));
    }
}
