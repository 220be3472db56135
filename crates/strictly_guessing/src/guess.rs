//! Guess validation.
//!
//! Raw input arrives as text from the render surface. Only input that parses
//! to an integer counts as a guess; everything else is rejected without
//! touching the game.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use tracing::instrument;

/// A validly parsed guess.
///
/// Integers that do not fit in an `i64` are still guesses: they keep their
/// digits and never match a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum Guess {
    /// An integer in `i64` range.
    #[display("{}", _0)]
    Number(i64),

    /// An integer too large in magnitude for `i64`, as entered.
    #[display("{}", _0)]
    Oversized(String),
}

impl Guess {
    /// Parses raw input into a guess.
    ///
    /// Leading and trailing whitespace is ignored. Any integer is accepted,
    /// including values outside the target range (those are simply misses).
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }
        match trimmed.parse::<i64>() {
            Ok(value) => Ok(Guess::Number(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Ok(Guess::Oversized(trimmed.to_string()))
                }
                _ => Err(GuessError::NotANumber(trimmed.to_string())),
            },
        }
    }

    /// Returns the guessed value, or `None` if it does not fit in an `i64`.
    pub fn value(&self) -> Option<i64> {
        match self {
            Guess::Number(value) => Some(*value),
            Guess::Oversized(_) => None,
        }
    }

    /// Returns true if this guess equals the target.
    pub fn matches(&self, target: u8) -> bool {
        self.value() == Some(i64::from(target))
    }
}

/// Why raw input did not count as a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GuessError {
    /// Nothing was entered.
    #[display("No guess entered")]
    Empty,

    /// The input is not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_trimmed_integer() {
        assert_eq!(Guess::parse(" 7\n"), Ok(Guess::Number(7)));
        assert_eq!(Guess::parse("-3"), Ok(Guess::Number(-3)));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(Guess::parse(""), Err(GuessError::Empty));
        assert_eq!(Guess::parse("   "), Err(GuessError::Empty));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            Guess::parse("abc"),
            Err(GuessError::NotANumber("abc".to_string()))
        );
        assert!(matches!(Guess::parse("5abc"), Err(GuessError::NotANumber(_))));
        assert!(matches!(Guess::parse("4.5"), Err(GuessError::NotANumber(_))));
    }

    #[test]
    fn test_overflowing_integer_is_still_a_guess() {
        let huge = "99999999999999999999999";
        let guess = Guess::parse(huge).unwrap();
        assert_eq!(guess, Guess::Oversized(huge.to_string()));
        assert_eq!(guess.value(), None);
        assert_eq!(guess.to_string(), huge);

        let negative = Guess::parse(" -99999999999999999999999 ").unwrap();
        assert_eq!(
            negative,
            Guess::Oversized("-99999999999999999999999".to_string())
        );
    }

    #[test]
    fn test_matches_compares_against_target() {
        assert!(Guess::Number(7).matches(7));
        assert!(!Guess::Number(-7).matches(7));
        assert!(!Guess::Number(263).matches(7));
        assert!(!Guess::Oversized("7000000000000000000000".to_string()).matches(7));
    }
}
