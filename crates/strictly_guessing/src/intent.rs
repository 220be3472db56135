//! First-class intents.
//!
//! Intents are what a render surface sends to the state machine. They carry
//! raw, unvalidated input; validation happens inside the transition.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter};
use tracing::instrument;

/// A named user action submitted to the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Begin a round and draw the target.
    Start,
    /// Suspend guessing.
    Pause,
    /// Resume guessing.
    Resume,
    /// Submit raw guess text.
    SubmitGuess(String),
    /// Replace the pending guess text.
    EditGuessInput(String),
    /// Leave a finished round and return to the start screen.
    TryAgain,
}

impl Intent {
    /// Creates a guess submission from anything string-like.
    pub fn guess(raw: impl Into<String>) -> Self {
        Intent::SubmitGuess(raw.into())
    }

    /// Creates an input edit from anything string-like.
    pub fn edit(raw: impl Into<String>) -> Self {
        Intent::EditGuessInput(raw.into())
    }

    /// Returns the payload-free kind of this intent.
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::Start => IntentKind::Start,
            Intent::Pause => IntentKind::Pause,
            Intent::Resume => IntentKind::Resume,
            Intent::SubmitGuess(_) => IntentKind::SubmitGuess,
            Intent::EditGuessInput(_) => IntentKind::EditGuessInput,
            Intent::TryAgain => IntentKind::TryAgain,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::SubmitGuess(raw) => write!(f, "guess {}", raw),
            Intent::EditGuessInput(raw) => write!(f, "edit {}", raw),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Intent discriminant without payload, used for logging and guard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum IntentKind {
    /// See [`Intent::Start`].
    Start,
    /// See [`Intent::Pause`].
    Pause,
    /// See [`Intent::Resume`].
    Resume,
    /// See [`Intent::SubmitGuess`].
    SubmitGuess,
    /// See [`Intent::EditGuessInput`].
    EditGuessInput,
    /// See [`Intent::TryAgain`].
    TryAgain,
}

/// Text form of an intent could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IntentParseError {
    /// The command word is unknown.
    #[display("Unknown intent {:?}", _0)]
    Unknown(String),

    /// A command that carries input was given none.
    #[display("Intent {:?} requires an argument", _0)]
    MissingArgument(String),

    /// A command that takes no input was given some.
    #[display("Intent {:?} takes no argument", _0)]
    UnexpectedArgument(String),
}

impl std::error::Error for IntentParseError {}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `start`, `pause`, `resume`, `try-again`, `guess <raw>` or
    /// `edit <raw>`. The argument may also follow a colon (`guess:5`).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (word, arg) = match s.find([' ', ':']) {
            Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
            None => (s.trim_end(), None),
        };
        let command = word.to_ascii_lowercase();

        match (command.as_str(), arg) {
            ("guess", Some(raw)) => Ok(Intent::SubmitGuess(raw.to_string())),
            ("edit", Some(raw)) => Ok(Intent::EditGuessInput(raw.to_string())),
            ("guess" | "edit", None) => Err(IntentParseError::MissingArgument(command)),
            ("start" | "pause" | "resume" | "try-again" | "tryagain" | "restart", Some(rest))
                if !rest.trim().is_empty() =>
            {
                Err(IntentParseError::UnexpectedArgument(command))
            }
            ("start", _) => Ok(Intent::Start),
            ("pause", _) => Ok(Intent::Pause),
            ("resume", _) => Ok(Intent::Resume),
            ("try-again" | "tryagain" | "restart", _) => Ok(Intent::TryAgain),
            _ => Err(IntentParseError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!("start".parse(), Ok(Intent::Start));
        assert_eq!("Pause".parse(), Ok(Intent::Pause));
        assert_eq!("resume ".parse(), Ok(Intent::Resume));
        assert_eq!("try-again".parse(), Ok(Intent::TryAgain));
        assert_eq!("restart".parse(), Ok(Intent::TryAgain));
    }

    #[test]
    fn test_parse_keeps_raw_argument() {
        assert_eq!("guess 5".parse(), Ok(Intent::guess("5")));
        assert_eq!("guess:abc".parse(), Ok(Intent::guess("abc")));
        assert_eq!("edit  7".parse(), Ok(Intent::edit(" 7")));
        assert_eq!("edit:".parse(), Ok(Intent::edit("")));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "guess".parse::<Intent>(),
            Err(IntentParseError::MissingArgument("guess".to_string()))
        );
        assert_eq!(
            "start now".parse::<Intent>(),
            Err(IntentParseError::UnexpectedArgument("start".to_string()))
        );
        assert!(matches!(
            "jump".parse::<Intent>(),
            Err(IntentParseError::Unknown(_))
        ));
    }

    #[test]
    fn test_display_uses_kebab_case() {
        assert_eq!(Intent::TryAgain.to_string(), "try-again");
        assert_eq!(Intent::guess("5").to_string(), "guess 5");
    }
}
