//! Domain failures - every rule violation is a distinguishable, typed condition
//!
//! These are input/programming errors, never transient faults: the caller
//! picked an invalid pit, an invalid player, or supplied an invalid value
//! object. No retry policy applies to any of them.

/// A violation of the game rules or of a value-object invariant.
///
/// Raised synchronously, always before any board mutation begins: a failed
/// `play` leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Game id token was blank or whitespace-only
    BlankGameId,
    /// Player name was blank or whitespace-only
    BlankPlayerName,
    /// Player name exceeded the 50 character limit
    PlayerNameTooLong { length: usize },
    /// A game takes exactly two players
    InvalidPlayersCount { count: usize },
    /// Player index outside {0, 1}
    PlayerIndexOutOfBounds { index: usize },
    /// Pit index outside 0..=6
    PitIndexOutOfBounds { index: usize },
    /// The mancala (store) pit cannot be sown from
    UnsupportedPitForSow,
    /// The selected pit holds no stones
    EmptyPit { index: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BlankGameId => write!(f, "Game id is mandatory"),
            GameError::BlankPlayerName => write!(f, "Player name is mandatory"),
            GameError::PlayerNameTooLong { length } => {
                write!(f, "Player name should have max 50 characters, got {}", length)
            }
            GameError::InvalidPlayersCount { count } => {
                write!(f, "Number of players should be 2, got {}", count)
            }
            GameError::PlayerIndexOutOfBounds { index } => {
                write!(f, "Player index should be within range 0..1, got {}", index)
            }
            GameError::PitIndexOutOfBounds { index } => {
                write!(f, "Pit index should be within range 0..6, got {}", index)
            }
            GameError::UnsupportedPitForSow => {
                write!(f, "Mancala stones can't be sown")
            }
            GameError::EmptyPit { index } => {
                write!(f, "Pit {} is empty", index)
            }
        }
    }
}

impl std::error::Error for GameError {}
