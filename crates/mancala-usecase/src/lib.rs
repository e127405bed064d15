//! # Mancala Use-Case Layer
//!
//! Application-specific orchestration: each use case loads a game through
//! the repository port, hands it to the domain and stores the result. The
//! domain decides; this layer only moves data between the port and the
//! caller.

pub mod create_game;
pub mod error;
pub mod get_game;
pub mod play_game;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use create_game::{CreateGame, CreateGameInput};
pub use error::UseCaseError;
pub use get_game::{GetGame, GetGameInput};
pub use play_game::{PlayGame, PlayGameInput};
pub use snapshot::{BoardSnapshot, GameSnapshot, RowSnapshot};
