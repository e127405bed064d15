//! Game Repository - abstract persistence for games
//!
//! The trait defines what the application needs from storage; how it is
//! actually stored (memory, SQL, files) is the adapter's concern.

use crate::model::game::{Game, GameId};

/// Errors a repository implementation can surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A game with this id already exists (create only)
    AlreadyExists { id: String },
    /// The backing store failed
    Storage { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::AlreadyExists { id } => {
                write!(f, "Game with id {} already exists", id)
            }
            RepositoryError::Storage { message } => {
                write!(f, "Storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Game Repository trait - a port in hexagonal architecture.
///
/// Note: no async here, by design. One `play` fully mutates one game
/// before returning, and the caller owns the at-most-one-writer-per-game
/// guarantee around load-mutate-store.
pub trait GameRepository {
    /// Store a new game. Fails with `AlreadyExists` when the id is taken.
    fn create(&mut self, game: &Game) -> Result<(), RepositoryError>;

    /// Overwrite the stored state for an existing id.
    fn update(&mut self, game: &Game) -> Result<(), RepositoryError>;

    /// Look a game up by id. Absence is `Ok(None)`, not an error.
    fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, RepositoryError>;
}

// A mutable borrow of a repository is itself a repository, so callers can
// lend one to a use case instead of moving it.
impl<T: GameRepository + ?Sized> GameRepository for &mut T {
    fn create(&mut self, game: &Game) -> Result<(), RepositoryError> {
        (**self).create(game)
    }

    fn update(&mut self, game: &Game) -> Result<(), RepositoryError> {
        (**self).update(game)
    }

    fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, RepositoryError> {
        (**self).find_by_id(id)
    }
}
