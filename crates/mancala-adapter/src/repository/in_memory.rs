//! In-memory Game Repository
//!
//! The process-wide game store, explicitly owned and handed to whoever
//! needs it: cloning the repository clones the handle, not the data. The
//! lock makes individual operations safe; serializing plays per game id is
//! the orchestrator's job.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use mancala_domain::{Game, GameId, GameRepository, RepositoryError};

/// Thread-safe in-memory implementation keyed by game id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl GameRepository for InMemoryGameRepository {
    fn create(&mut self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::Storage {
                message: "Failed to acquire write lock".to_string(),
            })?;
        let id = game.id().to_string();
        if games.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists { id });
        }
        games.insert(id, game.clone());
        Ok(())
    }

    fn update(&mut self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::Storage {
                message: "Failed to acquire write lock".to_string(),
            })?;
        games.insert(game.id().to_string(), game.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, RepositoryError> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::Storage {
                message: "Failed to acquire read lock".to_string(),
            })?;
        Ok(games.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mancala_domain::{Player, Players, Status};

    fn game(id: &str) -> Game {
        Game::new(
            GameId::new(id).unwrap(),
            Players::new(
                Player::new("Player1").unwrap(),
                Player::new("Player2").unwrap(),
            ),
        )
    }

    #[test]
    fn stores_and_finds_a_game() {
        let mut repo = InMemoryGameRepository::new();
        repo.create(&game("g-1")).unwrap();

        let found = repo.find_by_id(&GameId::new("g-1").unwrap()).unwrap();

        let found = found.unwrap();
        assert_eq!(found.id().as_str(), "g-1");
        assert_eq!(found.status(), Status::InProgress);
    }

    #[test]
    fn find_returns_none_for_an_unknown_id() {
        let repo = InMemoryGameRepository::new();

        let found = repo.find_by_id(&GameId::new("missing").unwrap()).unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn create_rejects_a_duplicate_id() {
        let mut repo = InMemoryGameRepository::new();
        repo.create(&game("g-1")).unwrap();

        let result = repo.create(&game("g-1"));

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                id: "g-1".to_string()
            })
        );
    }

    #[test]
    fn update_overwrites_the_stored_state() {
        let mut repo = InMemoryGameRepository::new();
        let stored = game("g-1");
        repo.create(&stored).unwrap();

        let mut played = stored.clone();
        mancala_domain::SowingService::new()
            .play(&mut played, 0, 0)
            .unwrap();
        repo.update(&played).unwrap();

        let found = repo.find_by_id(&GameId::new("g-1").unwrap()).unwrap().unwrap();
        assert_eq!(found.board().row1().stones(), [0, 7, 7, 7, 7, 7, 1]);
    }

    #[test]
    fn clones_share_the_same_store() {
        let mut repo = InMemoryGameRepository::new();
        let handle = repo.clone();

        repo.create(&game("g-1")).unwrap();

        let found = handle.find_by_id(&GameId::new("g-1").unwrap()).unwrap();
        assert!(found.is_some());
    }
}
