//! In-memory repository for use-case tests.

use std::collections::HashMap;

use mancala_domain::{Game, GameId, GameRepository, RepositoryError};

#[derive(Debug, Default)]
pub(crate) struct TestGameRepository {
    games: HashMap<String, Game>,
}

impl TestGameRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stored(&self, id: &str) -> Option<&Game> {
        self.games.get(id)
    }
}

impl GameRepository for TestGameRepository {
    fn create(&mut self, game: &Game) -> Result<(), RepositoryError> {
        let id = game.id().to_string();
        if self.games.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists { id });
        }
        self.games.insert(id, game.clone());
        Ok(())
    }

    fn update(&mut self, game: &Game) -> Result<(), RepositoryError> {
        self.games.insert(game.id().to_string(), game.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, RepositoryError> {
        Ok(self.games.get(id.as_str()).cloned())
    }
}
