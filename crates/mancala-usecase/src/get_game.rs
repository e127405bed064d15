//! GetGame - read-only lookup of a game's current state

use mancala_domain::{GameId, GameRepository};
use tracing::debug;

use crate::error::UseCaseError;
use crate::snapshot::GameSnapshot;

#[derive(Debug, Clone)]
pub struct GetGameInput {
    pub game_id: String,
}

/// Loads a game and maps it to its read model. Never mutates anything, so
/// repeated calls between plays return identical snapshots.
pub struct GetGame<R> {
    repository: R,
}

impl<R: GameRepository> GetGame<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn get(&self, input: GetGameInput) -> Result<GameSnapshot, UseCaseError> {
        let id = GameId::new(input.game_id)?;
        let game = self
            .repository
            .find_by_id(&id)?
            .ok_or_else(|| UseCaseError::GameNotFound(id.to_string()))?;

        debug!(game_id = %id, "game loaded");
        Ok(GameSnapshot::from_game(&game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_game::{CreateGame, CreateGameInput};
    use crate::test_support::TestGameRepository;
    use mancala_domain::GameError;

    fn get_input(game_id: &str) -> GetGameInput {
        GetGameInput {
            game_id: game_id.to_string(),
        }
    }

    #[test]
    fn returns_the_snapshot_of_an_existing_game() {
        let mut repository = TestGameRepository::new();
        CreateGame::new(&mut repository)
            .start(CreateGameInput {
                game_id: "g-1".to_string(),
                player1: "Player1".to_string(),
                player2: "Player2".to_string(),
            })
            .unwrap();

        let snapshot = GetGame::new(&mut repository).get(get_input("g-1")).unwrap();

        assert_eq!(snapshot.game_id, "g-1");
        assert_eq!(snapshot.board.rows[0].pits, [6, 6, 6, 6, 6, 6, 0]);
        assert_eq!(snapshot.status, "IN_PROGRESS");
    }

    #[test]
    fn repeated_reads_are_identical() {
        let mut repository = TestGameRepository::new();
        CreateGame::new(&mut repository)
            .start(CreateGameInput {
                game_id: "g-1".to_string(),
                player1: "Player1".to_string(),
                player2: "Player2".to_string(),
            })
            .unwrap();
        let get = GetGame::new(&mut repository);

        let first = get.get(get_input("g-1")).unwrap();
        let second = get.get(get_input("g-1")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn fails_when_the_game_does_not_exist() {
        let repository = TestGameRepository::new();

        let result = GetGame::new(repository).get(get_input("missing"));

        assert_eq!(
            result,
            Err(UseCaseError::GameNotFound("missing".to_string()))
        );
    }

    #[test]
    fn fails_on_a_blank_id_before_hitting_the_repository() {
        let repository = TestGameRepository::new();

        let result = GetGame::new(repository).get(get_input(" "));

        assert_eq!(result, Err(UseCaseError::Rule(GameError::BlankGameId)));
    }
}
