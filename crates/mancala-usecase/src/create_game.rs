//! CreateGame - start a fresh game under a caller-allocated id

use mancala_domain::{Game, GameId, GameRepository, Player, Players};
use tracing::info;

use crate::error::UseCaseError;

/// Input as plain data; the orchestrator allocates the fresh game id.
#[derive(Debug, Clone)]
pub struct CreateGameInput {
    pub game_id: String,
    pub player1: String,
    pub player2: String,
}

/// Creates a game with a standard fresh board.
pub struct CreateGame<R> {
    repository: R,
}

impl<R: GameRepository> CreateGame<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate the id and names, build the aggregate and store it.
    ///
    /// Fails with a validation error for bad input and with
    /// `RepositoryError::AlreadyExists` when the id is already taken.
    pub fn start(&mut self, input: CreateGameInput) -> Result<(), UseCaseError> {
        let game = Game::new(
            GameId::new(input.game_id)?,
            Players::new(Player::new(input.player1)?, Player::new(input.player2)?),
        );

        self.repository.create(&game)?;
        info!(game_id = %game.id(), "game created");
        Ok(())
    }
}
