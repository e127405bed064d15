//! PlayGame - load a game, run one move through the engine, store the result
//!
//! The whole load-mutate-store sequence is synchronous; the caller owns the
//! at-most-one-concurrent-play-per-game guarantee.

use mancala_domain::{GameId, GameRepository, SowingService};
use tracing::info;

use crate::error::UseCaseError;

/// The move request as plain data.
#[derive(Debug, Clone)]
pub struct PlayGameInput {
    pub game_id: String,
    pub player_index: usize,
    pub pit_index: usize,
}

pub struct PlayGame<R> {
    service: SowingService,
    repository: R,
}

impl<R: GameRepository> PlayGame<R> {
    pub fn new(service: SowingService, repository: R) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub fn play(&mut self, input: PlayGameInput) -> Result<(), UseCaseError> {
        let id = GameId::new(input.game_id)?;
        let mut game = self
            .repository
            .find_by_id(&id)?
            .ok_or_else(|| UseCaseError::GameNotFound(id.to_string()))?;

        self.service
            .play(&mut game, input.player_index, input.pit_index)?;

        self.repository.update(&game)?;
        info!(
            game_id = %id,
            player_index = input.player_index,
            pit_index = input.pit_index,
            status = %game.status(),
            "move played"
        );
        Ok(())
    }
}
