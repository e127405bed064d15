//! Game - the aggregate root
//!
//! A Game is an Entity: the same GameId refers to the same game across
//! every move played on it. The game exclusively owns its board, the board
//! its rows, each row its pits, so every invariant is checkable locally.
//!
//! Mutation is deliberately narrow: only the sowing engine (same crate)
//! reaches the board mutably or ends the game. Collaborators read snapshots
//! and rebuild persisted state through `restore`.

use super::board::{Board, Row};
use super::player::Players;
use crate::failures::GameError;

/// An opaque, non-blank game identifier. Equality by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Result<Self, GameError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GameError::BlankGameId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for GameId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status. The only legal transition is `InProgress` → `Ended`,
/// made exclusively by the sowing engine, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Ended,
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Status::InProgress => write!(f, "IN_PROGRESS"),
            Status::Ended => write!(f, "ENDED"),
        }
    }
}

/// The aggregate: id + players + board + status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    players: Players,
    board: Board,
    status: Status,
}

impl Game {
    /// Start a fresh game: full small pits, empty mancalas, in progress.
    pub fn new(id: GameId, players: Players) -> Self {
        Self {
            id,
            players,
            board: Board::new(),
            status: Status::InProgress,
        }
    }

    /// Rebuild a game from persisted state. The repository adapter's
    /// counterpart to `new`.
    pub fn restore(id: GameId, players: Players, board: Board, status: Status) -> Self {
        Self {
            id,
            players,
            board,
            status,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The acting player's row.
    pub fn player_row(&self, player_index: usize) -> Result<&Row, GameError> {
        self.board.row_for_player(player_index)
    }

    /// The row facing the acting player's (opponent = `1 - player_index`).
    pub fn opponent_player_row(&self, player_index: usize) -> Result<&Row, GameError> {
        match player_index {
            0 | 1 => self.board.row_for_player(1 - player_index),
            index => Err(GameError::PlayerIndexOutOfBounds { index }),
        }
    }

    /// Mutable board access, reserved for the sowing engine.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// End the game: status becomes `Ended`, both rows sweep their
    /// remaining stones into their mancalas. Called only by the engine.
    pub(crate) fn end_game(&mut self) {
        self.status = Status::Ended;
        self.board.collect_stones_into_mancalas();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::Player;

    fn players() -> Players {
        Players::new(
            Player::new("Player1").unwrap(),
            Player::new("Player2").unwrap(),
        )
    }

    #[test]
    fn game_id_rejects_blank_tokens() {
        assert_eq!(GameId::new(""), Err(GameError::BlankGameId));
        assert_eq!(GameId::new("  "), Err(GameError::BlankGameId));
    }

    #[test]
    fn game_id_equality_is_by_value() {
        assert_eq!(GameId::new("g-1").unwrap(), GameId::new("g-1").unwrap());
        assert_ne!(GameId::new("g-1").unwrap(), GameId::new("g-2").unwrap());
    }

    #[test]
    fn new_game_starts_in_progress_with_a_fresh_board() {
        let game = Game::new(GameId::new("g-1").unwrap(), players());

        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.board().row1().stones(), [6, 6, 6, 6, 6, 6, 0]);
        assert_eq!(game.board().row2().stones(), [6, 6, 6, 6, 6, 6, 0]);
    }

    #[test]
    fn player_and_opponent_rows_mirror_each_other() {
        let game = Game::new(GameId::new("g-1").unwrap(), players());

        assert_eq!(game.player_row(0).unwrap(), game.opponent_player_row(1).unwrap());
        assert_eq!(game.player_row(1).unwrap(), game.opponent_player_row(0).unwrap());
        assert!(matches!(
            game.player_row(2),
            Err(GameError::PlayerIndexOutOfBounds { index: 2 })
        ));
        assert!(matches!(
            game.opponent_player_row(5),
            Err(GameError::PlayerIndexOutOfBounds { index: 5 })
        ));
    }

    #[test]
    fn end_game_sweeps_and_flips_status() {
        let mut game = Game::new(GameId::new("g-1").unwrap(), players());

        game.end_game();

        assert_eq!(game.status(), Status::Ended);
        assert_eq!(game.board().row1().stones(), [0, 0, 0, 0, 0, 0, 36]);
        assert_eq!(game.board().row2().stones(), [0, 0, 0, 0, 0, 0, 36]);
        assert_eq!(game.board().total_stones(), 72);
    }
}
