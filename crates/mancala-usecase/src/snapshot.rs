//! Read models - plain-data views of a game for collaborators
//!
//! Snapshots are what leaves this layer: stone counts and names, no domain
//! behavior. Serializable so a transport adapter can ship them as-is.

use mancala_domain::model::board::TOTAL_PITS_COUNT;
use mancala_domain::Game;
use serde::{Deserialize, Serialize};

/// One row's stone counts in pit order, index 6 being the mancala.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub pits: [u32; TOTAL_PITS_COUNT],
}

/// Both rows, row 0 belonging to player 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: [RowSnapshot; 2],
}

/// The full read model of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: String,
    pub players: [String; 2],
    pub board: BoardSnapshot,
    pub status: String,
}

impl GameSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let [first, second] = game.players().names();
        Self {
            game_id: game.id().to_string(),
            players: [first.to_string(), second.to_string()],
            board: BoardSnapshot {
                rows: [
                    RowSnapshot {
                        pits: game.board().row1().stones(),
                    },
                    RowSnapshot {
                        pits: game.board().row2().stones(),
                    },
                ],
            },
            status: game.status().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mancala_domain::{GameId, Player, Players};

    #[test]
    fn snapshot_mirrors_the_game() {
        let game = Game::new(
            GameId::new("g-1").unwrap(),
            Players::new(
                Player::new("Player1").unwrap(),
                Player::new("Player2").unwrap(),
            ),
        );

        let snapshot = GameSnapshot::from_game(&game);

        assert_eq!(snapshot.game_id, "g-1");
        assert_eq!(snapshot.players, ["Player1".to_string(), "Player2".to_string()]);
        assert_eq!(snapshot.board.rows[0].pits, [6, 6, 6, 6, 6, 6, 0]);
        assert_eq!(snapshot.board.rows[1].pits, [6, 6, 6, 6, 6, 6, 0]);
        assert_eq!(snapshot.status, "IN_PROGRESS");
    }
}
