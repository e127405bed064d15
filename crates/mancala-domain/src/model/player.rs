//! Player and Players - validated value objects
//!
//! Both validate their invariants at construction and refuse to exist in an
//! invalid state: there is no way to hold a blank player name or a game
//! with anything but exactly two players.

use crate::failures::GameError;

/// Longest player name the game accepts.
pub const PLAYER_NAME_MAX_LENGTH: usize = 50;

/// A participant's name, 1 to 50 characters, never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player(String);

impl Player {
    pub fn new(name: impl Into<String>) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::BlankPlayerName);
        }
        let length = name.chars().count();
        if length > PLAYER_NAME_MAX_LENGTH {
            return Err(GameError::PlayerNameTooLong { length });
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Exactly two players, order-significant: index 0 owns row 1, index 1
/// owns row 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    players: [Player; 2],
}

impl Players {
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
        }
    }

    pub fn player_at(&self, index: usize) -> Result<&Player, GameError> {
        self.players
            .get(index)
            .ok_or(GameError::PlayerIndexOutOfBounds { index })
    }

    /// Both names in player order, for read models.
    pub fn names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }
}

impl TryFrom<Vec<Player>> for Players {
    type Error = GameError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        let count = players.len();
        let [first, second]: [Player; 2] = players
            .try_into()
            .map_err(|_| GameError::InvalidPlayersCount { count })?;
        Ok(Self::new(first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_regular_name() {
        let player = Player::new("Player1").unwrap();
        assert_eq!(player.name(), "Player1");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Player::new(""), Err(GameError::BlankPlayerName));
        assert_eq!(Player::new("   "), Err(GameError::BlankPlayerName));
    }

    #[test]
    fn rejects_names_over_fifty_characters() {
        let name = "x".repeat(51);
        assert_eq!(
            Player::new(name),
            Err(GameError::PlayerNameTooLong { length: 51 })
        );
        assert!(Player::new("y".repeat(50)).is_ok());
    }

    #[test]
    fn player_at_is_bounded() {
        let players = Players::new(
            Player::new("Player1").unwrap(),
            Player::new("Player2").unwrap(),
        );

        assert_eq!(players.player_at(0).unwrap().name(), "Player1");
        assert_eq!(players.player_at(1).unwrap().name(), "Player2");
        assert_eq!(
            players.player_at(2),
            Err(GameError::PlayerIndexOutOfBounds { index: 2 })
        );
    }

    #[test]
    fn try_from_requires_exactly_two_players() {
        let one = vec![Player::new("Solo").unwrap()];
        assert_eq!(
            Players::try_from(one),
            Err(GameError::InvalidPlayersCount { count: 1 })
        );

        let three = vec![
            Player::new("A").unwrap(),
            Player::new("B").unwrap(),
            Player::new("C").unwrap(),
        ];
        assert_eq!(
            Players::try_from(three),
            Err(GameError::InvalidPlayersCount { count: 3 })
        );
    }
}
