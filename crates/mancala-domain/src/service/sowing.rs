//! Sowing engine - executes one player's move
//!
//! The engine is a domain service: stateless, synchronous, all game state
//! lives in the `Game` it is handed. One call fully resolves one move:
//! sow the picked pit, capture if the last stone lands alone in an own
//! small pit, end the game when either row runs out of stones.
//!
//! Precondition checks all happen before any pit is touched; once the
//! source pit is popped, the sow-and-capture sequence runs to completion.

use crate::failures::GameError;
use crate::model::board::{Row, MANCALA_PIT_INDEX, SMALL_PITS_COUNT};
use crate::model::game::Game;

/// The sow/capture/end-of-game rules engine.
pub struct SowingService;

impl SowingService {
    pub fn new() -> Self {
        Self
    }

    /// Play one move: the acting player picks up every stone in their pit
    /// `pit_index` and sows them counter-clockwise.
    ///
    /// Sowing covers the own row up to and including the own mancala, then
    /// the opponent's small pits (their mancala is skipped), lapping back
    /// to own index 0 until the stones run out.
    ///
    /// Checked in order before anything mutates:
    /// 1. `player_index` must be 0 or 1,
    /// 2. `pit_index` must be within the row,
    /// 3. the pit must not be the mancala,
    /// 4. the pit must not be empty.
    pub fn play(
        &self,
        game: &mut Game,
        player_index: usize,
        pit_index: usize,
    ) -> Result<(), GameError> {
        let (player_row, opponent_row) = game.board_mut().rows_for_player(player_index)?;

        let pit = player_row.pit_at(pit_index)?;
        if pit.is_mancala() {
            return Err(GameError::UnsupportedPitForSow);
        }
        if pit.is_empty() {
            return Err(GameError::EmptyPit { index: pit_index });
        }

        Self::sow_pit_stones(player_row, opponent_row, pit_index)?;

        if game.board().is_any_row_empty() {
            game.end_game();
        }
        Ok(())
    }

    fn sow_pit_stones(
        player_row: &mut Row,
        opponent_row: &mut Row,
        pit_index: usize,
    ) -> Result<(), GameError> {
        let mut stones_to_sow = player_row.pit_at_mut(pit_index)?.pop_stones();

        let mut final_pit_index = pit_index;
        let mut is_own_pit = false;
        let mut first_lap = true;
        while stones_to_sow > 0 {
            // Own-row segment, mancala included. Only the first lap starts
            // after the source pit; later laps restart at index 0.
            let mut i = if first_lap { pit_index + 1 } else { 0 };
            first_lap = false;
            while i <= MANCALA_PIT_INDEX && stones_to_sow > 0 {
                player_row.pit_at_mut(i)?.add_stone();
                i += 1;
                stones_to_sow -= 1;
            }
            final_pit_index = i - 1;
            if stones_to_sow == 0 {
                is_own_pit = true;
                break;
            }

            // Opponent segment: small pits only, never their mancala.
            let mut i = 0;
            while i < SMALL_PITS_COUNT && stones_to_sow > 0 {
                opponent_row.pit_at_mut(i)?.add_stone();
                i += 1;
                stones_to_sow -= 1;
            }
            final_pit_index = i - 1;
        }

        Self::capture_opponent_stones_if_single_stone_landing(
            player_row,
            opponent_row,
            final_pit_index,
            is_own_pit,
        )
    }

    /// The capture rule: when the last stone lands in an own small pit that
    /// now holds exactly one stone, that stone plus the directly-opposite
    /// opponent pit's stones move into the own mancala. The rows are
    /// mirrored, so pit `i` faces opponent pit `5 - i`.
    fn capture_opponent_stones_if_single_stone_landing(
        player_row: &mut Row,
        opponent_row: &mut Row,
        final_pit_index: usize,
        is_own_pit: bool,
    ) -> Result<(), GameError> {
        if !is_own_pit || !player_row.pit_at(final_pit_index)?.has_single_stone() {
            return Ok(());
        }

        let opposite_index = SMALL_PITS_COUNT - final_pit_index - 1;
        let captured = player_row.pit_at_mut(final_pit_index)?.pop_stones()
            + opponent_row.pit_at_mut(opposite_index)?.pop_stones();
        player_row.mancala_mut().add_stones(captured);
        Ok(())
    }
}

impl Default for SowingService {
    fn default() -> Self {
        Self::new()
    }
}
