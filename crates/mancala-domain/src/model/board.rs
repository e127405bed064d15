//! Board - two rows of pits, the mutable heart of a game
//!
//! A Row is a fixed sequence of 7 pits: indices 0..=5 are small pits, index
//! 6 is the mancala (the store). The shape is an invariant the capture rule
//! relies on: small pit `i` in one row faces small pit `5 - i` in the other.

use crate::failures::GameError;

/// Small pits per row.
pub const SMALL_PITS_COUNT: usize = 6;
/// Pits per row, mancala included.
pub const TOTAL_PITS_COUNT: usize = 7;
/// The mancala always sits at the end of its row.
pub const MANCALA_PIT_INDEX: usize = 6;
/// Stones in each small pit at game start.
pub const INITIAL_SMALL_PIT_STONES: u32 = 6;

/// A single stone-holding slot on the board.
///
/// A closed set of two kinds: small pits are sowable and capturable, the
/// mancala only accumulates. Stone counts are the only mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pit {
    /// A sowable pit a player picks up from
    Small { stones: u32 },
    /// The store pit that banks a player's captured and final stones
    Mancala { stones: u32 },
}

impl Pit {
    pub fn small(stones: u32) -> Self {
        Pit::Small { stones }
    }

    pub fn mancala(stones: u32) -> Self {
        Pit::Mancala { stones }
    }

    pub fn stones(&self) -> u32 {
        match self {
            Pit::Small { stones } | Pit::Mancala { stones } => *stones,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stones() == 0
    }

    pub fn is_mancala(&self) -> bool {
        matches!(self, Pit::Mancala { .. })
    }

    /// True only for a small pit holding exactly one stone.
    ///
    /// This is the capture trigger: a mancala with one stone never captures.
    pub fn has_single_stone(&self) -> bool {
        matches!(self, Pit::Small { stones: 1 })
    }

    /// Drop a single stone into this pit.
    pub fn add_stone(&mut self) {
        self.add_stones(1);
    }

    /// Bulk addition, used when captures and end-of-game sweeps bank stones
    /// into a mancala.
    pub fn add_stones(&mut self, amount: u32) {
        match self {
            Pit::Small { stones } | Pit::Mancala { stones } => *stones += amount,
        }
    }

    /// Remove and return every stone in this pit (read-and-clear).
    pub fn pop_stones(&mut self) -> u32 {
        match self {
            Pit::Small { stones } | Pit::Mancala { stones } => {
                let popped = *stones;
                *stones = 0;
                popped
            }
        }
    }
}

/// One player's side of the board: 6 small pits followed by the mancala.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pits: [Pit; TOTAL_PITS_COUNT],
}

impl Row {
    /// A fresh row: 6 small pits with 6 stones each, empty mancala.
    pub fn new() -> Self {
        Self {
            pits: [
                Pit::small(INITIAL_SMALL_PIT_STONES),
                Pit::small(INITIAL_SMALL_PIT_STONES),
                Pit::small(INITIAL_SMALL_PIT_STONES),
                Pit::small(INITIAL_SMALL_PIT_STONES),
                Pit::small(INITIAL_SMALL_PIT_STONES),
                Pit::small(INITIAL_SMALL_PIT_STONES),
                Pit::mancala(0),
            ],
        }
    }

    /// Rebuild a row from raw stone counts, index 6 becoming the mancala.
    ///
    /// Persistence adapters use this to reconstruct stored state.
    pub fn restore(stones: [u32; TOTAL_PITS_COUNT]) -> Self {
        let mut row = Self::new();
        for (index, count) in stones.into_iter().enumerate() {
            row.pits[index] = if index == MANCALA_PIT_INDEX {
                Pit::mancala(count)
            } else {
                Pit::small(count)
            };
        }
        row
    }

    pub fn pit_at(&self, index: usize) -> Result<&Pit, GameError> {
        self.pits
            .get(index)
            .ok_or(GameError::PitIndexOutOfBounds { index })
    }

    pub fn pit_at_mut(&mut self, index: usize) -> Result<&mut Pit, GameError> {
        self.pits
            .get_mut(index)
            .ok_or(GameError::PitIndexOutOfBounds { index })
    }

    pub fn mancala(&self) -> &Pit {
        &self.pits[MANCALA_PIT_INDEX]
    }

    pub fn mancala_mut(&mut self) -> &mut Pit {
        &mut self.pits[MANCALA_PIT_INDEX]
    }

    /// True when every small pit (the mancala excluded) holds no stones.
    pub fn is_all_small_pits_empty(&self) -> bool {
        self.small_pits().all(Pit::is_empty)
    }

    /// Sum and zero the small pits. Used only by the end-of-game sweep.
    pub fn collect_all_stones(&mut self) -> u32 {
        self.pits[..SMALL_PITS_COUNT]
            .iter_mut()
            .map(Pit::pop_stones)
            .sum()
    }

    /// Stone counts in pit order, a plain-data view for collaborators.
    pub fn stones(&self) -> [u32; TOTAL_PITS_COUNT] {
        let mut counts = [0; TOTAL_PITS_COUNT];
        for (index, pit) in self.pits.iter().enumerate() {
            counts[index] = pit.stones();
        }
        counts
    }

    fn small_pits(&self) -> impl Iterator<Item = &Pit> {
        self.pits[..SMALL_PITS_COUNT].iter()
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// The full board: row 1 belongs to player 0, row 2 to player 1.
///
/// The board exclusively owns its rows, so the stone-conservation invariant
/// (sowing and capturing only relocate stones) is checkable locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    row1: Row,
    row2: Row,
}

impl Board {
    pub fn new() -> Self {
        Self {
            row1: Row::new(),
            row2: Row::new(),
        }
    }

    /// Rebuild a board from two persisted rows.
    pub fn restore(row1: Row, row2: Row) -> Self {
        Self { row1, row2 }
    }

    pub fn row1(&self) -> &Row {
        &self.row1
    }

    pub fn row2(&self) -> &Row {
        &self.row2
    }

    /// The acting player's row, read-only.
    pub fn row_for_player(&self, player_index: usize) -> Result<&Row, GameError> {
        match player_index {
            0 => Ok(&self.row1),
            1 => Ok(&self.row2),
            index => Err(GameError::PlayerIndexOutOfBounds { index }),
        }
    }

    /// Disjoint mutable borrows of (own row, opponent row) for the engine.
    ///
    /// Opponent = `1 - player_index`; any other index is rejected before
    /// either row is touched.
    pub fn rows_for_player(
        &mut self,
        player_index: usize,
    ) -> Result<(&mut Row, &mut Row), GameError> {
        match player_index {
            0 => Ok((&mut self.row1, &mut self.row2)),
            1 => Ok((&mut self.row2, &mut self.row1)),
            index => Err(GameError::PlayerIndexOutOfBounds { index }),
        }
    }

    pub fn is_any_row_empty(&self) -> bool {
        self.row1.is_all_small_pits_empty() || self.row2.is_all_small_pits_empty()
    }

    /// End-of-game sweep: both rows bank their remaining small-pit stones
    /// into their own mancala, whichever row triggered the condition.
    pub fn collect_stones_into_mancalas(&mut self) {
        let collected = self.row1.collect_all_stones();
        self.row1.mancala_mut().add_stones(collected);
        let collected = self.row2.collect_all_stones();
        self.row2.mancala_mut().add_stones(collected);
    }

    /// Every stone on the board, mancalas included.
    pub fn total_stones(&self) -> u32 {
        self.row1.stones().iter().sum::<u32>() + self.row2.stones().iter().sum::<u32>()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
