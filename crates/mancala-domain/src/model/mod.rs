//! Domain models - the vocabulary of the game
//!
//! Pits, rows, boards, players and the game aggregate. Every name here
//! matches how the rules talk about the board.

pub mod board;
pub mod game;
pub mod player;
