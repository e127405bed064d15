//! # Mancala Domain Layer
//!
//! The rules engine for a two-player stone-sowing board game (a
//! Mancala/Kalah variant): two rows of six small pits plus one mancala
//! (store) per row, the sowing-and-capture move algorithm, and end-of-game
//! detection.
//!
//! ## Architecture
//!
//! - `model/` - entities and value objects (Game, Board, Row, Pit, Players)
//! - `repository/` - trait definitions (not implementations)
//! - `service/` - the sowing engine
//!
//! This crate has zero external dependencies. If the storage or transport
//! technology changes, the rules of the game do not.

pub mod failures;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use failures::GameError;
pub use model::{
    board::{Board, Pit, Row},
    game::{Game, GameId, Status},
    player::{Player, Players},
};
pub use repository::game_repository::{GameRepository, RepositoryError};
pub use service::sowing::SowingService;
