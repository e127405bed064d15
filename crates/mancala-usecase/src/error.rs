//! Use-case failures
//!
//! The transport collaborator maps these onto its own surface: rule
//! violations are the caller's fault, `GameNotFound` is an absent resource,
//! `Repository(AlreadyExists)` is a conflict.

use mancala_domain::{GameError, RepositoryError};
use thiserror::Error;

/// Everything a use case can fail with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UseCaseError {
    #[error("Game with id {0} not found")]
    GameNotFound(String),

    #[error(transparent)]
    Rule(#[from] GameError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
