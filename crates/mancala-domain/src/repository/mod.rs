//! Repository traits - the "ports" of hexagonal architecture
//!
//! The domain defines HOW it wants games persisted, not how it is done.
//! That is the adapter's job.

pub mod game_repository;
