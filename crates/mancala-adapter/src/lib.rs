//! # Mancala Adapter Layer
//!
//! Outbound adapters (hexagonal architecture): implementations of the
//! ports defined by the domain. Currently the in-memory repository; a
//! persistent store would slot in next to it without touching the domain.

pub mod repository;

pub use repository::in_memory::InMemoryGameRepository;
