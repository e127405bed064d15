//! Domain services - rules that do not belong to a single entity
//!
//! The sowing engine operates on the whole board and is the only place a
//! move gets executed.

pub mod sowing;
