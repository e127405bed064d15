//! Persistence adapters - implementations of the domain's repository port.

pub mod in_memory;
