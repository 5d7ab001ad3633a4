//! Orchestration over the pure domain engines.

pub mod settlement;
