//! # Ports
//!
//! The interfaces the contract lifecycle depends on. The only one is the
//! external instruction execution engine; adapters implement it to supply
//! real or scripted instruction semantics.

pub mod engine;

pub use engine::{InstructionEngine, StepOutcome};
