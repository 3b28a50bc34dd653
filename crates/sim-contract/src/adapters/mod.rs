//! # Adapters
//!
//! In-memory implementations of the ports, for tests and host drivers that
//! do not bring a real instruction set.

pub mod scripted;

pub use scripted::{ScriptedEngine, ScriptedStep};
