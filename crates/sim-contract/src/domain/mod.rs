//! # Domain Layer - Contract Lifecycle
//!
//! - `state`: the tagged execution state and its transition rules
//! - `config`: construction-time constants for new contracts
//! - `source`: assembly source line classification
//! - `contract`: the contract entity and its block-boundary operations

pub mod config;
pub mod contract;
pub mod source;
pub mod state;

pub use config::ContractConfig;
pub use contract::{Contract, MemoryCell};
pub use source::{AsmSource, LineKind};
pub use state::ExecState;
