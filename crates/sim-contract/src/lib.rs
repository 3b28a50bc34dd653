//! # Contract Lifecycle
//!
//! One [`Contract`] per deployed program: execution state, register file,
//! stacks, memory, an outgoing-message queue, and the block-boundary
//! activation logic tying it to the shared ledger.
//!
//! The instruction execution engine that interprets a program line by line
//! is NOT part of this crate. It is consumed through the
//! [`InstructionEngine`] port: a one-time deploy hook plus a
//! step-one-instruction call returning a tri-state outcome. The
//! [`ScriptedEngine`] adapter provides an in-memory stand-in so the whole
//! lifecycle is testable without a real instruction set.
//!
//! ## Lifecycle States
//!
//! `Active`, `Stopped`, `Frozen`, `Finished`, `Dead`, and `Sleeping{until}`
//! form one tagged state ([`ExecState`]); `Dead` is absorbing. Status
//! reporting towards the driver is plain text, not structured errors:
//! callers pattern-match on substrings such as "sleeping", "breakpoint",
//! or "ERROR".

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::ScriptedEngine;
pub use domain::config::ContractConfig;
pub use domain::contract::{Contract, MemoryCell, FAULT_DIAGNOSTIC};
pub use domain::source::{classify, AsmSource, LineKind};
pub use domain::state::ExecState;
pub use ports::engine::{InstructionEngine, StepOutcome};
