//! # Simulator Runtime
//!
//! The driving loop around the ledger and the contracts. Per block, the
//! order is fixed and load bearing:
//!
//! 1. ingest queued user transactions into the old block
//! 2. advance the ledger's block counter
//! 3. block-boundary handling (sleep expiry, activation) per contract
//! 4. run every pending contract until it yields
//! 5. flush every contract's outgoing queue into the ledger
//!
//! Flushing last is what makes contract effects visible starting next
//! block; violating the order breaks that guarantee.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod simulator;

pub use simulator::Simulator;
