//! # Shared Simulator Types
//!
//! This crate contains the record types shared between the ledger and the
//! contract lifecycle crates, plus the two utility surfaces both of them
//! consume: the message word codec and transaction identity generation.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every cross-crate record (accounts,
//!   transactions, message payloads) is defined here.
//! - **Plain quantities**: identities are `u64`, balances and amounts are
//!   `i64`. Negative balances are legal; overdraft is a caller concern.
//! - **Symmetric codec**: the same text ↔ hex ↔ word-array conversions are
//!   used by transaction ingestion and by contract message dispatch.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod errors;
pub mod ident;
pub mod message;

pub use entities::*;
pub use errors::*;
pub use ident::random_tx_id;
