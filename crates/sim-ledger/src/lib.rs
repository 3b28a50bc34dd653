//! # Ledger - Accounts, Transaction Log, and Block Accounting
//!
//! The shared mutable ledger every contract and the host driver operate on.
//! Owned once at the driver level and passed by reference into each
//! operation; nothing in this crate holds global state.
//!
//! ## Components
//!
//! - [`AccountBook`]: lazily created accounts keyed by identity.
//! - [`TransactionLog`]: append-only ordered log of settled transactions.
//! - [`Blockchain`]: the façade owning both, plus the current block height
//!   and the intra-block transaction counter.
//!
//! ## Mutation Discipline
//!
//! Every mutation of the shared ledger goes through a named method on
//! [`Blockchain`]: `add_transactions`, `credit`, `account_or_create`,
//! `settle_outgoing`, `consume_unprocessed_incoming`, and `forge_block`.
//! All other operations are read-only.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::*;
