//! # Domain Layer - Ledger
//!
//! Pure ledger logic, leaf-first:
//!
//! - `accounts`: the lazily populated account book
//! - `log`: the append-only settled transaction log
//! - `chain`: the [`Blockchain`](chain::Blockchain) façade tying both to
//!   block/timestamp accounting

pub mod accounts;
pub mod chain;
pub mod log;

pub use accounts::AccountBook;
pub use chain::Blockchain;
pub use log::TransactionLog;
