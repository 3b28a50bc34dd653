//! # Core Record Types
//!
//! Accounts and the three transaction shapes that flow through the
//! simulator:
//!
//! - [`UserTransaction`]: a request submitted by the host driver, consumed
//!   only if its block height matches the ledger's current block.
//! - [`SettledTransaction`]: a transaction recorded permanently in the
//!   ledger log.
//! - [`OutgoingTransaction`]: a message produced by a running contract and
//!   held in its queue until block-end flush.

use crate::message::MESSAGE_WORDS;
use serde::{Deserialize, Serialize};

/// A 64-bit account identity. Accounts and contracts share one namespace.
pub type AccountId = u64;

/// A 64-bit random transaction identity (not guaranteed collision free).
pub type TxId = u64;

/// Discrete simulation time unit.
pub type BlockHeight = u32;

/// Composite ordering key: `(blockheight << 32) + intra-block sequence`.
pub type Timestamp = u64;

/// A signed transaction amount or account balance.
pub type Amount = i64;

/// A fixed four-word message payload (32 bytes).
pub type MessageWords = [u64; MESSAGE_WORDS];

/// Composes the ordering key for the `seq`-th transaction settled at
/// `block`.
///
/// Timestamps are strictly increasing within a block and ordered by block
/// height across blocks, as long as fewer than 2^32 transactions settle per
/// block.
#[must_use]
pub const fn make_timestamp(block: BlockHeight, seq: u64) -> Timestamp {
    ((block as u64) << 32) + seq
}

/// An account stored in the ledger.
///
/// Created lazily on first credit/debit or first lookup-or-create; never
/// deleted. The balance may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identity.
    pub id: AccountId,
    /// Current balance (can be negative).
    pub balance: Amount,
}

/// A transaction request created by the host driver.
///
/// Only consumed when `blockheight` equals the ledger's current block
/// height; all others are silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTransaction {
    /// Sending account.
    pub sender: AccountId,
    /// Receiving account.
    pub recipient: AccountId,
    /// Amount to transfer. No balance check is performed.
    pub amount: Amount,
    /// Block the request targets.
    pub blockheight: BlockHeight,
    /// Optional message, max 32 characters. Takes precedence over
    /// `message_hex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    /// Optional message, max 64 hexadecimal characters. Ignored when
    /// `message_text` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_hex: Option<String>,
}

/// A transaction recorded permanently in the ledger log.
///
/// Immutable once appended, except for `processed`, which a contract
/// activation scan flips from `false` to `true` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettledTransaction {
    /// Sending account (a contract id for dispatched messages).
    pub sender: AccountId,
    /// Receiving account.
    pub recipient: AccountId,
    /// Random 64-bit transaction identity.
    pub txid: TxId,
    /// Transferred amount.
    pub amount: Amount,
    /// Block the transaction settled in.
    pub blockheight: BlockHeight,
    /// Composite ordering key, see [`make_timestamp`].
    pub timestamp: Timestamp,
    /// Message payload as four 64-bit words.
    pub message_words: MessageWords,
    /// Whether a contract activation scan has consumed this transaction.
    pub processed: bool,
    /// Human-readable message form, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    /// Hexadecimal message form, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_hex: Option<String>,
}

/// A transaction created by a running contract.
///
/// Held in the contract's outgoing queue until the block-end flush settles
/// it into the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingTransaction {
    /// Receiving account.
    pub recipient: AccountId,
    /// Amount to credit.
    pub amount: Amount,
    /// Fixed four-word message payload.
    pub message_words: MessageWords,
}
