//! # Settled Transaction Log
//!
//! Append-only ordered sequence of settled transactions. Entries are
//! immutable once appended, with a single exception: a contract activation
//! scan may flip `processed` from `false` to `true`, exactly once per entry.
//! All lookups return the first match in log order.

use serde::Serialize;
use sim_types::{AccountId, Amount, BlockHeight, SettledTransaction, Timestamp, TxId};

/// Append-only settled transaction log.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TransactionLog {
    entries: Vec<SettledTransaction>,
}

impl TransactionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a settled transaction.
    pub fn append(&mut self, tx: SettledTransaction) {
        self.entries.push(tx);
    }

    /// First transaction with the given identity.
    #[must_use]
    pub fn find_by_txid(&self, txid: TxId) -> Option<&SettledTransaction> {
        self.entries.iter().find(|tx| tx.txid == txid)
    }

    /// First transaction to `recipient` strictly after `after`, with
    /// `amount >= min_amount`, settled strictly before `before_block`.
    ///
    /// The block guard keeps same-block, not-yet-finalized activity out of
    /// contract view.
    #[must_use]
    pub fn find_incoming_after(
        &self,
        after: Timestamp,
        recipient: AccountId,
        min_amount: Amount,
        before_block: BlockHeight,
    ) -> Option<&SettledTransaction> {
        self.entries.iter().find(|tx| {
            tx.recipient == recipient
                && tx.timestamp > after
                && tx.amount >= min_amount
                && tx.blockheight < before_block
        })
    }

    /// First unprocessed transaction to `recipient` with
    /// `amount >= min_amount`, mutable for the activation scan.
    pub fn find_unprocessed_incoming_mut(
        &mut self,
        recipient: AccountId,
        min_amount: Amount,
    ) -> Option<&mut SettledTransaction> {
        self.entries
            .iter_mut()
            .find(|tx| tx.recipient == recipient && !tx.processed && tx.amount >= min_amount)
    }

    /// Iterates over the log in settlement order.
    pub fn iter(&self) -> impl Iterator<Item = &SettledTransaction> {
        self.entries.iter()
    }

    /// Number of settled transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has settled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
