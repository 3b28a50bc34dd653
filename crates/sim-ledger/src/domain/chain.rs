//! # Blockchain Façade
//!
//! Owns the account book, the settled transaction log, the current block
//! height, and the intra-block transaction counter. This is the single
//! shared mutable resource of the simulation; the driver owns it and lends
//! it into every contract operation.
//!
//! Timestamps are composed as `(blockheight << 32) + counter`, with the
//! counter bumped before composition, so the first transaction of a block
//! carries sequence 1.

use crate::domain::accounts::AccountBook;
use crate::domain::log::TransactionLog;
use sim_types::message::{hex_to_text, hex_to_words, text_to_hex, words_to_hex};
use sim_types::{
    make_timestamp, Account, AccountId, Amount, BlockHeight, MessageWords, OutgoingTransaction,
    SettledTransaction, Timestamp, TxId, UserTransaction,
};
use serde::Serialize;
use tracing::{debug, warn};

/// The shared ledger instance.
///
/// Serializable for host-side snapshots of the full simulation state.
#[derive(Debug, Clone, Serialize)]
pub struct Blockchain {
    accounts: AccountBook,
    log: TransactionLog,
    current_block: BlockHeight,
    tx_height: u64,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Creates a fresh ledger at block height 1 with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: AccountBook::new(),
            log: TransactionLog::new(),
            current_block: 1,
            tx_height: 0,
        }
    }

    /// Current block height.
    #[must_use]
    pub fn current_block(&self) -> BlockHeight {
        self.current_block
    }

    /// Number of transactions settled in the current block so far.
    #[must_use]
    pub fn intra_block_count(&self) -> u64 {
        self.tx_height
    }

    /// Read access to the account book.
    #[must_use]
    pub fn accounts(&self) -> &AccountBook {
        &self.accounts
    }

    /// Read access to the settled transaction log.
    #[must_use]
    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Settles every request targeting the current block height.
    ///
    /// For each matching request: debit sender, credit recipient (lazy
    /// account creation, no balance check), assign the next intra-block
    /// sequence and a random txid, derive the message words from the text
    /// form when present, else the hex form, else empty. Requests for other
    /// block heights are ignored without error; a request whose message
    /// fails to encode is dropped whole before any balance is touched.
    pub fn add_transactions(&mut self, requests: &[UserTransaction]) {
        for req in requests {
            if req.blockheight != self.current_block {
                continue;
            }
            let message_words = match encode_request_message(req) {
                Ok(words) => words,
                Err(err) => {
                    warn!(
                        sender = req.sender,
                        recipient = req.recipient,
                        error = %err,
                        "dropping transaction with malformed message"
                    );
                    continue;
                }
            };

            self.accounts.credit(req.sender, -req.amount);
            self.accounts.credit(req.recipient, req.amount);
            self.tx_height += 1;

            let settled = SettledTransaction {
                sender: req.sender,
                recipient: req.recipient,
                txid: sim_types::random_tx_id(),
                amount: req.amount,
                blockheight: req.blockheight,
                timestamp: make_timestamp(req.blockheight, self.tx_height),
                message_words,
                processed: false,
                message_text: req.message_text.clone(),
                message_hex: req.message_hex.clone(),
            };
            debug!(
                txid = settled.txid,
                sender = settled.sender,
                recipient = settled.recipient,
                amount = settled.amount,
                "settled user transaction"
            );
            self.log.append(settled);
        }
    }

    /// Adds `delta` to an account balance, creating the account when absent.
    pub fn credit(&mut self, account: AccountId, delta: Amount) {
        self.accounts.credit(account, delta);
    }

    /// Returns the account, inserting one with balance 0 when absent.
    pub fn account_or_create(&mut self, id: AccountId) -> &Account {
        self.accounts.get_or_create(id)
    }

    /// Balance of an account; 0 when it does not exist. Never inserts.
    #[must_use]
    pub fn balance_of(&self, id: AccountId) -> Amount {
        self.accounts.balance_of(id)
    }

    /// First settled transaction with the given identity.
    #[must_use]
    pub fn transaction_by_id(&self, txid: TxId) -> Option<&SettledTransaction> {
        self.log.find_by_txid(txid)
    }

    /// First settled transaction to `account` after `after` with
    /// `amount >= min_amount`, restricted to strictly prior blocks.
    #[must_use]
    pub fn incoming_after(
        &self,
        after: Timestamp,
        account: AccountId,
        min_amount: Amount,
    ) -> Option<&SettledTransaction> {
        self.log
            .find_incoming_after(after, account, min_amount, self.current_block)
    }

    /// Activation scan: marks the first unprocessed transaction to
    /// `recipient` with `amount >= min_amount` as processed and returns it.
    ///
    /// This is the only mutation a settled transaction ever sees.
    pub fn consume_unprocessed_incoming(
        &mut self,
        recipient: AccountId,
        min_amount: Amount,
    ) -> Option<&SettledTransaction> {
        let tx = self.log.find_unprocessed_incoming_mut(recipient, min_amount)?;
        tx.processed = true;
        debug!(
            txid = tx.txid,
            recipient,
            amount = tx.amount,
            "incoming transaction consumed for activation"
        );
        Some(tx)
    }

    /// Settles one contract-produced transaction at the current block.
    ///
    /// Credits the recipient, bumps the intra-block counter, and appends a
    /// settled entry with both hex and text message forms derived from the
    /// fixed four-word payload. Returns the new transaction identity.
    pub fn settle_outgoing(&mut self, sender: AccountId, tx: &OutgoingTransaction) -> TxId {
        self.accounts.credit(tx.recipient, tx.amount);
        self.tx_height += 1;

        let message_hex = words_to_hex(&tx.message_words);
        let message_text = hex_to_text(&message_hex).ok();
        let txid = sim_types::random_tx_id();
        debug!(
            txid,
            sender,
            recipient = tx.recipient,
            amount = tx.amount,
            "settled contract transaction"
        );
        self.log.append(SettledTransaction {
            sender,
            recipient: tx.recipient,
            txid,
            amount: tx.amount,
            blockheight: self.current_block,
            timestamp: make_timestamp(self.current_block, self.tx_height),
            message_words: tx.message_words,
            processed: false,
            message_text,
            message_hex: Some(message_hex),
        });
        txid
    }

    /// Advances to the next block and resets the intra-block counter.
    ///
    /// Must be called exactly once per block boundary, after all transaction
    /// ingestion for the old block and before any contract's own block
    /// handling.
    pub fn forge_block(&mut self) {
        self.current_block += 1;
        self.tx_height = 0;
        debug!(block = self.current_block, "block forged");
    }
}

/// Derives the canonical word payload from a request's message fields.
fn encode_request_message(req: &UserTransaction) -> Result<MessageWords, sim_types::MessageError> {
    let hex = match (&req.message_text, &req.message_hex) {
        (Some(text), _) => text_to_hex(text)?,
        (None, Some(hex)) => hex.clone(),
        (None, None) => String::new(),
    };
    hex_to_words(&hex)
}
