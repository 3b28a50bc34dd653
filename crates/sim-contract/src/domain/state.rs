//! # Execution State
//!
//! One tagged state instead of independent boolean flags, so illegal
//! combinations (dead-and-running, sleeping-and-finished) are
//! unrepresentable.

use serde::{Deserialize, Serialize};
use sim_types::BlockHeight;

/// Lifecycle state of a contract.
///
/// `Dead` is absorbing: no transition leaves it, including block-boundary
/// reactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecState {
    /// Clear to execute.
    Active,
    /// Paused until reactivated by an incoming transaction.
    Stopped,
    /// Paused; excluded from pending-execution selection until reactivated.
    Frozen,
    /// Program ran to completion this round; reactivation restarts it.
    Finished,
    /// Unrecoverable fault. Permanent.
    Dead,
    /// Refusing progress until `until` is reached.
    Sleeping {
        /// Block at which the sleep expires.
        until: BlockHeight,
    },
}

impl ExecState {
    /// True for the absorbing `Dead` state.
    #[must_use]
    pub fn is_dead(self) -> bool {
        matches!(self, Self::Dead)
    }

    /// True when the contract may execute right now.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
