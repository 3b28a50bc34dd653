//! Construction-time constants for new contracts.

use serde::Deserialize;
use sim_types::{AccountId, Amount};

/// Configuration a contract is built with.
///
/// The contract id actually assigned starts at `base_contract_id` and is
/// probed upward until it does not collide with an existing account, since
/// accounts and contracts share one identity namespace.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Account that deployed the contract.
    pub creator: AccountId,
    /// First candidate contract id.
    pub base_contract_id: AccountId,
    /// Minimum credited amount that (re)activates the contract.
    /// Zero means the contract runs every block regardless of funding.
    pub activation_amount: Amount,
    /// Data memory area size, in pages.
    pub data_pages: u32,
    /// Value stack size, in pages.
    pub user_stack_pages: u32,
    /// Control-flow stack size, in pages.
    pub code_stack_pages: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            creator: 555,
            base_contract_id: 999,
            activation_amount: 10,
            data_pages: 1,
            user_stack_pages: 1,
            code_stack_pages: 1,
        }
    }
}
