//! # Simulator
//!
//! Owns the single shared [`Blockchain`], every deployed [`Contract`], and
//! the instruction engine, and sequences them block by block.

use sim_contract::{Contract, ContractConfig, InstructionEngine};
use sim_ledger::Blockchain;
use sim_types::{AccountId, UserTransaction};
use tracing::{debug, info};

/// The block-loop driver.
///
/// The simulator is the single owner of the ledger; contracts receive it by
/// reference per operation and never hold it.
#[derive(Debug)]
pub struct Simulator<E: InstructionEngine> {
    chain: Blockchain,
    contracts: Vec<Contract>,
    engine: E,
    pending_requests: Vec<UserTransaction>,
}

impl<E: InstructionEngine> Simulator<E> {
    /// Creates a simulator with a fresh ledger at block height 1.
    pub fn new(engine: E) -> Self {
        Self {
            chain: Blockchain::new(),
            contracts: Vec::new(),
            engine,
            pending_requests: Vec::new(),
        }
    }

    /// Read access to the shared ledger.
    #[must_use]
    pub fn chain(&self) -> &Blockchain {
        &self.chain
    }

    /// Mutable access to the shared ledger, for host-side setup such as
    /// pre-funding accounts.
    pub fn chain_mut(&mut self) -> &mut Blockchain {
        &mut self.chain
    }

    /// Mutable access to the instruction engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// All deployed contracts, in deployment order.
    #[must_use]
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Looks a contract up by id.
    #[must_use]
    pub fn contract(&self, id: AccountId) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Deploys a contract from program text and returns its id.
    ///
    /// The contract's account is registered immediately so later
    /// deployments probe past it when resolving their own ids.
    pub fn deploy_contract(&mut self, source_text: &str, config: &ContractConfig) -> AccountId {
        let contract = Contract::new(source_text, config, &self.chain, &mut self.engine);
        let id = contract.id;
        self.chain.account_or_create(id);
        self.contracts.push(contract);
        id
    }

    /// Queues user transaction requests for the next ingestion pass.
    pub fn queue_transactions(&mut self, requests: impl IntoIterator<Item = UserTransaction>) {
        self.pending_requests.extend(requests);
    }

    /// Advances the simulation by one block.
    pub fn forge_block(&mut self) {
        let requests = std::mem::take(&mut self.pending_requests);
        debug!(requests = requests.len(), "ingesting queued transactions");
        self.chain.add_transactions(&requests);

        self.chain.forge_block();
        info!(block = self.chain.current_block(), "forging block");

        for contract in &mut self.contracts {
            contract.forge_block(&mut self.chain);
        }

        for contract in &mut self.contracts {
            if contract.is_pending_execution() {
                let status = contract.run(&self.chain, &mut self.engine, &[]);
                debug!(contract = contract.id, status = %status, "contract yielded");
            }
        }

        for contract in &mut self.contracts {
            if !contract.queued_tx().is_empty() {
                debug!(
                    contract = contract.id,
                    queued = contract.queued_tx().len(),
                    "dispatching enqueued transactions"
                );
            }
            contract.dispatch_enqueued_tx(&mut self.chain);
        }
    }

    /// Runs one contract until it yields, faults, or hits a breakpoint.
    ///
    /// Debugger-style entry point for hosts driving a single contract
    /// outside [`forge_block`](Self::forge_block). `None` when the id is
    /// unknown.
    pub fn run_contract(&mut self, id: AccountId, breakpoints: &[usize]) -> Option<String> {
        let chain = &self.chain;
        let engine = &mut self.engine;
        self.contracts
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| c.run(chain, engine, breakpoints))
    }

    /// Advances one contract by exactly one instruction.
    ///
    /// `None` when the id is unknown.
    pub fn step_contract(&mut self, id: AccountId, breakpoints: &[usize]) -> Option<String> {
        let chain = &self.chain;
        let engine = &mut self.engine;
        self.contracts
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| c.step(chain, engine, breakpoints))
    }
}
