//! # Contract Entity
//!
//! The execution unit: identity, lifecycle state, execution context, and
//! the outgoing-message queue. A contract never owns the ledger; the driver
//! lends the shared [`Blockchain`] into each operation.

use crate::domain::config::ContractConfig;
use crate::domain::source::AsmSource;
use crate::domain::state::ExecState;
use crate::ports::engine::{InstructionEngine, StepOutcome};
use serde::{Deserialize, Serialize};
use sim_ledger::Blockchain;
use sim_types::{AccountId, Amount, BlockHeight, OutgoingTransaction};
use tracing::{debug, warn};

/// Diagnostic recorded when the engine reports an unrecoverable fault.
pub const FAULT_DIAGNOSTIC: &str = "unknown instruction or end of file reached";

const STATUS_SLEEPING: &str = "Contract sleeping!";
const STATUS_DONE: &str = "Contract execution done on this round";
const STATUS_RUN_END: &str = "Run end. Check status. Forge new block to continue.";

/// One named data memory cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCell {
    /// Variable name declared in the program.
    pub name: String,
    /// Current 64-bit value.
    pub value: u64,
}

/// A deployed contract.
#[derive(Debug)]
pub struct Contract {
    /// Account that deployed the contract.
    pub creator: AccountId,
    /// Contract identity, collision free within the shared account
    /// namespace.
    pub id: AccountId,
    /// Block the contract was constructed at.
    pub creation_block: BlockHeight,
    /// Minimum credited amount that (re)activates the contract.
    pub activation_amount: Amount,
    /// Balance observed at the previous activation; maintained by the
    /// engine.
    pub previous_balance: Amount,
    /// Current instruction line. `None` marks an unset pointer, which gates
    /// execution.
    pub instruction_pointer: Option<usize>,
    /// Register file A.
    pub a: [u64; 4],
    /// Register file B.
    pub b: [u64; 4],
    /// Named data memory, populated by the engine's deploy hook.
    pub memory: Vec<MemoryCell>,
    /// Value stack.
    pub user_stack: Vec<u64>,
    /// Control-flow stack.
    pub code_stack: Vec<usize>,
    /// Data memory size, in pages.
    pub data_pages: u32,
    /// Value stack size, in pages.
    pub user_stack_pages: u32,
    /// Control-flow stack size, in pages.
    pub code_stack_pages: u32,
    /// Diagnostic text for the last fault, empty when none occurred.
    pub exception: String,
    /// Error code exposed to the program, when one is set.
    pub err_code: Option<i64>,
    state: ExecState,
    source: AsmSource,
    queued_tx: Vec<OutgoingTransaction>,
}

impl Contract {
    /// Constructs a contract from program text and invokes the engine's
    /// deploy hook exactly once.
    ///
    /// The contract id starts at `config.base_contract_id` and probes the
    /// account namespace upward until it is collision free.
    pub fn new<E: InstructionEngine + ?Sized>(
        source_text: &str,
        config: &ContractConfig,
        chain: &Blockchain,
        engine: &mut E,
    ) -> Self {
        let mut contract = Self {
            creator: config.creator,
            id: config.base_contract_id,
            creation_block: chain.current_block(),
            activation_amount: config.activation_amount,
            previous_balance: 0,
            instruction_pointer: Some(0),
            a: [0; 4],
            b: [0; 4],
            memory: Vec::new(),
            user_stack: Vec::new(),
            code_stack: Vec::new(),
            data_pages: config.data_pages,
            user_stack_pages: config.user_stack_pages,
            code_stack_pages: config.code_stack_pages,
            exception: String::new(),
            err_code: None,
            state: ExecState::Active,
            source: AsmSource::new(source_text),
            queued_tx: Vec::new(),
        };
        engine.deploy(&mut contract);
        while chain.accounts().contains(contract.id) {
            contract.id += 1;
        }
        debug!(
            contract = contract.id,
            creator = contract.creator,
            block = contract.creation_block,
            "contract deployed"
        );
        contract
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ExecState {
        self.state
    }

    /// The contract's program.
    #[must_use]
    pub fn source(&self) -> &AsmSource {
        &self.source
    }

    /// Transactions queued during this block's execution.
    #[must_use]
    pub fn queued_tx(&self) -> &[OutgoingTransaction] {
        &self.queued_tx
    }

    /// Queues an outgoing transaction until the block-end flush.
    pub fn enqueue_tx(&mut self, tx: OutgoingTransaction) {
        self.queued_tx.push(tx);
    }

    /// Reactivates the contract. Has no effect on a dead contract.
    pub fn reactivate(&mut self) {
        if !self.state.is_dead() {
            self.state = ExecState::Active;
        }
    }

    /// Puts the contract to sleep until the given block.
    pub fn sleep_until(&mut self, until: BlockHeight) {
        if !self.state.is_dead() {
            self.state = ExecState::Sleeping { until };
        }
    }

    /// Pauses the contract until the next qualifying activation.
    pub fn stop(&mut self) {
        if !self.state.is_dead() {
            self.state = ExecState::Stopped;
        }
    }

    /// Marks the program as finished for this round.
    pub fn finish(&mut self) {
        if !self.state.is_dead() {
            self.state = ExecState::Finished;
        }
    }

    /// Freezes the contract, excluding it from pending execution.
    pub fn freeze(&mut self) {
        if !self.state.is_dead() {
            self.state = ExecState::Frozen;
        }
    }

    /// Whether the driver should execute this contract in the current
    /// block.
    #[must_use]
    pub fn is_pending_execution(&self) -> bool {
        self.state.is_active()
    }

    /// Pure gate called before any execution step.
    ///
    /// Returns a human-readable status when the contract must not execute,
    /// `None` when it is clear to run.
    #[must_use]
    pub fn check_state(&self, current_block: BlockHeight) -> Option<String> {
        match self.state {
            ExecState::Sleeping { until } if until > current_block => {
                Some(STATUS_SLEEPING.to_string())
            }
            ExecState::Sleeping { .. }
            | ExecState::Dead
            | ExecState::Stopped
            | ExecState::Frozen
            | ExecState::Finished => Some(STATUS_DONE.to_string()),
            ExecState::Active if self.instruction_pointer.is_none() => {
                Some(STATUS_DONE.to_string())
            }
            ExecState::Active => None,
        }
    }

    /// Runs instructions until the contract yields, faults, or hits a
    /// breakpoint line.
    pub fn run<E: InstructionEngine + ?Sized>(
        &mut self,
        chain: &Blockchain,
        engine: &mut E,
        breakpoints: &[usize],
    ) -> String {
        if let Some(status) = self.check_state(chain.current_block()) {
            return status;
        }
        loop {
            if engine.step(self) == StepOutcome::Fault {
                return self.fault();
            }
            if let Some(bp) = self.hit_breakpoint(breakpoints) {
                return format!("Stopped on breakpoint {bp}.");
            }
            if !self.state.is_active() {
                return STATUS_RUN_END.to_string();
            }
        }
    }

    /// Advances exactly one externally visible instruction.
    ///
    /// Internal micro-steps (engine reports more work pending) are driven
    /// to completion before the breakpoint check. Returns an empty string
    /// on plain success.
    pub fn step<E: InstructionEngine + ?Sized>(
        &mut self,
        chain: &Blockchain,
        engine: &mut E,
        breakpoints: &[usize],
    ) -> String {
        if let Some(status) = self.check_state(chain.current_block()) {
            return status;
        }
        loop {
            match engine.step(self) {
                StepOutcome::Pending => {}
                StepOutcome::Fault => return self.fault(),
                StepOutcome::Boundary => break,
            }
        }
        if let Some(bp) = self.hit_breakpoint(breakpoints) {
            return format!("Reached breakpoint {bp}.");
        }
        String::new()
    }

    /// Block-boundary handling: sleep expiry and activation.
    ///
    /// Called once per block for every contract, after the ledger's own
    /// block advancement. A qualifying unprocessed incoming transaction is
    /// consumed (marked processed) even when the contract is dead;
    /// reactivation simply has no effect then.
    pub fn forge_block(&mut self, chain: &mut Blockchain) {
        if let ExecState::Sleeping { until } = self.state {
            if until > chain.current_block() {
                return;
            }
            if until == chain.current_block() {
                debug!(contract = self.id, "sleep expired, reactivating");
                self.reactivate();
                return;
            }
            // Sleep expired on an earlier block without reactivation; fall
            // through to the activation scan.
        }

        if chain
            .consume_unprocessed_incoming(self.id, self.activation_amount)
            .is_some()
        {
            debug!(contract = self.id, "activated by incoming transaction");
            self.reactivate();
            return;
        }
        if self.activation_amount == 0 {
            // Zero-activation contracts never stop.
            self.reactivate();
        }
    }

    /// Flushes the outgoing queue into the ledger.
    ///
    /// Must run after all contracts finished executing for the block and
    /// before the next block's forging, so contract effects become visible
    /// starting next block. Clears the queue.
    pub fn dispatch_enqueued_tx(&mut self, chain: &mut Blockchain) {
        for tx in self.queued_tx.drain(..) {
            chain.settle_outgoing(self.id, &tx);
        }
    }

    /// Index of the first executable line after the current instruction.
    ///
    /// With an unset pointer this reports end-of-program, which faults the
    /// contract on its next execution attempt.
    #[must_use]
    pub fn next_instruction_line(&self) -> usize {
        match self.instruction_pointer {
            Some(ip) => self.source.next_instruction_line(ip + 1),
            None => self.source.len(),
        }
    }

    fn fault(&mut self) -> String {
        self.state = ExecState::Dead;
        self.exception = FAULT_DIAGNOSTIC.to_string();
        warn!(contract = self.id, "execution fault: {FAULT_DIAGNOSTIC}");
        format!("ERROR: {FAULT_DIAGNOSTIC}")
    }

    fn hit_breakpoint(&self, breakpoints: &[usize]) -> Option<usize> {
        breakpoints
            .iter()
            .copied()
            .find(|&bp| self.instruction_pointer == Some(bp))
    }
}
