//! # Scripted Engine
//!
//! In-memory instruction engine for testing. Production hosts plug a real
//! interpreter in behind the same port; tests script a fixed sequence of
//! step effects instead, so lifecycle behavior can be exercised without any
//! opcode semantics.

use crate::domain::contract::Contract;
use crate::ports::engine::{InstructionEngine, StepOutcome};
use sim_types::{BlockHeight, OutgoingTransaction};
use std::collections::VecDeque;

/// One scripted effect, applied per `step` call.
#[derive(Debug, Clone)]
pub enum ScriptedStep {
    /// Complete one instruction and move the pointer to the next
    /// executable line.
    Advance,
    /// Complete one instruction, jumping the pointer to the given line.
    AdvanceTo(usize),
    /// Internal micro-step; no instruction boundary yet.
    Pending,
    /// Complete one instruction that queues an outgoing transaction.
    EnqueueTx(OutgoingTransaction),
    /// Complete one instruction that puts the contract to sleep until the
    /// given block.
    Sleep(BlockHeight),
    /// Complete one instruction that stops the contract.
    Stop,
    /// Complete one instruction that finishes the program for this round.
    Finish,
    /// Complete one instruction that freezes the contract.
    Freeze,
    /// Report an unrecoverable fault.
    Fault,
}

/// Replays a scripted sequence of step effects.
///
/// When the script is exhausted, further steps report [`StepOutcome::Fault`]
/// like an interpreter falling off the end of a program.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    steps: VecDeque<ScriptedStep>,
    deploys: usize,
}

impl ScriptedEngine {
    /// Creates an engine with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that will replay `steps` in order.
    #[must_use]
    pub fn with_steps(steps: Vec<ScriptedStep>) -> Self {
        Self {
            steps: steps.into(),
            deploys: 0,
        }
    }

    /// Appends one effect to the script.
    pub fn push(&mut self, step: ScriptedStep) -> &mut Self {
        self.steps.push_back(step);
        self
    }

    /// How many times the deploy hook ran.
    #[must_use]
    pub fn deploy_count(&self) -> usize {
        self.deploys
    }

    /// True once the whole script has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.steps.is_empty()
    }
}

impl InstructionEngine for ScriptedEngine {
    fn deploy(&mut self, contract: &mut Contract) {
        self.deploys += 1;
        let first = contract.source().next_instruction_line(0);
        contract.instruction_pointer = Some(first);
    }

    fn step(&mut self, contract: &mut Contract) -> StepOutcome {
        let Some(step) = self.steps.pop_front() else {
            return StepOutcome::Fault;
        };
        match step {
            ScriptedStep::Advance => {
                contract.instruction_pointer = Some(contract.next_instruction_line());
                StepOutcome::Boundary
            }
            ScriptedStep::AdvanceTo(line) => {
                contract.instruction_pointer = Some(line);
                StepOutcome::Boundary
            }
            ScriptedStep::Pending => StepOutcome::Pending,
            ScriptedStep::EnqueueTx(tx) => {
                contract.enqueue_tx(tx);
                contract.instruction_pointer = Some(contract.next_instruction_line());
                StepOutcome::Boundary
            }
            ScriptedStep::Sleep(until) => {
                contract.sleep_until(until);
                contract.instruction_pointer = Some(contract.next_instruction_line());
                StepOutcome::Boundary
            }
            ScriptedStep::Stop => {
                contract.stop();
                StepOutcome::Boundary
            }
            ScriptedStep::Finish => {
                contract.finish();
                StepOutcome::Boundary
            }
            ScriptedStep::Freeze => {
                contract.freeze();
                StepOutcome::Boundary
            }
            ScriptedStep::Fault => StepOutcome::Fault,
        }
    }
}
