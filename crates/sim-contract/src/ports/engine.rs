//! # Instruction Engine Port
//!
//! The execution engine interprets a contract's program counter by counter.
//! Its opcode semantics, arithmetic model, and register manipulation are
//! outside this crate; the lifecycle consumes it through exactly two calls:
//! a one-time deploy hook and a step-one-instruction call.
//!
//! The port is synchronous. Execution is single-threaded and cooperative;
//! a step never suspends on I/O.

use crate::domain::contract::Contract;

/// Result of asking the engine to advance one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More internal work pending before an instruction boundary.
    Pending,
    /// One instruction completed.
    Boundary,
    /// Unrecoverable: unknown instruction or end of program. The contract
    /// transitions to dead.
    Fault,
}

/// Interface to the external instruction execution engine.
pub trait InstructionEngine {
    /// One-time initialization of the execution context, invoked at
    /// contract construction with the new contract as context.
    fn deploy(&mut self, contract: &mut Contract);

    /// Performs (part of) one instruction against the contract's state.
    ///
    /// The engine may mutate registers, stacks, memory, the instruction
    /// pointer, the outgoing queue, and the lifecycle state (sleep, stop,
    /// finish, freeze).
    fn step(&mut self, contract: &mut Contract) -> StepOutcome;
}
