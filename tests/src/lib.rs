//! # Chain-Sim Test Suite
//!
//! Unified test crate containing the cross-crate integration scenarios:
//! full block loops through the [`sim_runtime::Simulator`], contract
//! activation by funding, next-block visibility of dispatched messages,
//! and fault isolation.
//!
//! ## Running Tests
//!
//! ```bash
//! # All scenarios
//! cargo test -p sim-tests
//!
//! # By category
//! cargo test -p sim-tests integration::block_loop::
//! cargo test -p sim-tests integration::lifecycle::
//! ```
//!
//! Per-crate unit tests live next to the code they cover; only scenarios
//! spanning multiple crates belong here.

#![allow(dead_code)]

pub mod integration;
