//! Baccarat outcome analysis and prediction library.
//!
//! This crate provides a modular prediction engine including:
//! - Parsing of raw result strings into validated outcome sequences
//! - Run-length (streak) analysis and per-outcome tallies
//! - Interchangeable prediction strategies (frequency, Markov, pattern, stochastic placeholder)
//! - Payload formatting for host-side persistence
//!
//! Only the high-level API is exposed publicly. Low-level counting
//! structures are kept internal to ensure consistency and prevent misuse.
//!
//! The engine performs no I/O and keeps no state between calls: every
//! predictor is a pure function of the sequence it is given. The only
//! nondeterminism is the explicit random source some strategies take as a
//! parameter, so a seeded generator makes every run reproducible.

/// Core outcome types, sequence analysis and prediction strategies.
///
/// This module exposes the high-level prediction interface while keeping
/// internal counting tables private.
pub mod model;

/// Payloads handed to a host-side persistence layer.
///
/// The engine formats, the host writes.
pub mod history;
