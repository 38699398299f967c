//! Top-level module for the outcome prediction system.
//!
//! This module provides the full analysis pipeline, including:
//! - The outcome alphabet and sequence parsing (`outcome`)
//! - Run-length analysis (`streak`)
//! - Four prediction strategies (`frequency`, `markov`, `pattern`, `stochastic`)
//! - Internal occurrence counting (`counts`)
//! - A high-level dispatch interface (`predictor`)

/// The outcome alphabet, token parsing and sequence validation.
///
/// Exposes the `Outcome` enum, the raw-input parser and the
/// "input present but invalid" detection helper.
pub mod outcome;

/// Run-length analysis of outcome sequences.
///
/// Encodes a sequence into maximal runs of identical outcomes and
/// computes per-outcome totals.
pub mod streak;

/// Recency-frequency prediction strategy.
///
/// Majority vote over a trailing window, with a uniform random draw
/// when the vote is tied.
pub mod frequency;

/// First-order Markov prediction strategy.
///
/// Counts adjacent-pair transitions over the whole sequence and follows
/// the row of the final outcome.
pub mod markov;

/// Fixed-window pattern prediction strategy.
///
/// Slides a window across the sequence, records what followed each
/// window, and looks up the trailing window.
pub mod pattern;

/// Stochastic placeholder strategy.
///
/// A weighted random stand-in for an advanced model that was never
/// built. Draws from a fixed categorical distribution.
pub mod stochastic;

/// Internal per-outcome occurrence counting.
///
/// Backs the transition rows, pattern rows and window tallies.
/// This module is not exposed publicly.
mod counts;

/// Strategy selection and prediction dispatch.
///
/// Exposes the `Strategy` selector, the `Prediction` result type,
/// validated prediction settings and the single dispatch entry point.
pub mod predictor;
