//! # Cryptogram Solver
//!
//! Library support for solving monoalphabetic substitution cryptograms. The
//! modules mirror the solve pipeline: [`pattern`] encodes words as shape
//! codes, [`dictionary`] finds the candidate words that share a ciphertext
//! word's shape, [`key`] tracks partial letter substitutions, and [`solver`]
//! backtracks through the candidate combinations to collect every consistent
//! key. The [`shift`] module houses the companion Vigenère shift cipher,
//! which shares the CLI but none of the search machinery.

pub mod dictionary;
pub mod key;
pub mod pattern;
pub mod shift;
pub mod solver;
