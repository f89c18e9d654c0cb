//! Fifteen Kernel: the pure core of the 15-puzzle solver.
//!
//! # API Surface
//!
//! - [`carrier::board`] -- the validated 4×4 board and its grid view
//! - [`operators`] -- blank slides and their move costs
//! - [`heuristic`] -- the weighted misplaced-tile (h1) and Manhattan (h2) estimates
//! - [`proof::hash`] -- domain-separated SHA-256 fingerprints
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `heuristic`, and `carrier` ← `proof`.
//!
//! One-way only. No cycles. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod heuristic;
pub mod operators;
pub mod proof;
