//! Fifteen Harness: everything around the search core.
//!
//! The harness reads boards, resolves the search policy, runs the three
//! strategies in their fixed order and renders the results. It does NOT
//! implement search logic; it delegates to `fifteen_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;
pub mod input;
pub mod policy;
pub mod report;
pub mod runner;
