//! Fifteen Search: deterministic best-first search over 15-puzzle boards.
//!
//! This crate provides the search layer. It depends only on
//! `fifteen_kernel`; it does NOT depend on `fifteen_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! fifteen_kernel  ←  fifteen_search  ←  fifteen_harness
//! (board, costs)      (frontier, nodes)   (input, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): immutable node with `g`, `h1`, `h2`, depth and parent link
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier): min-heap on `(priority, node_id)`
//! - [`ExploredSet`](explored::ExploredSet): expanded nodes indexed by id
//! - [`Strategy`](strategy::Strategy): BFS, A*-h1 or A*-h2 priority selection
//! - [`SearchPolicy`](policy::SearchPolicy): expansion budget and dedup configuration
//! - [`SearchProblem`](contract::SearchProblem): goal test + successor generation

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod expand;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod strategy;
