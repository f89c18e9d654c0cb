//! Carrier module: the board representation and its spatial view.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod board;
