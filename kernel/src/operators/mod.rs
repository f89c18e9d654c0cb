//! Operators: blank slides over a [`Board`](crate::carrier::board::Board) and their costs.

pub mod cost;
pub mod slide;
