//! Proof module: canonical hashing with typed domain separation.
//!
//! Depends on nothing internal; callers hash raw bytes (e.g. `Board::as_bytes`).

pub mod hash;
pub mod hash_domain;
