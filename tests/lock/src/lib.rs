//! Shared helpers for the lock tests and the `solve_fixture` binary.

#![forbid(unsafe_code)]
