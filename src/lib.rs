//! `firoq`: a first-in, random-out queue.
//!
//! The queue supports amortized O(1) insertion, removal of a uniformly
//! random element, non-destructive sampling, and iteration in a fresh
//! random permutation on every traversal. The `subset` module carries the
//! small line-copying companion used by the CLI.

pub mod cmd;
pub mod queue;
mod selector;
pub mod subset;

pub use queue::RandomizedQueue;
