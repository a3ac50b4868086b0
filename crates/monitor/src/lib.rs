//! The poll-loop orchestrator.

pub mod watcher;

pub use watcher::{CycleOutcome, LoopState, Watcher};
