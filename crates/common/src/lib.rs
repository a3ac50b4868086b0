//! Shared configuration, error types, and domain types for ReviewWatch.

pub mod config;
pub mod error;
pub mod types;
