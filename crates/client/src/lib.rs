//! HTTP access to the homework status endpoint and payload validation.
//!
//! The `StatusSource` trait is the seam between the watcher and the network:
//! production uses [`client::PracticumClient`], tests drive the watcher with
//! scripted fakes.

pub mod client;
pub mod validator;

pub use client::{PracticumClient, StatusSource};
pub use validator::validate_response;
