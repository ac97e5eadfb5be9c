//! Integration test utilities for the pindrop API
//!
//! This crate provides helpers for running end-to-end tests against
//! an in-process instance of the REST API.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
