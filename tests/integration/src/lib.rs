//! Integration test utilities for the attendance engine
//!
//! This crate provides helpers for driving the full service stack
//! against an in-process document store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
