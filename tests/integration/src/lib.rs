//! Integration test utilities for the emojivoto web server
//!
//! This crate provides helpers for running end-to-end tests against the
//! HTTP surface, backed by in-process or fake HTTP backends.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
