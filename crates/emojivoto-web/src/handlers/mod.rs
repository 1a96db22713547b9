//! Route handlers
//!
//! All HTTP request handlers organized by surface.

pub mod api;
pub mod health;
pub mod pages;
