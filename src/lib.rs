//! Academy - backend for an online course academy's website and student portal
//!
//! The crate provides the in-memory data store, the JSON HTTP surface the
//! website consumes, and the `academy-server` binary that ties them together.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

// Re-export Args for the binary
pub use cli::Args;
