//! medref-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise
//! rendering and config handling without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
