//! Library target for the `repo-badge-cli` package.
//!
//! The deliverable is the `repo-badge` binary (`src/main.rs`). The run itself
//! lives here so integration tests can drive it without spawning a process.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
