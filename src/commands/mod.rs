//! Command handlers for the sigsum CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The dispatch logic lives in main.rs; the handlers are the only place a
//! library failure turns into a terminated process, via the `Result` they
//! bubble up to `main`.

pub mod config;
pub mod export;
pub mod summarize;
