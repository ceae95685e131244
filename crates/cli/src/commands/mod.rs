// Path: crates/cli/src/commands/mod.rs

pub mod action;
pub mod config;
pub mod console;
pub mod status;
