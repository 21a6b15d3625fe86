// rangecut/src/lib.rs
//! # rangecut CLI Application
//!
//! Command-line front end for the `rangecut-core` removal engine: argument
//! parsing, command handlers, themed terminal output and logging setup.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
