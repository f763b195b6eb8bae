// entroscan/src/lib.rs
//! # entroscan CLI Application
//!
//! This crate provides the command-line front end for `entroscan-core`:
//! argument parsing, logger setup, and the scan command with its exit-code
//! policy.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::scan::run_scan;
