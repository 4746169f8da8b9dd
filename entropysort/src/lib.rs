// entropysort/src/lib.rs
//! # entropysort CLI Application
//!
//! This crate provides the command-line interface for `entropysort-core`:
//! argument parsing, logger setup and the command runner that wires stdin,
//! stdout or files into the sorting pipeline.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::sort::{run_sort, SortOptions};
