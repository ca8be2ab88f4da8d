//! CLI utilities for receipt survey tools.
//!
//! This crate provides the config file and output helpers shared by CLI
//! applications.

pub mod config;
pub mod output;

pub use config::{Config, Context};
pub use output::{Output, OutputFormat, print_verbose};
