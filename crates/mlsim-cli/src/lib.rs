//! Library components of the `mlsim` command-line tool.

pub mod config;
pub mod logging;
pub mod render;
