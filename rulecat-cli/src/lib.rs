//! Library side of the `rulecat` binary: config file handling, fixer listings and data output.

pub mod config;
pub mod explain;
pub mod output;
