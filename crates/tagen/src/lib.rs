//! Source code tag generator.
//!
//! This build carries the extras subsystem: the catalogue of optional
//! output categories lives in `tagen-extras`, and this crate adds the
//! command-line surface for selecting categories and listing them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod select;
