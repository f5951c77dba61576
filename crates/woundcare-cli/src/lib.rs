//! woundcare-cli
//!
//! Command-line front end: loads config, decodes the photo, runs the
//! pipeline, appends history and prints the result.

pub mod cli;
pub mod commands;
pub mod config;
