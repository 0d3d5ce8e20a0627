//! Freqdict - word-frequency list to JSON converter
//!
//! Freqdict is a CLI tool and library for converting line-oriented word
//! frequency lists (`word frequency`, one record per line) into JSON
//! dictionary files (`[{"w": ..., "f": ...}, ...]`). Input order is
//! preserved and malformed lines are skipped with a warning.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `converter`: Single-file conversion (read, parse, write)
//! - `entry`: The word-frequency record type
//! - `issue`: Issue type definitions for skipped jobs and lines
//! - `json_writer`: Byte-exact rendering of the dictionary JSON format
//! - `parser`: Line parsing of the frequency list format
//! - `runner`: Sequential execution of the configured conversion jobs

pub mod cli;
pub mod config;
pub mod converter;
pub mod entry;
pub mod issue;
pub mod json_writer;
pub mod parser;
pub mod runner;
