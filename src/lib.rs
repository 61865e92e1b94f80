//! illink-repro: Turn a recorded ILLink invocation into a portable repro
//!
//! Reads a structured build log, picks one linker invocation, copies every file
//! and directory it references into a local `input/` directory and writes a
//! response file that only uses relative paths.

pub mod buildlog;
pub mod cli;
pub mod command_line;
pub mod config;
pub mod domain;
pub mod error;
pub mod repro;
pub mod select;
pub mod utils;
