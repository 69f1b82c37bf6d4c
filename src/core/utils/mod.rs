//! Utility functions shared by the scanner.
//!
//! - `glob_matcher`: glob-to-regex translation for source file selection

pub mod glob_matcher;

pub use glob_matcher::*;
