//! Error types and error handling for the scanner.
//!
//! This module defines:
//!
//! - The lexical error taxonomy and the scan-ordered error log
//! - The comment matching state machine that detects unmatched and
//!   unclosed comments
//! - Driver errors for reading the source and writing reports

pub mod comments;
pub mod errors;
