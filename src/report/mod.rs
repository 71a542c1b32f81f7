//! Report building for the scanner.
//!
//! This module drives one scan pass and renders its results as the token,
//! symbol table and lexical error reports. It also defines the read-source
//! and write-report interface used by the command line driver.

pub mod io;
pub mod report;
