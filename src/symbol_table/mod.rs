//! Symbol table for the scanner.
//!
//! Keywords are seeded before scanning; identifiers are appended on first
//! sighting and never removed or reindexed.

pub mod symbol_table;
