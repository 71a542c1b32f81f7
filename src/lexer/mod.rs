//! Lexical analysis module for the scanner.
//!
//! This module contains the lexer (tokenizer) that converts C-minus source
//! into a lazy stream of tokens and malformed lexemes. It handles:
//!
//! - Character classification with one character of lookahead
//! - Recognition of keywords, identifiers, numbers and symbols
//! - Comment skipping with unmatched and unclosed comment detection
//! - Line tracking for every token and error

pub mod classifier;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
