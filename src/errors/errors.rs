use std::{io, path::PathBuf};

use thiserror::Error;

/// Longest prefix of an offending lexeme kept in the error log.
pub const LEXEME_PREFIX_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    internal_error: ErrorImpl,
    lexeme: String,
    line: u32,
}

impl LexicalError {
    pub fn new(error_impl: ErrorImpl, lexeme: &str, line: u32) -> Self {
        LexicalError {
            internal_error: error_impl,
            lexeme: lexeme.chars().take(LEXEME_PREFIX_LEN).collect(),
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn get_kind(&self) -> ErrorImpl {
        self.internal_error
    }
}

/// Error kinds. The display text is the message written to the error report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorImpl {
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Invalid input")]
    InvalidInput,
    #[error("Unmatched comment")]
    UnmatchedComment,
    #[error("Unclosed comment")]
    UnclosedComment,
}

/// Lexical errors in scan order. Scanning is left to right, so the log is
/// line-ascending without sorting.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    errors: Vec<LexicalError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        ErrorLog { errors: vec![] }
    }

    pub fn record(&mut self, error: LexicalError) {
        self.errors.push(error);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexicalError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a LexicalError;
    type IntoIter = std::slice::Iter<'a, LexicalError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Failures of the driver around a scan. The scan itself never fails.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("{} not found; please place your C-minus code there.", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
