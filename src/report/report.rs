use crate::{
    debug_log,
    errors::errors::ErrorLog,
    lexer::{
        lexer::{Lexer, Scanned},
        tokens::{Token, TokenKind},
    },
    symbol_table::symbol_table::SymbolTable,
};

pub const TOKENS_FILE: &str = "tokens.txt";
pub const SYMBOL_TABLE_FILE: &str = "symbol_table.txt";
pub const LEXICAL_ERRORS_FILE: &str = "lexical_errors.txt";

/// Written in place of the error lines when the log is empty.
pub const NO_ERRORS: &str = "there is no lexical error.";

// separates the line number or index from the rest of a report line
const SEP: char = '\t';

/// Everything one pass over a source text produces.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub errors: ErrorLog,
}

/// Runs one pass over `source`. Identifiers are registered with a fresh
/// symbol table as they are recognized; errors are logged in scan order.
pub fn scan(source: &str) -> ScanOutput {
    let mut tokens = vec![];
    let mut symbols = SymbolTable::new();
    let mut errors = ErrorLog::new();

    for scanned in Lexer::new(source) {
        match scanned {
            Scanned::Token(token) => {
                if token.kind == TokenKind::Identifier {
                    symbols.lookup_or_insert(&token.value);
                }
                tokens.push(token);
            }
            Scanned::Error(error) => errors.record(error),
        }
    }

    debug_log!(
        "scanned {} tokens, {} symbols, {} lexical errors",
        tokens.len(),
        symbols.len(),
        errors.len()
    );

    ScanOutput {
        tokens,
        symbols,
        errors,
    }
}

impl ScanOutput {
    /// One line per source line holding at least one token.
    pub fn token_report(&self) -> String {
        let mut out = String::new();
        let mut current_line = None;

        for token in &self.tokens {
            if current_line == Some(token.line) {
                out.push(' ');
            } else {
                if current_line.is_some() {
                    out.push('\n');
                }
                out.push_str(&format!("{}.{}", token.line, SEP));
                current_line = Some(token.line);
            }
            out.push_str(&token.to_string());
        }

        if current_line.is_some() {
            out.push('\n');
        }
        out
    }

    pub fn symbol_table_report(&self) -> String {
        let mut out = String::new();
        for entry in self.symbols.iter() {
            out.push_str(&format!("{}.{}{}\n", entry.index, SEP, entry.lexeme));
        }
        out
    }

    pub fn error_report(&self) -> String {
        if self.errors.is_clean() {
            return format!("{}\n", NO_ERRORS);
        }

        let mut out = String::new();
        for error in &self.errors {
            out.push_str(&format!(
                "{}.{}({}, {})\n",
                error.get_line(),
                SEP,
                error.get_lexeme(),
                error.get_kind()
            ));
        }
        out
    }

    /// The three reports paired with the file names they are written to.
    pub fn reports(&self) -> [(&'static str, String); 3] {
        [
            (TOKENS_FILE, self.token_report()),
            (SYMBOL_TABLE_FILE, self.symbol_table_report()),
            (LEXICAL_ERRORS_FILE, self.error_report()),
        ]
    }
}
