use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Reserved words in canonical order. Their position here is their
/// permanent symbol table index minus one.
pub const KEYWORDS: [&str; 8] = [
    "break", "else", "if", "int", "repeat", "return", "until", "void",
];

/// Every fixed symbol spelling, two-character spellings first.
pub const SYMBOLS: [&str; 13] = [
    "==", ";", ":", ",", "(", ")", "{", "}", "+", "-", "*", "=", "<",
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, usize> = {
        let mut map = HashMap::new();
        for (i, keyword) in KEYWORDS.iter().enumerate() {
            map.insert(*keyword, i + 1);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Symbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "KEYWORD"),
            TokenKind::Identifier => write!(f, "ID"),
            TokenKind::Number => write!(f, "NUM"),
            TokenKind::Symbol => write!(f, "SYMBOL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.value)
    }
}

impl Token {
    /// Keyword tokens resolve to their reserved index without a table write.
    pub fn reserved_index(&self) -> Option<usize> {
        if self.kind == TokenKind::Keyword {
            RESERVED_LOOKUP.get(self.value.as_str()).copied()
        } else {
            None
        }
    }
}
