use super::tokens::SYMBOLS;

/// Category of the character(s) at the scan position.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Letter,
    Digit,
    Symbol(&'static str),
    Whitespace,
    CommentOpen,
    CommentClose,
    Other(char),
    Eof,
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Classifies the head of `remainder` using at most one character of
/// lookahead. Comment delimiters win over the `*` symbol and `==` wins
/// over `=`.
pub fn classify(remainder: &str) -> CharClass {
    let mut chars = remainder.chars();
    let Some(first) = chars.next() else {
        return CharClass::Eof;
    };
    let next = chars.next();

    match (first, next) {
        ('/', Some('*')) => return CharClass::CommentOpen,
        ('*', Some('/')) => return CharClass::CommentClose,
        _ => {}
    }

    if is_letter(first) {
        CharClass::Letter
    } else if is_digit(first) {
        CharClass::Digit
    } else if is_whitespace(first) {
        CharClass::Whitespace
    } else if let Some(spelling) = SYMBOLS.iter().find(|s| remainder.starts_with(**s)) {
        CharClass::Symbol(*spelling)
    } else {
        CharClass::Other(first)
    }
}
