use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::{
        comments::{CommentEvent, CommentState},
        errors::{ErrorImpl, LexicalError},
    },
    MK_TOKEN,
};

use super::{
    classifier::{classify, CharClass},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

lazy_static! {
    static ref WORD: Regex = Regex::new("^[A-Za-z][A-Za-z0-9]*").unwrap();
    static ref FUSED_NUMBER: Regex = Regex::new("^[0-9]+[A-Za-z][A-Za-z0-9]*").unwrap();
    static ref NUMBER: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new("^[ \t\r\n]+").unwrap();
}

/// One unit produced by the scan: a token or a malformed lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned {
    Token(Token),
    Error(LexicalError),
}

pub type Handler = fn(&mut Lexer, CharClass) -> Option<Scanned>;

/// A single left-to-right pass over one source text. The lexer owns all
/// scan state and is consumed as an iterator; scanning the same text again
/// needs a new lexer.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    comment: CommentState,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            comment: CommentState::Normal,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advances over `text`, counting the line feeds it contains.
    fn consume(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
        self.advance_n(text.len());
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn comment_event(&mut self, event: CommentEvent, lexeme: &str) -> Option<Scanned> {
        let (next, error) = self.comment.on(event, self.line);
        self.comment = next;
        error.map(|(kind, line)| Scanned::Error(LexicalError::new(kind, lexeme, line)))
    }
}

fn handler_for(class: CharClass) -> Handler {
    match class {
        CharClass::Whitespace => skip_handler,
        CharClass::CommentOpen => comment_handler,
        CharClass::CommentClose => unmatched_comment_handler,
        CharClass::Letter => word_handler,
        CharClass::Digit => number_handler,
        CharClass::Symbol(_) => symbol_handler,
        CharClass::Other(_) => invalid_input_handler,
        CharClass::Eof => eof_handler,
    }
}

fn skip_handler(lexer: &mut Lexer, _class: CharClass) -> Option<Scanned> {
    let matched = WHITESPACE.find(lexer.remainder())?.as_str();
    lexer.consume(matched);
    None
}

fn comment_handler(lexer: &mut Lexer, _class: CharClass) -> Option<Scanned> {
    let rest = lexer.remainder();
    lexer.comment_event(CommentEvent::Open, "/*");

    match rest[2..].find("*/") {
        Some(end) => {
            lexer.consume(&rest[..end + 4]);
            lexer.comment_event(CommentEvent::Close, "*/")
        }
        None => {
            lexer.consume(rest);
            lexer.comment_event(CommentEvent::Eof, "/*")
        }
    }
}

fn unmatched_comment_handler(lexer: &mut Lexer, _class: CharClass) -> Option<Scanned> {
    let error = lexer.comment_event(CommentEvent::Close, "*/");
    lexer.advance_n(2);
    error
}

fn word_handler(lexer: &mut Lexer, _class: CharClass) -> Option<Scanned> {
    let value = WORD.find(lexer.remainder())?.as_str();

    let kind = if RESERVED_LOOKUP.contains_key(value) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let token = MK_TOKEN!(kind, String::from(value), lexer.line);
    lexer.advance_n(value.len());
    Some(Scanned::Token(token))
}

fn number_handler(lexer: &mut Lexer, _class: CharClass) -> Option<Scanned> {
    let rest = lexer.remainder();

    if let Some(fused) = FUSED_NUMBER.find(rest) {
        let error = LexicalError::new(ErrorImpl::InvalidNumber, fused.as_str(), lexer.line);
        lexer.advance_n(fused.len());
        return Some(Scanned::Error(error));
    }

    let matched = NUMBER.find(rest)?.as_str();
    let token = MK_TOKEN!(TokenKind::Number, String::from(matched), lexer.line);
    lexer.advance_n(matched.len());
    Some(Scanned::Token(token))
}

fn symbol_handler(lexer: &mut Lexer, class: CharClass) -> Option<Scanned> {
    let CharClass::Symbol(spelling) = class else {
        return None;
    };

    let token = MK_TOKEN!(TokenKind::Symbol, String::from(spelling), lexer.line);
    lexer.advance_n(spelling.len());
    Some(Scanned::Token(token))
}

fn invalid_input_handler(lexer: &mut Lexer, class: CharClass) -> Option<Scanned> {
    let CharClass::Other(c) = class else {
        return None;
    };

    let error = LexicalError::new(ErrorImpl::InvalidInput, &c.to_string(), lexer.line);
    lexer.advance_n(c.len_utf8());
    Some(Scanned::Error(error))
}

fn eof_handler(lexer: &mut Lexer, _class: CharClass) -> Option<Scanned> {
    lexer.comment_event(CommentEvent::Eof, "")
}

impl Iterator for Lexer<'_> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Scanned> {
        while !self.comment.is_terminal() {
            let class = classify(self.remainder());
            if let Some(scanned) = handler_for(class)(self, class) {
                return Some(scanned);
            }
        }

        None
    }
}
