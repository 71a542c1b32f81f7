//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Character classification and lookahead
//! - Keywords and identifiers
//! - Numbers and malformed numbers
//! - Symbols and maximal munch
//! - Comments, line tracking and error cases

use crate::errors::errors::ErrorImpl;

use super::{
    classifier::{classify, CharClass},
    lexer::{Lexer, Scanned},
    tokens::{Token, TokenKind},
};

fn scan(source: &str) -> Vec<Scanned> {
    Lexer::new(source).collect()
}

fn tokens(source: &str) -> Vec<Token> {
    scan(source)
        .into_iter()
        .filter_map(|s| match s {
            Scanned::Token(token) => Some(token),
            Scanned::Error(_) => None,
        })
        .collect()
}

fn errors(source: &str) -> Vec<(ErrorImpl, String, u32)> {
    scan(source)
        .into_iter()
        .filter_map(|s| match s {
            Scanned::Error(e) => Some((e.get_kind(), e.get_lexeme().to_string(), e.get_line())),
            Scanned::Token(_) => None,
        })
        .collect()
}

#[test]
fn test_classify() {
    assert_eq!(classify("abc"), CharClass::Letter);
    assert_eq!(classify("9"), CharClass::Digit);
    assert_eq!(classify("\n"), CharClass::Whitespace);
    assert_eq!(classify("/* x"), CharClass::CommentOpen);
    assert_eq!(classify("*/"), CharClass::CommentClose);
    assert_eq!(classify("*"), CharClass::Symbol("*"));
    assert_eq!(classify("== 1"), CharClass::Symbol("=="));
    assert_eq!(classify("=1"), CharClass::Symbol("="));
    assert_eq!(classify("/"), CharClass::Other('/'));
    assert_eq!(classify("_a"), CharClass::Other('_'));
    assert_eq!(classify(""), CharClass::Eof);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokens("break else if int repeat return until void");

    assert_eq!(tokens.len(), 8);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Keyword);
    }
    assert_eq!(tokens[0].value, "break");
    assert_eq!(tokens[7].value, "void");
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokens("iff integer voids If");

    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "iff");
    assert_eq!(tokens[3].value, "If");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokens("foo bar2 x1y2");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar2");
    assert_eq!(tokens[2].value, "x1y2");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokens("42 0 007");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
}

#[test]
fn test_invalid_number() {
    let scanned = scan("123abc");

    assert_eq!(scanned.len(), 1);
    assert_eq!(
        errors("123abc"),
        vec![(ErrorImpl::InvalidNumber, "123".to_string(), 1)]
    );
}

#[test]
fn test_invalid_number_spans_trailing_digits() {
    let scanned = scan("12ab3;");

    assert_eq!(scanned.len(), 2);
    assert_eq!(
        errors("12ab3;"),
        vec![(ErrorImpl::InvalidNumber, "12a".to_string(), 1)]
    );
    assert_eq!(tokens("12ab3;")[0].value, ";");
}

#[test]
fn test_tokenize_symbols() {
    let tokens = tokens("; : , ( ) { } + - * = < ==");

    assert_eq!(tokens.len(), 13);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Symbol);
    }
    assert_eq!(tokens[12].value, "==");
}

#[test]
fn test_double_equals_is_one_symbol() {
    let tokens = tokens("==");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "==");
}

#[test]
fn test_triple_equals_munches_locally() {
    let values: Vec<String> = tokens("===").into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["==", "="]);
}

#[test]
fn test_symbols_need_no_separator() {
    let values: Vec<String> = tokens("a=b+1;").into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["a", "=", "b", "+", "1", ";"]);
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        errors("x = #;"),
        vec![(ErrorImpl::InvalidInput, "#".to_string(), 1)]
    );

    let values: Vec<String> = tokens("x = #;").into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["x", "=", ";"]);
}

#[test]
fn test_each_invalid_character_is_reported() {
    let errors = errors("@$ [ ] / _");
    let lexemes: Vec<&str> = errors.iter().map(|(_, l, _)| l.as_str()).collect();

    assert_eq!(lexemes, vec!["@", "$", "[", "]", "/", "_"]);
    assert!(errors.iter().all(|(k, _, _)| *k == ErrorImpl::InvalidInput));
}

#[test]
fn test_non_ascii_input() {
    assert_eq!(
        errors("é1"),
        vec![(ErrorImpl::InvalidInput, "é".to_string(), 1)]
    );
    assert_eq!(tokens("é1")[0].value, "1");
}

#[test]
fn test_comment_is_skipped() {
    assert!(scan("/* x */").is_empty());
}

#[test]
fn test_comment_between_tokens() {
    let values: Vec<String> = tokens("a/* b */c").into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["a", "c"]);
}

#[test]
fn test_comments_do_not_nest() {
    let scanned = scan("/* a /* b */ c */");
    let values: Vec<String> = tokens("/* a /* b */ c */").into_iter().map(|t| t.value).collect();

    assert_eq!(values, vec!["c"]);
    assert_eq!(scanned.len(), 2);
    assert_eq!(
        errors("/* a /* b */ c */"),
        vec![(ErrorImpl::UnmatchedComment, "*/".to_string(), 1)]
    );
}

#[test]
fn test_unclosed_comment() {
    let scanned = scan("/* unterminated");

    assert_eq!(scanned.len(), 1);
    assert_eq!(
        errors("/* unterminated"),
        vec![(ErrorImpl::UnclosedComment, "/*".to_string(), 1)]
    );
}

#[test]
fn test_unclosed_comment_consumes_rest_of_input() {
    let source = "int a;\n/* open\nint b;\n==";

    let values: Vec<String> = tokens(source).into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["int", "a", ";"]);
    assert_eq!(errors(source).len(), 1);
}

#[test]
fn test_unclosed_comment_reports_opening_line() {
    let source = "x\n\n/*a\nb\nc\n";

    assert_eq!(
        errors(source),
        vec![(ErrorImpl::UnclosedComment, "/*".to_string(), 3)]
    );
}

#[test]
fn test_opener_star_is_not_a_closer() {
    assert_eq!(
        errors("/*/"),
        vec![(ErrorImpl::UnclosedComment, "/*".to_string(), 1)]
    );
}

#[test]
fn test_unmatched_comment() {
    let source = "a */ b";

    let values: Vec<String> = tokens(source).into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["a", "b"]);
    assert_eq!(
        errors(source),
        vec![(ErrorImpl::UnmatchedComment, "*/".to_string(), 1)]
    );
}

#[test]
fn test_closer_after_number_and_word_runs() {
    let scanned = scan("12*/ab*/");

    assert_eq!(
        scanned,
        vec![
            Scanned::Token(Token { kind: TokenKind::Number, value: "12".to_string(), line: 1 }),
            Scanned::Error(crate::errors::errors::LexicalError::new(
                ErrorImpl::UnmatchedComment,
                "*/",
                1
            )),
            Scanned::Token(Token { kind: TokenKind::Identifier, value: "ab".to_string(), line: 1 }),
            Scanned::Error(crate::errors::errors::LexicalError::new(
                ErrorImpl::UnmatchedComment,
                "*/",
                1
            )),
        ]
    );
}

#[test]
fn test_star_symbol_before_slash_is_a_closer() {
    let scanned = scan("a*/b");
    assert_eq!(scanned.len(), 3);
    assert!(tokens("a**b").iter().filter(|t| t.value == "*").count() == 2);
}

#[test]
fn test_line_tracking() {
    let tokens = tokens("int x;\n\nx = 1;\r\n/* a\nb */ y");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[2].line, 1);
    assert_eq!(tokens[3].line, 3);
    assert_eq!(tokens[6].line, 3);
    assert_eq!(tokens[7].value, "y");
    assert_eq!(tokens[7].line, 5);
}

#[test]
fn test_error_lines() {
    let errors = errors("a\n1b\n#\n*/");
    let lines: Vec<u32> = errors.iter().map(|(_, _, l)| *l).collect();

    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_whitespace_handling() {
    assert!(scan("  \t\r\n  ").is_empty());
    assert!(scan("").is_empty());
}

#[test]
fn test_lexer_is_fused_after_end() {
    let mut lexer = Lexer::new("x");

    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_tokenize_simple_program() {
    let source = "void main(void) {\n  int a;\n  a = 3;\n  repeat { a = a - 1; } until (a < 1);\n  return;\n}\n";
    let scanned = scan(source);

    assert!(scanned.iter().all(|s| matches!(s, Scanned::Token(_))));
    let tokens = tokens(source);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "main");
    assert_eq!(tokens.last().map(|t| t.line), Some(6));
}

#[test]
fn test_keywords_resolve_to_reserved_index() {
    let tokens = tokens("if x void");

    assert_eq!(tokens[0].reserved_index(), Some(3));
    assert_eq!(tokens[1].reserved_index(), None);
    assert_eq!(tokens[2].reserved_index(), Some(8));
}
