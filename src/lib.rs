#![allow(clippy::module_inception)]

use crate::errors::errors::LexicalError;

pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod report;
pub mod symbol_table;

extern crate regex;

/// Returns the text of the 1-based `line` of `source`, without its line
/// terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.trim_end_matches('\r'))
}


pub fn render_error(error: &LexicalError, source: &str, file: &str) -> String {
    /*
        Error: Invalid number (12a)
        -> input.txt
          |
        20 | int x = 12ab;
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let line_text = get_line(source, error.get_line()).unwrap_or_default();

    let mut out = format!("Error: {} ({})\n", error.get_kind(), error.get_lexeme());
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, remove_starting_whitespace(line_text)));
    out
}

fn remove_starting_whitespace(string: &str) -> &str {
    string.trim_start_matches([' ', '\t'])
}
