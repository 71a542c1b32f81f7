use std::collections::HashMap;

use crate::lexer::tokens::KEYWORDS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub index: usize,
    pub lexeme: String,
}

/// Append-only registry of distinct lexemes. Indices start at 1 and the
/// reserved keywords always occupy 1 through 8 in canonical order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    lookup: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = SymbolTable {
            entries: Vec::with_capacity(KEYWORDS.len()),
            lookup: HashMap::new(),
        };

        for keyword in KEYWORDS {
            table.lookup_or_insert(keyword);
        }

        table
    }

    /// Returns the index of `lexeme`, appending it first if it is new.
    pub fn lookup_or_insert(&mut self, lexeme: &str) -> usize {
        if let Some(index) = self.lookup.get(lexeme) {
            return *index;
        }

        let index = self.entries.len() + 1;
        self.entries.push(SymbolEntry {
            index,
            lexeme: String::from(lexeme),
        });
        self.lookup.insert(String::from(lexeme), index);
        index
    }

    pub fn lookup(&self, lexeme: &str) -> Option<usize> {
        self.lookup.get(lexeme).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the keywords are always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
