//! Split poem paragraphs into clauses

/// Splits paragraphs on a set of delimiter characters
pub struct ClauseSplitter {
    delimiters: Vec<char>,
}

impl ClauseSplitter {
    /// Create a new clause splitter
    pub fn new(delimiters: impl Into<Vec<char>>) -> Self {
        Self {
            delimiters: delimiters.into(),
        }
    }

    /// Split a paragraph, trimming surrounding whitespace from each clause
    ///
    /// Empty clauses (e.g. after a trailing delimiter) are kept so that
    /// callers see every fragment; they never pass a length filter.
    pub fn split<'a>(&'a self, paragraph: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        paragraph
            .split(move |c: char| self.delimiters.contains(&c))
            .map(|clause| clause.trim_matches(is_clause_padding))
    }
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F
fn is_clause_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for ClauseSplitter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DELIMITERS)
    }
}
