//! Cursor over a user agent string.
//!
//! Every matcher drives its own [`Lexer`]. All operations either succeed and
//! advance the read offset, or fail and leave it untouched, so a matcher can
//! try an optional token without having to restore state by hand.

use regex::Regex;

/// A position-tracked, read-only view over the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the unconsumed part of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if the remaining input starts with `m`. Never advances.
    pub(crate) fn match_no_consume(&self, m: &str) -> bool {
        self.rest().starts_with(m)
    }

    /// Consumes `m` if the remaining input starts with it.
    pub(crate) fn match_literal(&mut self, m: &str) -> bool {
        if !self.match_no_consume(m) {
            return false;
        }
        self.pos += m.len();
        true
    }

    /// Like [`Lexer::match_literal`], shaped for `?` chaining in matchers.
    pub(crate) fn require(&mut self, m: &str) -> Option<()> {
        self.match_literal(m).then_some(())
    }

    /// Consumes the first literal of `candidates` that matches.
    pub(crate) fn match_first_of(&mut self, candidates: &[&str]) -> bool {
        candidates.iter().any(|m| self.match_literal(m))
    }

    /// Returns the text before the next `delim` and advances past `delim`.
    pub(crate) fn span(&mut self, delim: &str) -> Option<&'a str> {
        let rest = self.rest();
        let i = rest.find(delim)?;
        self.pos += i + delim.len();
        Some(&rest[..i])
    }

    /// Returns the text before the first character found in `chars` and
    /// advances past that character, whatever its encoded width.
    pub(crate) fn span_any_of(&mut self, chars: &str) -> Option<&'a str> {
        let rest = self.rest();
        let (i, c) = rest.char_indices().find(|(_, c)| chars.contains(*c))?;
        self.pos += i + c.len_utf8();
        Some(&rest[..i])
    }

    /// Like [`Lexer::span`], but fails if `stop_at` occurs before `delim`.
    pub(crate) fn span_before(&mut self, delim: &str, stop_at: &str) -> Option<&'a str> {
        let rest = self.rest();
        let i = rest.find(delim)?;
        if rest.find(stop_at).is_some_and(|j| j < i) {
            return None;
        }
        self.pos += i + delim.len();
        Some(&rest[..i])
    }

    /// Matches `pattern` against the remaining input and returns its first two
    /// capture groups, advancing past the whole match.
    ///
    /// Patterns must be anchored with `^` and define both groups: the skipped
    /// prefix and the wanted token.
    pub(crate) fn span_by_pattern(&mut self, pattern: &Regex) -> Option<(&'a str, &'a str)> {
        let rest = self.rest();
        let caps = pattern.captures(rest)?;
        let whole = caps.get(0)?;
        let skipped = caps.get(1)?.as_str();
        let token = caps.get(2)?.as_str();
        self.pos += whole.end();
        Some((skipped, token))
    }

    /// Consumes and returns everything left.
    pub(crate) fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.pos = self.input.len();
        rest
    }
}
