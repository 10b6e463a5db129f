use regex::Regex;

/// Opaque snapshot of a [`Cursor`] location
///
/// Positions are only meaningful for the cursor (or a cursor over the same
/// text) that produced them. Restoring one with [`Cursor::set_position`] is
/// O(1), which is what makes backtracking cheap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// Byte offset into the source text
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Backtrackable view over borrowed text
///
/// The text never changes. Parsers move the position forward with
/// [`advance`](Cursor::advance) after a successful probe, and put it back with
/// [`set_position`](Cursor::set_position) when an attempt has to be undone.
#[derive(Debug, Clone)]
pub struct Cursor<'code> {
    text: &'code str,
    position: Position,
}

impl<'code> Cursor<'code> {
    pub fn new(text: &'code str) -> Self {
        Cursor {
            text,
            position: Position(0),
        }
    }

    /// The character at the current position, or `None` at end of input
    pub fn head(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn at_end(&self) -> bool {
        self.position.0 == self.text.len()
    }

    /// Whether the unconsumed input starts with `literal`. Never moves the cursor.
    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Match `pattern` against the unconsumed input
    ///
    /// Only a match beginning exactly at the current position counts, so the
    /// pattern should be anchored with `^`. Never moves the cursor.
    pub fn match_pattern(&self, pattern: &Regex) -> Option<&'code str> {
        let remaining = self.remaining();
        pattern
            .find(remaining)
            .filter(|found| found.start() == 0)
            .map(|found| found.as_str())
    }

    /// Move forward by `count` characters
    ///
    /// Callers must have validated the advance with a successful probe.
    pub fn advance(&mut self, count: usize) {
        let remaining = self.remaining();
        let bytes = remaining
            .char_indices()
            .nth(count)
            .map_or(remaining.len(), |(offset, _)| offset);
        debug_assert!(
            remaining[..bytes].chars().count() == count,
            "advanced past end of input"
        );
        self.position = Position(self.position.0 + bytes);
    }

    /// Move forward past `consumed`, a prefix of the unconsumed input
    pub(crate) fn advance_past(&mut self, consumed: &str) {
        debug_assert!(self.starts_with(consumed));
        self.position = Position(self.position.0 + consumed.len());
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Restore a position previously read from this cursor
    pub fn set_position(&mut self, position: Position) {
        debug_assert!(position.0 <= self.text.len());
        self.position = position;
    }

    /// The unconsumed input
    pub fn remaining(&self) -> &'code str {
        &self.text[self.position.0..]
    }

    /// The whole input, consumed or not
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The text between two positions of this cursor
    pub fn slice(&self, from: Position, to: Position) -> &'code str {
        &self.text[from.0..to.0]
    }
}
