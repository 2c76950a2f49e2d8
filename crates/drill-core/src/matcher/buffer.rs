/// The mutable expected-character buffer of one typing challenge.
///
/// Invariant: `cursor <= chars.len()`. Everything before the cursor has been
/// typed; edits made by alternate-spelling rules only ever touch positions at
/// or after the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl ExpectedBuffer {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars, cursor: 0 }
    }

    #[cfg(test)]
    pub(crate) fn with_cursor(chars: &str, cursor: usize) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        assert!(cursor <= chars.len());
        Self { chars, cursor }
    }

    /// Replace the contents and rewind the cursor.
    pub fn reset(&mut self, chars: Vec<char>) {
        self.chars = chars;
        self.cursor = 0;
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Character under the cursor, `None` once complete.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    /// Character at `cursor + offset`, `None` outside the buffer.
    pub fn peek(&self, offset: isize) -> Option<char> {
        let index = self.cursor.checked_add_signed(offset)?;
        self.chars.get(index).copied()
    }

    pub fn typed(&self) -> &[char] {
        &self.chars[..self.cursor]
    }

    pub fn remaining(&self) -> &[char] {
        &self.chars[self.cursor..]
    }

    pub fn typed_string(&self) -> String {
        self.typed().iter().collect()
    }

    pub fn remaining_string(&self) -> String {
        self.remaining().iter().collect()
    }

    pub(crate) fn insert_at(&mut self, offset: usize, c: char) {
        let index = (self.cursor + offset).min(self.chars.len());
        self.chars.insert(index, c);
    }

    pub(crate) fn replace_at(&mut self, offset: usize, c: char) {
        debug_assert!(self.cursor + offset < self.chars.len());
        if let Some(slot) = self.chars.get_mut(self.cursor + offset) {
            *slot = c;
        }
    }

    pub(crate) fn remove_at(&mut self, offset: usize) {
        let index = self.cursor + offset;
        debug_assert!(index < self.chars.len());
        if index < self.chars.len() {
            self.chars.remove(index);
        }
    }

    /// Accept the character under the cursor.
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.cursor < self.chars.len());
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_cursor() {
        let buf = ExpectedBuffer::with_cursor("kyou", 2);
        assert_eq!(buf.typed_string(), "ky");
        assert_eq!(buf.remaining_string(), "ou");
        assert_eq!(buf.current(), Some('o'));
        assert_eq!(buf.peek(-2), Some('k'));
        assert_eq!(buf.peek(-3), None);
        assert_eq!(buf.peek(2), None);
    }

    #[test]
    fn edits_are_cursor_relative() {
        let mut buf = ExpectedBuffer::with_cursor("sya", 1);
        buf.replace_at(0, 'h');
        assert_eq!(buf.chars(), &['s', 'h', 'a']);
        buf.insert_at(1, 'x');
        assert_eq!(buf.chars(), &['s', 'h', 'x', 'a']);
        buf.remove_at(1);
        assert_eq!(buf.chars(), &['s', 'h', 'a']);
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut buf = ExpectedBuffer::new(vec!['a']);
        assert!(!buf.is_complete());
        buf.advance();
        assert!(buf.is_complete());
        assert_eq!(buf.current(), None);
        assert_eq!(buf.remaining_string(), "");
    }

    #[test]
    fn reset_rewinds() {
        let mut buf = ExpectedBuffer::with_cursor("ka", 2);
        buf.reset(vec!['s', 'i']);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.remaining_string(), "si");
    }
}
