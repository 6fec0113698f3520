use std::ops::Range;

use ropey::{Rope, RopeSlice};

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope, with a single cursor and a dirty flag.
///
/// Spans on the cursor line are byte ranges into [`EditorBuffer::line_at`];
/// line ranges are half-open ranges of line indices.
#[derive(Clone)]
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer (never zero).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without its line break).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let content = line.len_chars() - line_break_len(line);
        Some(line.slice(..content).to_string())
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    // --- Primitive edits ---

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.cursor.set_col(self.cursor.col + ch.len_utf8());
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace), joining with the
    /// previous line at column 0.
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor.col == 0 && self.cursor.line == 0 {
            return false;
        }

        if self.cursor.col == 0 {
            let prev_line_len = self.line_len(self.cursor.line - 1);
            let break_len = line_break_len(self.rope.line(self.cursor.line - 1));
            let char_idx = self.cursor_char_idx();
            self.rope.remove(char_idx - break_len..char_idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_line_len);
        } else {
            let char_idx = self.cursor_char_idx();
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let prev_char_len = line[..self.cursor.col]
                .chars()
                .next_back()
                .map_or(1, char::len_utf8);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Ctrl+D), joining with the next
    /// line at end-of-line.
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let line_len = self.line_len(self.cursor.line);

        if self.cursor.col >= line_len && self.cursor.line + 1 >= self.line_count() {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        let len = if self.cursor.col >= line_len {
            line_break_len(self.rope.line(self.cursor.line))
        } else {
            1
        };
        self.rope.remove(char_idx..char_idx + len);
        self.dirty = true;
        true
    }

    // --- Spans on the cursor line ---

    /// The character an edit at character scope applies to: the one under
    /// the cursor, or the one before it at end-of-line.
    pub fn char_span(&self) -> Option<Range<usize>> {
        let line = self.line_at(self.cursor.line)?;
        let col = floor_char_boundary(&line, self.cursor.col);
        if let Some(ch) = line.get(col..)?.chars().next() {
            return Some(col..col + ch.len_utf8());
        }
        let ch = line.get(..col)?.chars().next_back()?;
        Some(col - ch.len_utf8()..col)
    }

    /// The word an edit at word scope applies to: leading whitespace from
    /// the cursor is skipped, then the run of non-whitespace is taken.
    ///
    /// `None` when only whitespace (or nothing) follows the cursor.
    pub fn word_span(&self) -> Option<Range<usize>> {
        let line = self.line_at(self.cursor.line)?;
        let col = floor_char_boundary(&line, self.cursor.col);
        let rest = line.get(col..).filter(|rest| !rest.is_empty())?;
        let start = col + rest.find(|c: char| !c.is_whitespace())?;
        let end = line[start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |i| start + i);
        Some(start..end)
    }

    /// Remove a byte span from the cursor line; the cursor lands on its start.
    pub fn delete_span(&mut self, span: Range<usize>) -> bool {
        if span.is_empty() {
            return false;
        }
        let line = self.cursor.line;
        let start = self.char_idx_at(line, span.start);
        let end = self.char_idx_at(line, span.end);
        self.rope.remove(start..end);
        self.cursor.set_col(span.start);
        self.dirty = true;
        true
    }

    /// Insert a copy of a span directly after itself. The cursor stays put.
    pub fn duplicate_span(&mut self, span: Range<usize>) -> bool {
        let Some(text) = self
            .line_at(self.cursor.line)
            .and_then(|line| line.get(span.clone()).map(ToOwned::to_owned))
        else {
            return false;
        };
        if text.is_empty() {
            return false;
        }
        let at = self.char_idx_at(self.cursor.line, span.end);
        self.rope.insert(at, &text);
        self.dirty = true;
        true
    }

    /// Surround a span with `open` and `close`; the cursor lands on `open`.
    pub fn wrap_span(&mut self, span: Range<usize>, open: char, close: char) -> bool {
        if span.is_empty() || span.end > self.line_len(self.cursor.line) {
            return false;
        }
        let line = self.cursor.line;
        let end = self.char_idx_at(line, span.end);
        self.rope.insert_char(end, close);
        let start = self.char_idx_at(line, span.start);
        self.rope.insert_char(start, open);
        self.cursor.set_col(span.start);
        self.dirty = true;
        true
    }

    // --- Line ranges ---

    /// The cursor line as a one-line range.
    pub const fn line_range(&self) -> Range<usize> {
        self.cursor.line..self.cursor.line + 1
    }

    /// The contiguous run of non-blank lines around the cursor.
    ///
    /// On a blank line the block is that line alone.
    pub fn block_range(&self) -> Range<usize> {
        let is_blank = |idx: usize| {
            self.line_at(idx)
                .is_none_or(|line| line.trim().is_empty())
        };
        let line = self.cursor.line;
        if is_blank(line) {
            return line..line + 1;
        }
        let mut start = line;
        while start > 0 && !is_blank(start - 1) {
            start -= 1;
        }
        let mut end = line + 1;
        while end < self.line_count() && !is_blank(end) {
            end += 1;
        }
        start..end
    }

    /// Remove whole lines. The buffer always keeps at least one line.
    pub fn delete_lines(&mut self, lines: Range<usize>) -> bool {
        let total = self.line_count();
        let end = lines.end.min(total);
        if lines.start >= end {
            return false;
        }
        let mut from = self.rope.line_to_char(lines.start);
        let to = if end < total {
            self.rope.line_to_char(end)
        } else {
            // Removing through the last line: take the preceding line break instead.
            if lines.start > 0 {
                from -= line_break_len(self.rope.line(lines.start - 1));
            }
            self.rope.len_chars()
        };
        if from == to {
            return false;
        }
        self.rope.remove(from..to);

        let line = lines.start.min(self.line_count().saturating_sub(1));
        self.cursor.line = line;
        let col = self.clamp_col(line, self.cursor.col);
        self.cursor.set_col(col);
        self.dirty = true;
        true
    }

    /// Insert a copy of whole lines directly below them. The cursor stays put.
    pub fn duplicate_lines(&mut self, lines: Range<usize>) -> bool {
        let total = self.line_count();
        let end = lines.end.min(total);
        if lines.start >= end {
            return false;
        }
        let from = self.rope.line_to_char(lines.start);
        if end < total {
            let at = self.rope.line_to_char(end);
            let text = self.rope.slice(from..at).to_string();
            self.rope.insert(at, &text);
        } else {
            // The last line has no break of its own; reuse the buffer's.
            let line_break = if end >= 2 {
                let prev = self.rope.line(end - 2);
                prev.slice(prev.len_chars() - line_break_len(prev)..).to_string()
            } else {
                "\n".to_string()
            };
            let at = self.rope.len_chars();
            let text = self.rope.slice(from..at).to_string();
            self.rope.insert(at, &format!("{line_break}{text}"));
        }
        self.dirty = true;
        true
    }

    /// Put `open` at the start of the first line and `close` at the end of
    /// the last line of the range.
    pub fn wrap_lines(&mut self, lines: Range<usize>, open: char, close: char) -> bool {
        let end = lines.end.min(self.line_count());
        if lines.start >= end {
            return false;
        }
        let last = end - 1;
        let close_at = self.char_idx_at(last, self.line_len(last));
        self.rope.insert_char(close_at, close);
        let open_at = self.rope.line_to_char(lines.start);
        self.rope.insert_char(open_at, open);
        if self.cursor.line == lines.start {
            self.cursor.set_col(self.cursor.col + open.len_utf8());
        }
        self.dirty = true;
        true
    }

    // --- Cursor movement ---

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move cursor to a specific line and column, clamped to the buffer.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let col = self.clamp_col(self.cursor.line, col);
        self.cursor.set_col(col);
    }

    // --- Private helpers ---

    /// Clamp a byte column to the line and snap it back onto a char boundary.
    fn clamp_col(&self, line_idx: usize, col: usize) -> usize {
        self.line_at(line_idx)
            .map_or(0, |line| floor_char_boundary(&line, col))
    }

    fn cursor_char_idx(&self) -> usize {
        self.char_idx_at(self.cursor.line, self.cursor.col)
    }

    /// Convert a (line, byte column) pair to a rope char index.
    fn char_idx_at(&self, line: usize, byte_col: usize) -> usize {
        let line_start = self.rope.line_to_char(line);
        let line_str = self.rope.line(line).to_string();
        let byte_col = floor_char_boundary(&line_str, byte_col);
        line_start + line_str[..byte_col].chars().count()
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let prev_char_len = line[..self.cursor.col]
                .chars()
                .next_back()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col - prev_char_len);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let next_char_len = line[self.cursor.col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col + next_char_len);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.clamp_col(self.cursor.line, self.cursor.col_memory);
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.clamp_col(self.cursor.line, self.cursor.col_memory);
        }
    }
}

/// Largest char boundary of `s` at or below `col`.
fn floor_char_boundary(s: &str, col: usize) -> usize {
    let mut col = col.min(s.len());
    while !s.is_char_boundary(col) {
        col -= 1;
    }
    col
}

/// Number of chars in the line break ending `line` (2 for CRLF).
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}' => 1,
        _ => 0,
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
