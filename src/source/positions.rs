//! Position conversion utilities.
//!
//! Anchors are located by byte offset; diagnostics report 0-indexed line and
//! character column, rendered 1-indexed.

/// Position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset in source
    pub byte: usize,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub col: usize,
}

impl Position {
    /// Resolve a byte offset into a line/column position.
    ///
    /// Offsets past the end are clamped; offsets inside a multi-byte
    /// character are moved back to its first byte.
    pub fn at(source: &str, byte_offset: usize) -> Self {
        let mut byte = byte_offset.min(source.len());
        while !source.is_char_boundary(byte) {
            byte -= 1;
        }

        let before = &source[..byte];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = source[line_start..byte].chars().count();

        Self { byte, line, col }
    }
}

/// Span in source code (a range from start position to end position)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `len` bytes starting at `byte_offset`.
    pub fn of(source: &str, byte_offset: usize, len: usize) -> Self {
        Self {
            start: Position::at(source, byte_offset),
            end: Position::at(source, byte_offset + len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let pos = Position::at("hello world", 6);
        assert_eq!(pos, Position { byte: 6, line: 0, col: 6 });
    }

    #[test]
    fn test_later_line() {
        let source = "<?php\n$x = 1;\n?>\n<audio id=\"a\">";
        let pos = Position::at(source, source.find("<audio").unwrap());
        assert_eq!(pos.line, 3);
        assert_eq!(pos.col, 0);
    }

    #[test]
    fn test_multibyte() {
        let source = "café <b>";
        // é is 2 bytes but 1 character
        let pos = Position::at(source, source.find("<b>").unwrap());
        assert_eq!(pos.byte, 6);
        assert_eq!(pos.col, 5);
    }

    #[test]
    fn test_inside_char_boundary() {
        let source = "é";
        assert_eq!(Position::at(source, 1).byte, 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let source = "hello";
        assert_eq!(Position::at(source, 100).byte, 5); // clamped to length
    }

    #[test]
    fn test_span_same_line() {
        let source = "  <audio id=\"notif-sound\">";
        let span = Span::of(source, 2, 6);
        assert_eq!(span.start.col, 2);
        assert_eq!(span.end.col, 8);
    }
}
