//! Span information for source locations
//!
//! Spans store byte offsets only; line/column positions are resolved on
//! demand through [`SourceMap`] when a diagnostic is rendered.

use serde::{Deserialize, Serialize};

/// A half-open byte range in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset start (0-indexed)
    pub start: usize,
    /// Byte offset end (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span at the given offset
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Merge two spans into one that covers both
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if a byte offset is within this span
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// A 1-indexed line/column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

/// Resolves byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceMap {
    /// Byte positions where each line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    /// Create a new source map from source code
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1));
        Self { line_starts }
    }

    /// Get the 1-indexed line/column for a byte offset
    pub fn line_col(&self, offset: usize) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        LineCol {
            line: line + 1,
            column: offset - line_start + 1,
        }
    }

    /// Byte offset where the line containing `offset` starts
    pub fn line_start(&self, offset: usize) -> usize {
        let pos = self.line_col(offset);
        self.line_starts[pos.line - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_map() {
        let source = "hello\nworld\n";
        let map = SourceMap::new(source);

        assert_eq!(map.line_col(0), LineCol { line: 1, column: 1 }); // 'h'
        assert_eq!(map.line_col(5), LineCol { line: 1, column: 6 }); // '\n'
        assert_eq!(map.line_col(6), LineCol { line: 2, column: 1 }); // 'w'
        assert_eq!(map.line_col(11), LineCol { line: 2, column: 6 }); // '\n'
    }

    #[test]
    fn test_line_start() {
        let map = SourceMap::new("ab\ncd");
        assert_eq!(map.line_start(1), 0);
        assert_eq!(map.line_start(4), 3);
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(0, 5);
        let b = Span::new(10, 15);
        let merged = a.merge(&b);

        assert_eq!(merged.start, 0);
        assert_eq!(merged.end, 15);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }
}
