use std::ops::Range;

/// A byte-offset span into a trace script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// 1-based line number of the span start within `source`.
    pub fn line(&self, source: &str) -> usize {
        let end = self.start.min(source.len());
        source.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_covers_both() {
        let merged = Span::new(4, 6).merge(Span::new(1, 5));
        assert_eq!(merged, Span::new(1, 6));
        assert_eq!(merged.len(), 5);
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_line_counts_newlines_before_start() {
        let source = "connect 0\nframe south\nlost";
        assert_eq!(Span::new(0, 7).line(source), 1);
        assert_eq!(Span::new(10, 15).line(source), 2);
        assert_eq!(Span::new(22, 26).line(source), 3);
        assert_eq!(Span::new(500, 500).line(source), 3);
    }
}
