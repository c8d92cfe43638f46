//! Change ranges consumed from the diff engine

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open `[start, end)` span of line indices in one pane
///
/// A span with `start == end` is a zero-height anchor: the degenerate
/// side of a pure insertion or deletion. `start > end` is never valid
/// and is rejected by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-height anchor at the given line
    pub fn anchor(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// True for zero-height anchors
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub(crate) fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl From<Range<usize>> for LineSpan {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// One correspondence unit between the two panes
///
/// Produced upstream by the diff engine. Ranges with `changed == false`
/// exist for alignment bookkeeping and are never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRange {
    /// Lines covered in the before pane
    pub before: LineSpan,
    /// Lines covered in the after pane
    pub after: LineSpan,
    /// False for alignment-only ranges (not drawn)
    pub changed: bool,
}

impl ChangeRange {
    pub fn changed(before: impl Into<LineSpan>, after: impl Into<LineSpan>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            changed: true,
        }
    }

    pub fn unchanged(before: impl Into<LineSpan>, after: impl Into<LineSpan>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            changed: false,
        }
    }
}
