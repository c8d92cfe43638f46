//! Diff engine adapter
//!
//! Turns two file contents into the `ChangeRange` sequence the layout
//! core consumes. Changed hunks come straight from imara-diff; the
//! unchanged gaps between them are emitted too, as alignment-only
//! ranges, so downstream consumers can reconstruct the full pairing.

use imara_diff::{Algorithm, Diff, InternedInput};
use ribbon_core::{ChangeRange, LineSpan};

/// Compute the change ranges between two revisions of a file
///
/// Ranges are ordered top to bottom and alternate between alignment
/// bookkeeping (`changed == false`) and real changes.
pub fn change_ranges(old: &str, new: &str) -> Vec<ChangeRange> {
    let input = InternedInput::new(old, new);
    let mut diff = Diff::compute(Algorithm::Histogram, &input);
    diff.postprocess_lines(&input);

    let mut ranges = Vec::new();
    let mut before_cursor = 0u32;
    let mut after_cursor = 0u32;

    for hunk in diff.hunks() {
        if hunk.before.start > before_cursor || hunk.after.start > after_cursor {
            ranges.push(ChangeRange::unchanged(
                span(before_cursor, hunk.before.start),
                span(after_cursor, hunk.after.start),
            ));
        }
        ranges.push(ChangeRange::changed(
            span(hunk.before.start, hunk.before.end),
            span(hunk.after.start, hunk.after.end),
        ));
        before_cursor = hunk.before.end;
        after_cursor = hunk.after.end;
    }

    let before_len = input.before.len() as u32;
    let after_len = input.after.len() as u32;
    if before_cursor < before_len || after_cursor < after_len {
        ranges.push(ChangeRange::unchanged(
            span(before_cursor, before_len),
            span(after_cursor, after_len),
        ));
    }

    ranges
}

fn span(start: u32, end: u32) -> LineSpan {
    LineSpan::new(start as usize, end as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_files_have_no_changed_ranges() {
        let ranges = change_ranges("a\nb\nc\n", "a\nb\nc\n");
        assert!(ranges.iter().all(|r| !r.changed));
    }

    #[test]
    fn test_pure_insertion_has_empty_before_span() {
        let ranges = change_ranges("a\nb\n", "a\nx\ny\nb\n");
        let changed: Vec<_> = ranges.iter().filter(|r| r.changed).collect();
        assert_eq!(changed.len(), 1);
        assert!(changed[0].before.is_empty());
        assert_eq!(changed[0].after.len(), 2);
    }

    #[test]
    fn test_pure_deletion_has_empty_after_span() {
        let ranges = change_ranges("a\nx\nb\n", "a\nb\n");
        let changed: Vec<_> = ranges.iter().filter(|r| r.changed).collect();
        assert_eq!(changed.len(), 1);
        assert!(changed[0].after.is_empty());
        assert_eq!(changed[0].before, LineSpan::new(1, 2));
    }

    #[test]
    fn test_modification_spans_both_sides() {
        let ranges = change_ranges("a\nold\nb\n", "a\nnew one\nnew two\nb\n");
        let changed: Vec<_> = ranges.iter().filter(|r| r.changed).collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].before, LineSpan::new(1, 2));
        assert_eq!(changed[0].after, LineSpan::new(1, 3));
    }

    #[test]
    fn test_unchanged_gaps_interleave_and_cover_both_sides() {
        let old = "a\nb\nDEL\nc\nd\n";
        let new = "a\nb\nc\nd\nADD\n";
        let ranges = change_ranges(old, new);

        // Cursors must walk both sides without gaps or overlaps.
        let mut before_cursor = 0;
        let mut after_cursor = 0;
        for range in &ranges {
            assert_eq!(range.before.start, before_cursor);
            assert_eq!(range.after.start, after_cursor);
            before_cursor = range.before.end;
            after_cursor = range.after.end;
        }
        assert_eq!(before_cursor, 5);
        assert_eq!(after_cursor, 5);

        assert_eq!(ranges.iter().filter(|r| r.changed).count(), 2);
    }

    #[test]
    fn test_change_at_start_of_file() {
        let ranges = change_ranges("x\na\n", "y\na\n");
        assert!(ranges[0].changed, "no leading alignment range expected");
        assert_eq!(ranges[0].before, LineSpan::new(0, 1));
        assert_eq!(ranges[0].after, LineSpan::new(0, 1));
    }
}
