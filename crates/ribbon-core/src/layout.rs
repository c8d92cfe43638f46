//! Spine connector layout
//!
//! Projects change ranges from two independently scrolled panes into
//! the shared spine coordinate space, culls off-screen geometry, and
//! builds one closed filled-and-stroked curve per visible change.
//!
//! The whole pass is a pure function of its inputs: no caching, no
//! incremental state. Recomputation per scroll event is cheap because
//! culled ranges cost four comparisons and no allocation.

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Side};
use crate::path::{ConnectorKind, CurveDescriptor, PathCommand, Point};
use crate::range::{ChangeRange, LineSpan};

/// Vertical bias that centers a 1px stroke on a pixel boundary
/// instead of between two pixels. Fixed rendering-correctness
/// constant, not configurable.
const CRISP_OFFSET: f32 = 0.5;

/// One side of a range projected into spine pixel space
#[derive(Debug, Clone, Copy)]
struct Edge {
    top: f32,
    bottom: f32,
}

impl Edge {
    fn project(span: LineSpan, line_height: f32, scroll: f32) -> Self {
        let top = span.start as f32 * line_height - scroll + CRISP_OFFSET;
        // A zero-height anchor collapses to its top coordinate.
        let bottom = if span.is_empty() {
            top
        } else {
            span.end as f32 * line_height - 1.0 - scroll + CRISP_OFFSET
        };
        Self { top, bottom }
    }
}

/// Compute connector curves for every visible changed range
///
/// `before_scroll` and `after_scroll` are the panes' scroll offsets in
/// pixels from the top of their content; `viewport_height` is the
/// visible height of the spine gutter. Ranges fully above or fully
/// below the viewport on both sides are culled; ranges straddling a
/// boundary are emitted whole and clipped visually by the host.
///
/// Output order matches input order restricted to the retained subset,
/// so repeated calls under scroll never reorder shapes.
pub fn layout(
    ranges: &[ChangeRange],
    before_scroll: f32,
    after_scroll: f32,
    viewport_height: f32,
    config: &LayoutConfig,
) -> Result<Vec<CurveDescriptor>, LayoutError> {
    validate_config(config)?;
    // All spans are validated before any descriptor is built, so a
    // failed call never yields a partial frame.
    for (index, range) in ranges.iter().enumerate() {
        validate_span(index, Side::Before, range.before)?;
        validate_span(index, Side::After, range.after)?;
    }

    let mut descriptors = Vec::new();
    for range in ranges {
        if !range.changed {
            continue;
        }
        // Nothing to link when both sides are anchors.
        if range.before.is_empty() && range.after.is_empty() {
            continue;
        }

        let before = Edge::project(range.before, config.line_height, before_scroll);
        let after = Edge::project(range.after, config.line_height, after_scroll);

        // Entirely above or entirely below the viewport on both sides.
        if before.bottom < 0.0 && after.bottom < 0.0 {
            continue;
        }
        if before.top > viewport_height && after.top > viewport_height {
            continue;
        }

        let (kind, path) = build_path(range, before, after, config.width);
        descriptors.push(CurveDescriptor {
            kind,
            path,
            fill: config.fill,
            stroke: config.stroke,
        });
    }

    Ok(descriptors)
}

fn validate_config(config: &LayoutConfig) -> Result<(), LayoutError> {
    // Negated comparison also rejects NaN.
    if !(config.line_height > 0.0) {
        return Err(LayoutError::InvalidConfig {
            field: "line_height",
            value: config.line_height,
        });
    }
    if !(config.width > 0.0) {
        return Err(LayoutError::InvalidConfig {
            field: "width",
            value: config.width,
        });
    }
    Ok(())
}

fn validate_span(index: usize, side: Side, span: LineSpan) -> Result<(), LayoutError> {
    if span.is_inverted() {
        return Err(LayoutError::InvalidSpan {
            index,
            side,
            start: span.start,
            end: span.end,
        });
    }
    Ok(())
}

/// Classify the topology and build the closed path
///
/// The before edge sits at x=0, the after edge at x=width. Every path
/// is a single closed shape so the fill reads as one continuous band
/// between the panes.
fn build_path(
    range: &ChangeRange,
    before: Edge,
    after: Edge,
    width: f32,
) -> (ConnectorKind, Vec<PathCommand>) {
    let reach = width * 0.5;
    let left = |y: f32| Point::new(0.0, y);
    let right = |y: f32| Point::new(width, y);

    if range.before.is_empty() {
        // Point on the before side fans out into the after span.
        let anchor = left(before.top);
        let path = vec![
            PathCommand::MoveTo(anchor),
            ease(anchor, right(after.top), reach),
            PathCommand::LineTo(right(after.bottom)),
            ease(right(after.bottom), anchor, reach),
            PathCommand::Close,
        ];
        (ConnectorKind::Insert, path)
    } else if range.after.is_empty() {
        // Before span collapses to a point on the after side; the
        // right edge is a single point, so no straight segment.
        let anchor = right(after.top);
        let path = vec![
            PathCommand::MoveTo(left(before.top)),
            ease(left(before.top), anchor, reach),
            ease(anchor, left(before.bottom), reach),
            PathCommand::Close,
        ];
        (ConnectorKind::Delete, path)
    } else {
        let path = vec![
            PathCommand::MoveTo(left(before.top)),
            ease(left(before.top), right(after.top), reach),
            PathCommand::LineTo(right(after.bottom)),
            ease(right(after.bottom), left(before.bottom), reach),
            PathCommand::Close,
        ];
        (ConnectorKind::Modify, path)
    }
}

/// Symmetric S-curve between two edge points
///
/// Control points sit at the horizontal offset `reach` from each
/// endpoint, pointing toward the other side.
fn ease(from: Point, to: Point, reach: f32) -> PathCommand {
    let dir = if to.x >= from.x { 1.0 } else { -1.0 };
    PathCommand::CurveTo {
        ctrl1: Point::new(from.x + dir * reach, from.y),
        ctrl2: Point::new(to.x - dir * reach, to.y),
        to,
    }
}
