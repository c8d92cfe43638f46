//! Drawable output of the layout pass

use crate::config::Rgba;
use serde::{Deserialize, Serialize};

/// A point in the shared spine coordinate space (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One path-construction command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    /// Cubic bezier to `to` with the two control points
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    LineTo(Point),
    Close,
}

/// Which side of the change is degenerate, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorKind {
    /// Before side is a point, after side a span
    Insert,
    /// Before side a span, after side a point
    Delete,
    /// Both sides are spans
    Modify,
}

/// One closed filled-and-stroked connector shape
///
/// Immutable once produced; the rendering surface instantiates a
/// drawable from it (non-scaling 1px stroke) and discards it on the
/// next layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDescriptor {
    pub kind: ConnectorKind,
    pub path: Vec<PathCommand>,
    pub fill: Rgba,
    pub stroke: Rgba,
}

impl CurveDescriptor {
    /// Starting point of the path, if any
    pub fn start(&self) -> Option<Point> {
        match self.path.first() {
            Some(PathCommand::MoveTo(point)) => Some(*point),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_start() {
        let descriptor = CurveDescriptor {
            kind: ConnectorKind::Modify,
            path: vec![
                PathCommand::MoveTo(Point::new(0.0, 40.5)),
                PathCommand::Close,
            ],
            fill: Rgba::new(0, 0, 0, 255),
            stroke: Rgba::new(0, 0, 0, 255),
        };
        assert_eq!(descriptor.start(), Some(Point::new(0.0, 40.5)));
    }

    #[test]
    fn test_descriptor_round_trips_through_json() {
        let descriptor = CurveDescriptor {
            kind: ConnectorKind::Insert,
            path: vec![
                PathCommand::MoveTo(Point::new(0.0, 0.5)),
                PathCommand::CurveTo {
                    ctrl1: Point::new(12.0, 0.5),
                    ctrl2: Point::new(12.0, 0.5),
                    to: Point::new(24.0, 0.5),
                },
                PathCommand::LineTo(Point::new(24.0, 59.5)),
                PathCommand::Close,
            ],
            fill: Rgba::new(128, 128, 128, 51),
            stroke: Rgba::new(128, 128, 128, 89),
        };
        let json = serde_json::to_string(&descriptor).expect("serialize");
        let back: CurveDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, descriptor);
    }
}
