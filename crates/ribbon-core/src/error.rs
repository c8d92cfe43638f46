//! Layout error taxonomy

use std::fmt;
use thiserror::Error;

/// Which pane a span belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => f.write_str("before"),
            Side::After => f.write_str("after"),
        }
    }
}

/// Contract violations surfaced by the layout pass
///
/// These are upstream programming errors (a broken diff engine or a
/// broken config), never clamped or corrected. A failed call produces
/// no partial output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("range {index}: {side} span is inverted ({start} > {end})")]
    InvalidSpan {
        index: usize,
        side: Side,
        start: usize,
        end: usize,
    },
    #[error("layout config: {field} must be positive, got {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}
