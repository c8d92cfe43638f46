//! Core layout engine for ribbon - spine connectors between diff panes
//!
//! Given the changed line ranges between two independently scrolled
//! panes, [`layout`] computes the closed vector curves that visually
//! link each before-range to its after-range across the spine gutter.
//! The pass is pure and stateless: identical inputs always produce an
//! identical descriptor sequence, and descriptors reference no mutable
//! state, so they can be handed to a rendering surface on another
//! thread.
//!
//! ```
//! use ribbon_core::{layout, ChangeRange, LayoutConfig};
//!
//! let ranges = [ChangeRange::changed(0..0, 0..3)];
//! let config = LayoutConfig::default();
//! let curves = layout(&ranges, 0.0, 0.0, 1000.0, &config).unwrap();
//! assert_eq!(curves.len(), 1);
//! ```

mod config;
mod error;
mod layout;
mod path;
mod range;

pub use config::{LayoutConfig, LayoutOverrides, Rgba};
pub use error::{LayoutError, Side};
pub use layout::layout;
pub use path::{ConnectorKind, CurveDescriptor, PathCommand, Point};
pub use range::{ChangeRange, LineSpan};
