//! Rendering surface adapter: curve descriptors to SVG
//!
//! The layout core stays free of any rendering concern; this module
//! materializes its descriptors into a standalone SVG document with
//! one `<path>` per connector. Strokes are fixed at 1px and marked
//! `non-scaling-stroke` so zooming the surface never fattens them.

use ribbon_core::{CurveDescriptor, PathCommand, Rgba};
use std::fmt::Write;

/// Render the descriptor sequence as a complete SVG document
///
/// `width` is the horizontal span of the spine gutter and
/// `viewport_height` the visible height, both in pixels.
pub fn render(descriptors: &[CurveDescriptor], width: f32, viewport_height: f32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = viewport_height,
    );
    for descriptor in descriptors {
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-opacity="{}" stroke-width="1" vector-effect="non-scaling-stroke"/>"#,
            path_data(&descriptor.path),
            hex(descriptor.fill),
            descriptor.fill.alpha_fraction(),
            hex(descriptor.stroke),
            descriptor.stroke.alpha_fraction(),
        );
    }
    out.push_str("</svg>\n");
    out
}

/// SVG path data for one descriptor
fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                let _ = write!(data, "M {} {}", p.x, p.y);
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                let _ = write!(
                    data,
                    "C {} {}, {} {}, {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                );
            }
            PathCommand::LineTo(p) => {
                let _ = write!(data, "L {} {}", p.x, p.y);
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

fn hex(color: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribbon_core::{layout, ChangeRange, LayoutConfig};

    fn descriptors() -> Vec<CurveDescriptor> {
        let ranges = [
            ChangeRange::changed(0..0, 0..3),
            ChangeRange::changed(4..6, 5..9),
        ];
        layout(&ranges, 0.0, 0.0, 800.0, &LayoutConfig::default()).expect("layout")
    }

    #[test]
    fn test_one_path_per_descriptor() {
        let svg = render(&descriptors(), 24.0, 800.0);
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_strokes_do_not_scale() {
        let svg = render(&descriptors(), 24.0, 800.0);
        assert_eq!(svg.matches(r#"vector-effect="non-scaling-stroke""#).count(), 2);
        assert_eq!(svg.matches(r#"stroke-width="1""#).count(), 2);
    }

    #[test]
    fn test_path_data_shape() {
        let svg = render(&descriptors(), 24.0, 800.0);
        // The insertion connector from the first range: anchor at 0.5,
        // after edge spanning 0.5..59.5.
        assert!(
            svg.contains("M 0 0.5 C 12 0.5, 12 0.5, 24 0.5 L 24 59.5"),
            "unexpected path data in: {svg}"
        );
        assert!(svg.contains('Z'));
    }

    #[test]
    fn test_colors_and_opacity_carried_through() {
        let svg = render(&descriptors(), 24.0, 800.0);
        assert!(svg.contains(r##"fill="#808080""##));
        assert!(svg.contains(r#"fill-opacity="0.2""#));
    }

    #[test]
    fn test_empty_sequence_renders_empty_document() {
        let svg = render(&[], 24.0, 800.0);
        assert!(!svg.contains("<path"));
        assert!(svg.contains("</svg>"));
    }
}
