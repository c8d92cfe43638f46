//! Ribbon CLI - renders the connector spine between two file revisions

mod config;
mod diff;
mod svg;

use anyhow::{Context, Result};
use clap::Parser;
use ribbon_core::{layout, LayoutConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ribbon")]
#[command(author, version, about = "Renders diff spine connectors as SVG or JSON")]
struct Args {
    /// Old revision of the file
    old: PathBuf,
    /// New revision of the file
    new: PathBuf,

    /// Scroll offset of the before pane in pixels
    #[arg(long, default_value_t = 0.0)]
    before_scroll: f32,

    /// Scroll offset of the after pane in pixels
    #[arg(long, default_value_t = 0.0)]
    after_scroll: f32,

    /// Visible viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f32,

    /// Pixels per line (overrides config file)
    #[arg(long)]
    line_height: Option<f32>,

    /// Horizontal span of the spine gutter in pixels (overrides config file)
    #[arg(long)]
    width: Option<f32>,

    /// Fill color as #rrggbb or #rrggbbaa (overrides config file)
    #[arg(long)]
    fill: Option<String>,

    /// Stroke color as #rrggbb or #rrggbbaa (overrides config file)
    #[arg(long)]
    stroke: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Standalone SVG document
    Svg,
    /// Raw curve descriptors
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Built-in defaults, then the config file, then CLI flags.
    let mut overrides = config::Config::load().layout;
    if args.line_height.is_some() {
        overrides.line_height = args.line_height;
    }
    if args.width.is_some() {
        overrides.width = args.width;
    }
    if args.fill.is_some() {
        overrides.fill = args.fill.clone();
    }
    if args.stroke.is_some() {
        overrides.stroke = args.stroke.clone();
    }
    let layout_config = LayoutConfig::default().with_overrides(&overrides);

    let old = fs::read_to_string(&args.old)
        .with_context(|| format!("failed to read {}", args.old.display()))?;
    let new = fs::read_to_string(&args.new)
        .with_context(|| format!("failed to read {}", args.new.display()))?;

    let ranges = diff::change_ranges(&old, &new);
    let descriptors = layout(
        &ranges,
        args.before_scroll,
        args.after_scroll,
        args.viewport_height,
        &layout_config,
    )?;

    match args.format {
        OutputFormat::Svg => print!(
            "{}",
            svg::render(&descriptors, layout_config.width, args.viewport_height)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptors)?),
    }

    Ok(())
}
