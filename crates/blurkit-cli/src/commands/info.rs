//! Grid info command.
//!
//! Displays shape, average and contrast colours, brightness, and the colour
//! and darkness of every edge and corner.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blurkit_core::prelude::*;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use super::read_grid;

/// Arguments for the `info` command.
#[derive(Args)]
pub struct InfoArgs {
    /// Input grids (JSON, `-` for stdin)
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Luminance that maps to brightness 0.5
    #[arg(long, default_value_t = DEFAULT_MIDPOINT)]
    pub midpoint: f32,

    /// Luminance below which a region counts as dark
    #[arg(long, default_value_t = DEFAULT_DARK_THRESHOLD)]
    pub threshold: f32,

    /// Probe lattice size for the contrast colour
    #[arg(long, default_value_t = DEFAULT_PROBES)]
    pub probes: usize,
}

/// Colour and darkness of one named region.
#[derive(Serialize)]
struct RegionReport {
    name: &'static str,
    colour: String,
    dark: bool,
}

#[derive(Serialize)]
struct Report {
    path: String,
    horizontal_components: usize,
    vertical_components: usize,
    average: String,
    contrast: String,
    luminance: f32,
    brightness: f32,
    dark: bool,
    regions: Vec<RegionReport>,
}

const REGIONS: [(&str, Region); 8] = [
    ("left edge", Region::LEFT_EDGE),
    ("right edge", Region::RIGHT_EDGE),
    ("top edge", Region::TOP_EDGE),
    ("bottom edge", Region::BOTTOM_EDGE),
    ("top-left", Region::TOP_LEFT),
    ("top-right", Region::TOP_RIGHT),
    ("bottom-left", Region::BOTTOM_LEFT),
    ("bottom-right", Region::BOTTOM_RIGHT),
];

/// Runs the info command.
pub fn run(args: InfoArgs) -> Result<()> {
    for path in &args.input {
        let grid = read_grid(path)?;
        let report = analyze(&grid, path, &args);
        debug!(path = %path.display(), brightness = report.brightness, "Analyzed grid");

        if args.json {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        } else {
            print_text(&report);
        }

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

fn analyze(grid: &CoefficientGrid, path: &Path, args: &InfoArgs) -> Report {
    let regions = REGIONS
        .iter()
        .map(|&(name, region)| RegionReport {
            name,
            colour: grid.sample(region).to_hex(),
            dark: grid.is_dark_in(region, args.threshold),
        })
        .collect();

    Report {
        path: path.display().to_string(),
        horizontal_components: grid.horizontal_components(),
        vertical_components: grid.vertical_components(),
        average: grid.average().to_hex(),
        contrast: grid.contrast_linear_with(args.probes).to_hex(),
        luminance: grid.luminance(),
        brightness: grid.brightness(args.midpoint),
        dark: grid.is_dark(args.threshold),
        regions,
    }
}

/// Prints the report in human-readable text format.
fn print_text(report: &Report) {
    println!("{}", report.path);
    println!(
        "  Components: {}x{}",
        report.horizontal_components, report.vertical_components
    );
    println!("  Average:    {}", report.average);
    println!("  Contrast:   {}", report.contrast);
    println!("  Luminance:  {:.4}", report.luminance);
    println!("  Brightness: {:.4}", report.brightness);
    println!("  Dark:       {}", if report.dark { "yes" } else { "no" });
    for region in &report.regions {
        let marker = if region.dark { " (dark)" } else { "" };
        println!("  {:<13} {}{}", format!("{}:", region.name), region.colour, marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> InfoArgs {
        InfoArgs {
            input: vec![],
            json: false,
            midpoint: DEFAULT_MIDPOINT,
            threshold: DEFAULT_DARK_THRESHOLD,
            probes: DEFAULT_PROBES,
        }
    }

    #[test]
    fn test_analyze_vertical_gradient() {
        let grid = CoefficientGrid::blending_top_colours(Rgb::ONE, Rgb::ZERO);
        let report = analyze(&grid, Path::new("g.json"), &args());
        assert_eq!(report.horizontal_components, 1);
        assert_eq!(report.vertical_components, 2);
        let top = report.regions.iter().find(|r| r.name == "top edge").unwrap();
        let bottom = report.regions.iter().find(|r| r.name == "bottom edge").unwrap();
        assert_eq!(top.colour, "#ffffff");
        assert!(!top.dark);
        assert_eq!(bottom.colour, "#000000");
        assert!(bottom.dark);
    }

    #[test]
    fn test_report_serializes() {
        let grid = CoefficientGrid::from_colour(Rgb::splat(0.5));
        let report = analyze(&grid, Path::new("-"), &args());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["horizontal_components"], 1);
        assert_eq!(value["regions"].as_array().unwrap().len(), 8);
    }
}
