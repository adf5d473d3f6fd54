//! CLI command implementations

pub mod adjust;
pub mod blend;
pub mod combine;
pub mod info;
pub mod sample;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use blurkit_core::CoefficientGrid;
use tracing::debug;

/// Loads a grid from a JSON file, or stdin when `path` is `-`.
pub fn read_grid(path: &Path) -> Result<CoefficientGrid> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read grid from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?
    };
    let grid: CoefficientGrid = serde_json::from_str(&text)
        .with_context(|| format!("Invalid grid in {}", path.display()))?;
    let (h, v) = grid.dimensions();
    debug!(path = %path.display(), h, v, "Loaded grid");
    Ok(grid)
}

/// Writes a grid as JSON to `path`, or stdout when `path` is `None`.
pub fn write_grid(grid: &CoefficientGrid, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string(grid).context("Failed to serialize grid")?;
    match path {
        Some(path) => {
            fs::write(path, json + "\n").with_context(|| format!("Failed to write: {}", path.display()))?;
            debug!(path = %path.display(), "Saved grid");
        }
        None => println!("{json}"),
    }
    Ok(())
}
