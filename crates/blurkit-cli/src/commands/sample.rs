//! Sample command.
//!
//! Reconstructs a `width x height` table of sRGB colours from a grid. Each
//! cell is the box average over its area unless `--point` asks for the
//! colour at the cell centre.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use blurkit_core::{CoefficientGrid, Rgb};
use clap::Args;
use tracing::debug;

use super::read_grid;

/// Arguments for the `sample` command.
#[derive(Args)]
pub struct SampleArgs {
    /// Input grid (JSON, `-` for stdin)
    pub input: PathBuf,

    /// Columns in the output table
    #[arg(short = 'W', long, default_value = "4")]
    pub width: usize,

    /// Rows in the output table
    #[arg(short = 'H', long, default_value = "4")]
    pub height: usize,

    /// Sample cell centres instead of averaging cell areas
    #[arg(long)]
    pub point: bool,

    /// Output as a JSON array of rows of hex strings
    #[arg(long)]
    pub json: bool,
}

/// Run the sample command.
pub fn run(args: SampleArgs) -> Result<()> {
    ensure!(args.width > 0 && args.height > 0, "--width and --height must be positive");
    let grid = read_grid(&args.input)?;
    debug!(width = args.width, height = args.height, point = args.point, "Sampling grid");

    let table: Vec<Vec<String>> = sample_table(&grid, args.width, args.height, args.point)
        .into_iter()
        .map(|row| row.into_iter().map(Rgb::to_hex).collect())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string(&table)?);
    } else {
        for row in &table {
            println!("{}", row.join(" "));
        }
    }
    Ok(())
}

/// Linear colours of every cell, row by row.
fn sample_table(grid: &CoefficientGrid, width: usize, height: usize, point: bool) -> Vec<Vec<Rgb>> {
    let (cw, ch) = (1.0 / width as f32, 1.0 / height as f32);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let origin = (x as f32 * cw, y as f32 * ch);
                    if point {
                        grid.point_sample(origin.0 + cw * 0.5, origin.1 + ch * 0.5)
                    } else {
                        grid.area_sample_sized(origin, (cw, ch))
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_cell_is_average() {
        let grid = CoefficientGrid::blending_corners(Rgb::ONE, Rgb::ZERO, Rgb::splat(0.5), Rgb::splat(0.25));
        let table = sample_table(&grid, 1, 1, false);
        assert_abs_diff_eq!(table[0][0], grid.average(), epsilon = 1e-5);
    }

    #[test]
    fn test_table_shape_and_gradient() {
        let grid = CoefficientGrid::blending_left_colours(Rgb::ZERO, Rgb::ONE);
        for point in [false, true] {
            let table = sample_table(&grid, 5, 2, point);
            assert_eq!(table.len(), 2);
            assert_eq!(table[0].len(), 5);
            assert!(table[0].windows(2).all(|w| w[0].r < w[1].r));
            assert_eq!(table[0], table[1]);
        }
    }
}
