//! Blend command.
//!
//! Builds a grid from plain sRGB colours: a flat colour, a vertical or
//! horizontal two-colour gradient, four corners, or a left-to-right series.

use std::path::PathBuf;

use anyhow::{Result, bail};
use blurkit_core::{CoefficientGrid, Rgb};
use clap::Args;
use tracing::info;

use super::write_grid;

/// Arguments for the `blend` command.
#[derive(Args)]
pub struct BlendArgs {
    /// Flat colour
    #[arg(long, conflicts_with_all = ["top", "left", "corners", "series"])]
    pub colour: Option<Rgb>,

    /// Top colour of a vertical gradient
    #[arg(long, requires = "bottom", conflicts_with_all = ["left", "corners", "series"])]
    pub top: Option<Rgb>,

    /// Bottom colour of a vertical gradient
    #[arg(long, requires = "top")]
    pub bottom: Option<Rgb>,

    /// Left colour of a horizontal gradient
    #[arg(long, requires = "right", conflicts_with_all = ["corners", "series"])]
    pub left: Option<Rgb>,

    /// Right colour of a horizontal gradient
    #[arg(long, requires = "left")]
    pub right: Option<Rgb>,

    /// Corner colours: top-left top-right bottom-left bottom-right
    #[arg(long, num_args = 4, value_names = ["TL", "TR", "BL", "BR"], conflicts_with = "series")]
    pub corners: Option<Vec<Rgb>>,

    /// Left-to-right colour series
    #[arg(long, num_args = 1..)]
    pub series: Option<Vec<Rgb>>,

    /// Horizontal components for --series (1-9)
    #[arg(long, default_value = "5")]
    pub components: usize,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the blend command.
pub fn run(args: BlendArgs) -> Result<()> {
    let grid = build(&args)?;
    let (h, v) = grid.dimensions();
    info!(h, v, average = %grid.average().to_hex(), "Blended grid");
    write_grid(&grid, args.output.as_deref())
}

fn build(args: &BlendArgs) -> Result<CoefficientGrid> {
    if let Some(colour) = args.colour {
        return Ok(CoefficientGrid::from_colour(colour));
    }
    if let (Some(top), Some(bottom)) = (args.top, args.bottom) {
        return Ok(CoefficientGrid::blending_top_colours(top, bottom));
    }
    if let (Some(left), Some(right)) = (args.left, args.right) {
        return Ok(CoefficientGrid::blending_left_colours(left, right));
    }
    if let Some(corners) = &args.corners {
        let &[tl, tr, bl, br] = corners.as_slice() else {
            bail!("--corners takes exactly four colours");
        };
        return Ok(CoefficientGrid::blending_corners(tl, tr, bl, br));
    }
    if let Some(series) = &args.series {
        return Ok(CoefficientGrid::from_horizontal_colours(series, args.components)?);
    }
    bail!("Nothing to blend: pass --colour, --top/--bottom, --left/--right, --corners, or --series")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> BlendArgs {
        BlendArgs {
            colour: None,
            top: None,
            bottom: None,
            left: None,
            right: None,
            corners: None,
            series: None,
            components: 5,
            output: None,
        }
    }

    #[test]
    fn test_build_flat() {
        let args = BlendArgs {
            colour: Some(Rgb::new(0.2, 0.4, 0.6)),
            ..empty()
        };
        let grid = build(&args).unwrap();
        assert_eq!(grid.dimensions(), (1, 1));
        assert_eq!(grid.average(), Rgb::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_build_vertical() {
        let args = BlendArgs {
            top: Some(Rgb::ONE),
            bottom: Some(Rgb::ZERO),
            ..empty()
        };
        assert_eq!(build(&args).unwrap().dimensions(), (1, 2));
    }

    #[test]
    fn test_build_series() {
        let args = BlendArgs {
            series: Some(vec![Rgb::ONE, Rgb::ZERO, Rgb::ONE]),
            components: 4,
            ..empty()
        };
        assert_eq!(build(&args).unwrap().dimensions(), (4, 1));
    }

    #[test]
    fn test_build_nothing() {
        assert!(build(&empty()).is_err());
    }
}
