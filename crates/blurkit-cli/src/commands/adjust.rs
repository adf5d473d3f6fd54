//! Adjust command.
//!
//! Applies a sequence of edits to a grid, left to right:
//!
//! ```text
//! darken=F      lighten=F      punch=F      scale=F
//! brightness=T  invert         simplify=HxV
//! mirror-h      mirror-v       transpose
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use blurkit_core::CoefficientGrid;
use blurkit_core::metrics::DEFAULT_MIDPOINT;
use clap::Args;
use thiserror::Error;
use tracing::debug;

use super::{read_grid, write_grid};

/// One edit applied by `adjust`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Darken(f32),
    Lighten(f32),
    Punch(f32),
    Scale(f32),
    Brightness(f32),
    Invert,
    MirrorH,
    MirrorV,
    Transpose,
    Simplify(usize, usize),
}

/// Error parsing an `--op` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct OpParseError(String);

fn parse_factor(name: &str, value: Option<&str>) -> Result<f32, OpParseError> {
    let value = value.ok_or_else(|| OpParseError(format!("{name} needs a value, e.g. {name}=0.5")))?;
    value
        .parse()
        .map_err(|_| OpParseError(format!("invalid number for {name}: '{value}'")))
}

impl FromStr for Op {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((n, v)) => (n.trim(), Some(v.trim())),
            None => (s.trim(), None),
        };
        let op = match name {
            "darken" => Op::Darken(parse_factor(name, value)?),
            "lighten" => Op::Lighten(parse_factor(name, value)?),
            "punch" => Op::Punch(parse_factor(name, value)?),
            "scale" => Op::Scale(parse_factor(name, value)?),
            "brightness" => Op::Brightness(parse_factor(name, value)?),
            "invert" => Op::Invert,
            "mirror-h" => Op::MirrorH,
            "mirror-v" => Op::MirrorV,
            "transpose" => Op::Transpose,
            "simplify" => {
                let size = value.ok_or_else(|| OpParseError("simplify needs HxV, e.g. simplify=4x3".into()))?;
                let (h, v) = size
                    .split_once(['x', 'X'])
                    .ok_or_else(|| OpParseError(format!("invalid simplify size: '{size}'")))?;
                let h = h.parse().map_err(|_| OpParseError(format!("invalid simplify size: '{size}'")))?;
                let v = v.parse().map_err(|_| OpParseError(format!("invalid simplify size: '{size}'")))?;
                Op::Simplify(h, v)
            }
            other => return Err(OpParseError(format!("unknown op: '{other}'"))),
        };
        Ok(op)
    }
}

/// Arguments for the `adjust` command.
#[derive(Args)]
pub struct AdjustArgs {
    /// Input grid (JSON, `-` for stdin)
    pub input: PathBuf,

    /// Edit to apply; repeat to chain
    #[arg(long = "op", required = true)]
    pub ops: Vec<Op>,

    /// Luminance that maps to brightness 0.5
    #[arg(long, default_value_t = DEFAULT_MIDPOINT)]
    pub midpoint: f32,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the adjust command.
pub fn run(args: AdjustArgs) -> Result<()> {
    let mut grid = read_grid(&args.input)?;
    for op in &args.ops {
        grid = apply(&grid, *op, args.midpoint)?;
        debug!(?op, dimensions = ?grid.dimensions(), "Applied op");
    }
    write_grid(&grid, args.output.as_deref())
}

/// Applies a single edit.
pub fn apply(grid: &CoefficientGrid, op: Op, midpoint: f32) -> Result<CoefficientGrid> {
    Ok(match op {
        Op::Darken(f) => grid.darken(f),
        Op::Lighten(f) => grid.lighten(f),
        Op::Punch(f) => grid.punch(f),
        Op::Scale(f) => grid * f,
        Op::Brightness(t) => grid.set_brightness(t, midpoint),
        Op::Invert => grid.invert_brightness(midpoint),
        Op::MirrorH => grid.mirrored_horizontally(),
        Op::MirrorV => grid.mirrored_vertically(),
        Op::Transpose => grid.transposed(),
        Op::Simplify(h, v) => grid.simplify(h, v)?,
    })
}
