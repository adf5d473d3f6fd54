//! Combine command.
//!
//! Adds, subtracts, or averages two grids coefficient by coefficient. Grids
//! of different shapes are zero-padded to the larger one, so the finer
//! grid's detail survives in the result.

use std::path::PathBuf;

use anyhow::Result;
use blurkit_core::CoefficientGrid;
use clap::{Args, ValueEnum};
use tracing::info;

use super::{read_grid, write_grid};

/// How to combine two grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// (a + b) / 2
    Avg,
}

/// Arguments for the `combine` command.
#[derive(Args)]
pub struct CombineArgs {
    /// First grid
    pub a: PathBuf,

    /// Second grid
    pub b: PathBuf,

    /// Combination mode
    #[arg(short, long, value_enum, default_value = "add")]
    pub mode: Mode,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the combine command.
pub fn run(args: CombineArgs) -> Result<()> {
    let a = read_grid(&args.a)?;
    let b = read_grid(&args.b)?;
    if a.dimensions() != b.dimensions() {
        info!(a = ?a.dimensions(), b = ?b.dimensions(), "Shapes differ, padding with zeros");
    }
    let result = combine(&a, &b, args.mode);
    write_grid(&result, args.output.as_deref())
}

fn combine(a: &CoefficientGrid, b: &CoefficientGrid, mode: Mode) -> CoefficientGrid {
    match mode {
        Mode::Add => a + b,
        Mode::Sub => a - b,
        Mode::Avg => (a + b) / 2.0,
    }
}
