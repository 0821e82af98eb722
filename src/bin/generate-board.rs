//! CLI for board generation

use clap::Parser;
use itertools::Itertools;
use bullseye_path::board_generator::BoardGenerator;

/// Board generator for bullseye puzzles
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Number of columns
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate board, print it in the solver's input format
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut gen = BoardGenerator::new(args.seed);
    let res = gen.generate_board(args.rows.into(), args.cols.into());
    println!("{} {}", args.rows, args.cols);
    println!("{}", res.iter().map(|row| row.iter().join(" ")).join("\n"));
    Ok(())
}
