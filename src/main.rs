//! CLI for bullseye solving

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{anyhow, ensure, Context};
use bullseye_path::{displacement::apply_displacements, Board, Point, SearchOutcome};
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// A way from the top-left corner to the bullseye
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File, where to read the board. Use `-` for stdin.
    input: PathBuf,

    /// File, where to write the path. Use `-` or leave out for stdout.
    output: Option<PathBuf>,

    /// Check the found path against the board and print it square by square
    #[arg(long)]
    verify: bool,

    /// Exit code when the bullseye cannot be reached
    #[arg(long, default_value_t = 2)]
    unreachable_exit_code: u8,

    /// Log more; repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Could not initialize logging: {e}"))
}

fn is_std_stream(path: &std::path::Path) -> bool {
    path.to_str() == Some("-")
}

/// Check `path` both as squares and as the text written out
fn verify(board: &Board, path: &[Point], rendered: &str) -> anyhow::Result<()> {
    board.verify_path(path)?;
    let replayed = apply_displacements(Point::ORIGIN, rendered)?;
    ensure!(
        replayed == path,
        "Displacements `{}` do not replay the found path",
        rendered.trim_end()
    );

    let chain = path
        .iter()
        .chunks(7)
        .into_iter()
        .map(|mut line| line.join(" -> "))
        .join(" ->\n");
    eprintln!("{chain}");
    Ok(())
}

/// Read board from file, write path
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let input: Box<dyn Read> = if is_std_stream(&args.input) {
        Box::new(io::stdin().lock())
    } else {
        Box::new(
            fs::File::open(&args.input)
                .with_context(|| format!("Could not open board {}", args.input.display()))?,
        )
    };

    // Buffered so that nothing is written before verification
    let mut rendered = Vec::new();
    let (board, outcome) = bullseye_path::run(input, &mut rendered)
        .with_context(|| format!("Could not solve board {}", args.input.display()))?;
    debug!(rows = board.rows(), cols = board.cols(), "Board solved");

    let path = match outcome {
        SearchOutcome::Found(path) => path,
        SearchOutcome::Unreachable { explored } => {
            eprintln!("No path to the bullseye ({explored} squares explored)");
            return Ok(ExitCode::from(args.unreachable_exit_code));
        }
    };
    let rendered = String::from_utf8(rendered).context("Path is not valid UTF-8")?;

    if args.verify {
        verify(&board, &path, &rendered)?;
    }

    match args.output {
        Some(output) if !is_std_stream(&output) => fs::write(&output, &rendered)
            .with_context(|| format!("Could not write path to {}", output.display()))?,
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Could not write path to stdout")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
