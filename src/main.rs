use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;
use barren_land::analysis::{
    analyze_interactive, analyze_report, load_rectangle_file, read_interactive, AnalysisReport,
};
use clap::Parser;

/// Sizes of the fertile regions left on a 400x600 plot after removing barren areas.
#[derive(Debug, Parser)]
#[command(name = "barren-land", version, about)]
struct Cli {
    /// Barren areas, each a quoted "x1 y1 x2 y2" quadruple (inclusive, 0-indexed)
    #[arg(value_name = "RECT")]
    rects: Vec<String>,

    /// Read barren areas from a JSON array of quadruple strings
    #[arg(long, value_name = "PATH")]
    file: Option<String>,

    /// Also prompt for barren areas on stdin when others were given
    #[arg(long)]
    interactive: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Print components and rejected input alongside the sizes
    #[arg(long, conflicts_with = "json")]
    detail: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();

    let result = run(Cli::parse(), io::stdin().lock(), io::stderr(), io::stdout().lock());
    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

/// Prompts go to `prompt` so `out` carries nothing but the report.
fn run<R: BufRead, P: Write, O: Write>(cli: Cli, input: R, prompt: P, mut out: O) -> anyhow::Result<()> {
    let mut specs = cli.rects;
    if let Some(path) = &cli.file {
        let loaded = load_rectangle_file(path).with_context(|| format!("loading barren areas from {}", path))?;
        specs.extend(loaded);
    }

    let report: AnalysisReport = if specs.is_empty() {
        analyze_interactive(input, prompt)?
    } else {
        if cli.interactive {
            specs.extend(read_interactive(input, prompt)?);
        }
        analyze_report(&specs)?
    };

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if cli.detail {
        writeln!(out, "{}", report.detail())?;
    } else {
        writeln!(out, "{}", report.sizes_line())?;
    }
    out.flush()?;
    Ok(())
}
