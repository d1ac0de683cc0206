use clap::Parser;
use graphwalk::{
    bench::{Benchmark, DEFAULT_START, ReportFormat, write_report},
    error::GraphResult,
    logging::init_tracing,
    search::AdjacencyGraph,
};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::error;

const DEFAULT_INPUT: &str = "Data.txt";

/// Compares BFS and DFS visiting cost from one start node to every other node
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(about = "Benchmarks BFS against DFS on an undirected edge-list graph", long_about = None)]
struct Args {
    /// Edge list, one `NODE_A,NODE_B` pair per line. Defaults to Data.txt next to the executable
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Node every traversal starts from
    #[arg(short, long, default_value = DEFAULT_START)]
    start: String,

    /// Output format of the report
    #[arg(long, value_enum, default_value_t = ReportFormat::Tsv)]
    format: ReportFormat,

    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,

    /// Wait for enter before exiting
    #[arg(long)]
    pause: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "graphwalk=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Data.txt beside the executable when present, else relative to the working directory.
fn default_input() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_INPUT)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

fn run(args: &Args) -> GraphResult<()> {
    let input = args.input.clone().unwrap_or_else(default_input);
    let graph = AdjacencyGraph::load_from_path(&input)?;

    let report = Benchmark::new(&graph, args.start.as_str())
        .with_progress(args.progress)
        .run();

    let stdout = io::stdout();
    write_report(&report.rows, args.format, &mut stdout.lock())?;

    if args.pause {
        print!("Press enter to exit.");
        io::stdout().flush()?;
        io::stdin().lock().read_line(&mut String::new())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
