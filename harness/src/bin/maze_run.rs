//! Terminal driver: load an ASCII maze, run the search, print the result.
//!
//! Usage: `maze_run <layout-file> [--config FILE] [--interval-ms N] [--no-animate]`
//!
//! The layout uses `#` for walls, `.` or space for open cells, `S` and `E`
//! for the endpoints. With animation on, the maze is redrawn after every
//! step. Exit code: 0 path found, 1 no path, 2 usage or input error.
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every step.

use std::path::PathBuf;
use std::process::ExitCode;

use maze_harness::config::MazeConfig;
use maze_harness::scheduler::ManualScheduler;
use maze_harness::session::MazeSession;
use maze_harness::surface::AsciiSurface;
use maze_kernel::grid::Grid;
use maze_search::engine::StepOutcome;
use tracing_subscriber::{fmt, EnvFilter};

struct Args {
    layout: PathBuf,
    config: Option<PathBuf>,
    interval_ms: Option<u64>,
    animate: bool,
}

const USAGE: &str =
    "usage: maze_run <layout-file> [--config FILE] [--interval-ms N] [--no-animate]";

fn parse_args() -> Result<Args, String> {
    let mut layout = None;
    let mut config = None;
    let mut interval_ms = None;
    let mut animate = true;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-animate" => animate = false,
            "--config" => {
                config = Some(PathBuf::from(
                    args.next().ok_or("--config needs a file")?,
                ));
            }
            "--interval-ms" => {
                let raw = args.next().ok_or("--interval-ms needs a value")?;
                interval_ms = Some(
                    raw.parse()
                        .map_err(|_| format!("--interval-ms: not a number: {raw}"))?,
                );
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            path if layout.is_none() => layout = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }
    Ok(Args {
        layout: layout.ok_or("missing layout file")?,
        config,
        interval_ms,
        animate,
    })
}

fn load_config(args: &Args, layout: &Grid) -> Result<MazeConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let bytes =
                std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
            MazeConfig::from_json_bytes(&bytes).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => MazeConfig::default(),
    };
    config.rows = layout.rows();
    config.cols = layout.cols();
    if let Some(ms) = args.interval_ms {
        config.step_interval_ms = ms;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn run(args: &Args) -> Result<bool, String> {
    let text = std::fs::read_to_string(&args.layout)
        .map_err(|e| format!("{}: {e}", args.layout.display()))?;
    let layout = Grid::from_ascii(&text).map_err(|e| format!("{}: {e}", args.layout.display()))?;
    let config = load_config(args, &layout)?;

    let surface = AsciiSurface::new(layout.rows(), layout.cols()).map_err(|e| e.to_string())?;
    let mut session = MazeSession::new(config, surface, ManualScheduler::new())
        .map_err(|e| e.to_string())?;
    session.load_layout(&layout).map_err(|e| e.to_string())?;
    session.begin_search().map_err(|e| e.to_string())?;

    let outcome = if args.animate {
        let mut last = None;
        while let Some(tick) = session.scheduler_mut().pop_next() {
            std::thread::sleep(tick.delay);
            if let Some(outcome) = session.on_tick(tick.ticket).map_err(|e| e.to_string())? {
                // Home the cursor and clear before redrawing.
                println!("\x1b[H\x1b[2J{}\n{}", session.surface().render(), session.status());
                last = Some(outcome);
            }
        }
        last
    } else {
        let outcome = session.run_to_completion().map_err(|e| e.to_string())?;
        println!("{}", session.surface().render());
        Some(outcome)
    };

    println!("{}", session.status());
    if let Some(stats) = session.stats() {
        println!(
            "steps={} visited={} enqueued={} frontier_high_water={}",
            stats.steps, stats.visited, stats.enqueued, stats.frontier_high_water
        );
    }
    if let Some(path) = session.final_path() {
        let cells: Vec<String> = path.cells().iter().map(ToString::to_string).collect();
        println!("path_len={} path={}", path.len(), cells.join(" "));
    }
    Ok(matches!(outcome, Some(StepOutcome::Found { .. })))
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(msg) => {
            eprintln!("maze_run: {msg}");
            ExitCode::from(2)
        }
    }
}
